//! Text layout for the overlay: quote wrapping, author byline, and escaping
//! for drawtext filter values.

/// Reflow `text` into lines for a `width`-column text block.
///
/// Breaks only at whitespace and collapses whitespace runs to one space.
/// A line together with its trailing break must fit in `width` columns, so
/// any line holding more than one word is shorter than `width`. A single word
/// wider than the block is kept whole on its own line.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len < width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// [`wrap_lines`] joined with newlines, as drawtext expects.
pub fn wrap_text(text: &str, width: usize) -> String {
    wrap_lines(text, width).join("\n")
}

/// Author line shown under the quote, e.g. `- Steve Jobs`.
pub fn author_byline(prefix: &str, author: &str) -> String {
    format!("{prefix}{author}")
}

/// Escape text for a single-quoted drawtext `text='...'` value.
///
/// `'` closes the quoted value, emits an escaped apostrophe and reopens it
/// (`'\''`); `:` becomes `\:` because it separates filter options.
///
/// Apply exactly once. The result is not a fixed point: escaping it again
/// escapes the inserted backslashes and apostrophes a second time.
pub fn escape_filter_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\'' => escaped.push_str("'\\''"),
            ':' => escaped.push_str("\\:"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape a file path for a single-quoted filter option such as
/// `fontfile='...'`.
///
/// Same quoting as [`escape_filter_text`], plus `\` is doubled so Windows
/// separators survive.
pub fn escape_filter_path(path: &str) -> String {
    path.replace('\\', "\\\\")
        .replace('\'', "'\\''")
        .replace(':', "\\:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_breaks_before_the_width() {
        let lines = wrap_lines("The only way to do great work is to love what you do", 40);
        assert_eq!(lines, vec!["The only way to do great work is to", "love what you do"]);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap_text("Be yourself", 40), "Be yourself");
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap_text("  a \t b\n c  ", 40), "a b c");
    }

    #[test]
    fn test_wrap_keeps_long_word_whole() {
        let lines = wrap_lines("see Pneumonoultramicroscopicsilicovolcanoconiosis now", 10);
        assert_eq!(
            lines,
            vec!["see", "Pneumonoultramicroscopicsilicovolcanoconiosis", "now"]
        );
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_lines("", 40).is_empty());
        assert_eq!(wrap_text("   ", 40), "");
    }

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        // 9 chars, 18 bytes per word
        let lines = wrap_lines("ééééééééé ééééééééé", 20);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_author_byline() {
        assert_eq!(author_byline("- ", "Steve Jobs"), "- Steve Jobs");
    }

    #[test]
    fn test_escape_apostrophe_and_colon() {
        assert_eq!(escape_filter_text("It's 5:00"), r"It'\''s 5\:00");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_filter_text("- Steve Jobs"), "- Steve Jobs");
    }

    #[test]
    fn test_escape_path_with_drive_letter() {
        assert_eq!(
            escape_filter_path("C:/Windows/Fonts/arial.ttf"),
            r"C\:/Windows/Fonts/arial.ttf"
        );
        assert_eq!(
            escape_filter_path(r"C:\Fonts\O'Neil.ttf"),
            r"C\:\\Fonts\\O'\''Neil.ttf"
        );
        assert_eq!(escape_filter_path("fonts/arial.ttf"), "fonts/arial.ttf");
    }

    #[test]
    fn test_escape_twice_double_escapes() {
        let once = escape_filter_text("a:b");
        let twice = escape_filter_text(&once);
        assert_eq!(once, r"a\:b");
        assert_eq!(twice, r"a\\:b");
        assert_ne!(once, twice);
    }

    proptest! {
        #[test]
        fn prop_wrap_preserves_words(words in prop::collection::vec("[a-zA-Z',.:]{1,15}", 0..40), width in 1usize..80) {
            let text = words.join(" ");
            let lines = wrap_lines(&text, width);
            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
            let original: Vec<&str> = words.iter().map(String::as_str).collect();
            prop_assert_eq!(rejoined, original);
        }

        #[test]
        fn prop_multi_word_lines_fit(words in prop::collection::vec("[a-z]{1,12}", 0..40), width in 1usize..80) {
            let text = words.join(" ");
            for line in wrap_lines(&text, width) {
                if line.contains(' ') {
                    prop_assert!(line.chars().count() < width);
                }
            }
        }

        #[test]
        fn prop_escape_leaves_no_bare_colon(text in "[^\\\\]{0,60}") {
            let escaped = escape_filter_text(&text);
            let chars: Vec<char> = escaped.chars().collect();
            for (i, ch) in chars.iter().enumerate() {
                if *ch == ':' {
                    prop_assert!(i > 0 && chars[i - 1] == '\\');
                }
            }
            prop_assert_eq!(
                escaped.matches('\\').count(),
                text.matches('\'').count() + text.matches(':').count()
            );
        }
    }
}
