//! Quote records and the render jobs built from them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use quotereel_common::config::{AppConfig, EncodingConfig};

/// One parsed input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Quote text, trimmed, with every `"` removed.
    pub quote: String,

    /// Author name, trimmed.
    pub author: String,
}

impl QuoteRecord {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
        }
    }

    /// Split a raw row at the last `delimiter`.
    ///
    /// Only the trailing field is the author, so quotes may contain the
    /// delimiter themselves. Returns `None` when the row has no delimiter.
    ///
    /// Double quotes are stripped from the quote part unconditionally, which
    /// also removes quotation marks that belong to the quote itself.
    pub fn parse(line: &str, delimiter: char) -> Option<Self> {
        let (quote_part, author_part) = line.trim().rsplit_once(delimiter)?;
        Some(Self {
            quote: quote_part.trim().replace('"', ""),
            author: author_part.trim().to_string(),
        })
    }
}

/// The unit of work producing one output video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    pub record: QuoteRecord,

    /// 1-based row index among non-header, non-blank lines.
    pub index: usize,

    /// Destination video file.
    pub output_path: PathBuf,
}

impl RenderJob {
    pub fn new(record: QuoteRecord, index: usize, config: &AppConfig) -> Self {
        let output_path = output_path_for(&config.paths.output_dir, index, &config.encoding);
        Self {
            record,
            index,
            output_path,
        }
    }
}

/// Deterministic output location for the row at `index`.
pub fn output_path_for(output_dir: &Path, index: usize, encoding: &EncodingConfig) -> PathBuf {
    output_dir.join(format!(
        "{}{}.{}",
        encoding.output_prefix, index, encoding.output_extension
    ))
}
