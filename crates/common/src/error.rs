//! Error types shared across quotereel crates.

use std::path::PathBuf;

/// Top-level error type for quotereel operations.
#[derive(Debug, thiserror::Error)]
pub enum QuotereelError {
    #[error("Input error: {message}")]
    Input { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using QuotereelError.
pub type QuotereelResult<T> = Result<T, QuotereelError>;

impl QuotereelError {
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_message() {
        let err = QuotereelError::render("ffmpeg missing");
        assert_eq!(err.to_string(), "Render error: ffmpeg missing");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: QuotereelError = io.into();
        assert_eq!(err.to_string(), "gone");
    }

    #[test]
    fn test_file_not_found_names_the_path() {
        let err = QuotereelError::FileNotFound {
            path: PathBuf::from("quotes.csv"),
        };
        assert_eq!(err.to_string(), "File not found: quotes.csv");
    }
}
