//! Application configuration.
//!
//! The whole run reads one immutable [`AppConfig`], built at startup and
//! passed by reference to every stage of the pipeline.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QuotereelError, QuotereelResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Input, output, and asset locations.
    pub paths: PathsConfig,

    /// Quote parsing and wrapping.
    pub text: TextConfig,

    /// Overlay appearance.
    pub style: StyleConfig,

    /// Encoder invocation parameters.
    pub encoding: EncodingConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// File locations used by a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Delimited quote file (first line is a header).
    pub input_file: PathBuf,

    /// Directory receiving one video per row.
    pub output_dir: PathBuf,

    /// Still image looped as the video track.
    pub background_image: PathBuf,

    /// Audio track mixed into every video.
    pub audio_file: PathBuf,

    /// Font used by both overlay stages.
    pub font_file: PathBuf,
}

/// Row parsing and text layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Column budget for the wrapped quote.
    pub wrap_width: usize,

    /// Field delimiter; the last occurrence on a row separates the author.
    pub delimiter: char,

    /// Marker placed before the author name.
    pub author_prefix: String,
}

/// Overlay appearance shared by the quote and author stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font_size: u32,
    pub font_color: String,

    /// Background box color behind each text block.
    pub box_color: String,

    /// Background box opacity in `[0.0, 1.0]`.
    pub box_opacity: f64,

    /// Padding around the text inside the box, in pixels.
    pub box_border_w: u32,

    /// Vertical distance (pixels) between the quote block and the author.
    pub author_offset_y: u32,
}

/// Encoder parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// Encoder executable, resolved through `PATH` when not absolute.
    pub ffmpeg_bin: String,

    /// Clip length in seconds.
    pub duration_secs: u32,

    pub video_codec: String,
    pub audio_codec: String,
    pub pixel_format: String,

    /// Output file name prefix; the row index follows it.
    pub output_prefix: String,

    /// Output container extension, without the dot.
    pub output_extension: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "quotereel=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("quotes.csv"),
            output_dir: PathBuf::from("output_videos"),
            background_image: PathBuf::from("background.jpg"),
            audio_file: PathBuf::from("music.mp3"),
            font_file: PathBuf::from("arial.ttf"),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            wrap_width: 40,
            delimiter: ',',
            author_prefix: "- ".to_string(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: 52,
            font_color: "white".to_string(),
            box_color: "black".to_string(),
            box_opacity: 0.5,
            box_border_w: 15,
            author_offset_y: 120,
        }
    }
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            ffmpeg_bin: "ffmpeg".to_string(),
            duration_secs: 10,
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            pixel_format: "yuv420p".to_string(),
            output_prefix: "quote_video_".to_string(),
            output_extension: "mp4".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(QuotereelError::FileNotFound { .. }) => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit file. Unlike [`AppConfig::load`], any
    /// read or parse problem is an error.
    pub fn load_from(path: &Path) -> QuotereelResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => QuotereelError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => QuotereelError::Io(e),
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write config as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> QuotereelResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values that would make every job fail or produce garbage.
    pub fn validate(&self) -> QuotereelResult<()> {
        if self.text.wrap_width == 0 {
            return Err(QuotereelError::config("text.wrap_width must be at least 1"));
        }
        if self.encoding.duration_secs == 0 {
            return Err(QuotereelError::config(
                "encoding.duration_secs must be at least 1",
            ));
        }
        if self.style.font_size == 0 {
            return Err(QuotereelError::config("style.font_size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.style.box_opacity) {
            return Err(QuotereelError::config(format!(
                "style.box_opacity must be within [0, 1], got {}",
                self.style.box_opacity
            )));
        }
        if self.encoding.ffmpeg_bin.trim().is_empty() {
            return Err(QuotereelError::config("encoding.ffmpeg_bin is empty"));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("quotereel").join("config.json")
}
