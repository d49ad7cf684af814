//! Two-stage drawtext overlay: the wrapped quote above center, the author
//! byline below it.
//!
//! Layout is built as plain data first and serialized to ffmpeg filter
//! syntax in [`DrawTextStage::to_filter`], so text and positions can be
//! checked without running anything.

use std::path::PathBuf;

use quotereel_common::config::{AppConfig, StyleConfig};
use quotereel_model::record::QuoteRecord;
use quotereel_model::text::{author_byline, escape_filter_path, escape_filter_text, wrap_text};

/// Style shared by both stages.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: u32,
    pub font_color: String,
    pub box_color: String,
    pub box_opacity: f64,
    pub box_border_w: u32,
}

impl From<&StyleConfig> for TextStyle {
    fn from(style: &StyleConfig) -> Self {
        Self {
            font_size: style.font_size,
            font_color: style.font_color.clone(),
            box_color: style.box_color.clone(),
            box_opacity: style.box_opacity,
            box_border_w: style.box_border_w,
        }
    }
}

/// Horizontal placement of a text block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizontalPosition {
    /// Centered from the drawn text width and the frame width.
    Centered,
}

/// Vertical placement of a text block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalPosition {
    /// Frame center plus a pixel offset; negative moves the block up.
    CenterOffset(f64),
}

impl HorizontalPosition {
    fn expr(self) -> String {
        match self {
            HorizontalPosition::Centered => "(w-text_w)/2".to_string(),
        }
    }
}

impl VerticalPosition {
    fn expr(self) -> String {
        match self {
            VerticalPosition::CenterOffset(offset) => {
                let sign = if offset < 0.0 { '-' } else { '+' };
                format!("(h-text_h)/2{sign}{:.1}", offset.abs())
            }
        }
    }
}

/// One `drawtext` filter.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawTextStage {
    pub font_file: PathBuf,

    /// Already escaped with [`escape_filter_text`].
    pub text: String,

    pub x: HorizontalPosition,
    pub y: VerticalPosition,
    pub style: TextStyle,
}

impl DrawTextStage {
    /// Serialize to `drawtext=key=value:...` syntax.
    pub fn to_filter(&self) -> String {
        format!(
            "drawtext=fontfile='{font}':text='{text}':x={x}:y={y}:fontsize={size}:fontcolor={color}:box=1:boxcolor={box_color}@{opacity}:boxborderw={border}",
            font = escape_filter_path(&self.font_file.to_string_lossy()),
            text = self.text,
            x = self.x.expr(),
            y = self.y.expr(),
            size = self.style.font_size,
            color = self.style.font_color,
            box_color = self.style.box_color,
            opacity = self.style.box_opacity,
            border = self.style.box_border_w,
        )
    }
}

/// The quote and author stages for one job.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySpec {
    pub quote: DrawTextStage,
    pub author: DrawTextStage,
}

impl OverlaySpec {
    /// Wrap, prefix, and escape a record's text and place both blocks
    /// symmetrically around the vertical center.
    pub fn for_record(record: &QuoteRecord, config: &AppConfig) -> Self {
        let wrapped = wrap_text(&record.quote, config.text.wrap_width);
        let byline = author_byline(&config.text.author_prefix, &record.author);
        let half_offset = f64::from(config.style.author_offset_y) / 2.0;
        let style = TextStyle::from(&config.style);

        let stage = |text: &str, offset: f64| DrawTextStage {
            font_file: config.paths.font_file.clone(),
            text: escape_filter_text(text),
            x: HorizontalPosition::Centered,
            y: VerticalPosition::CenterOffset(offset),
            style: style.clone(),
        };

        Self {
            quote: stage(&wrapped, -half_offset),
            author: stage(&byline, half_offset),
        }
    }

    /// The full `-vf` value: quote stage, then author stage.
    pub fn to_filter(&self) -> String {
        format!("{},{}", self.quote.to_filter(), self.author.to_filter())
    }
}
