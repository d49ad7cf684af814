//! quotereel render engine
//!
//! Turns quote rows into finished videos, one ffmpeg run per row.
//!
//! # Pipeline Architecture
//!
//! ```text
//! quotes.csv ── RowSource ── QuoteRecord
//!                                │
//!                                ├── wrap + escape (quote, byline)
//!                                │
//!                                ▼
//!                           OverlaySpec ── drawtext,drawtext
//!                                │
//! background.jpg ──┐             ▼
//!                  ├──────── FfmpegCommand ── RenderBackend
//! music.mp3 ───────┘                               │
//!                                                  ▼
//!                                   quote_video_<n>.mp4 + RunReporter
//! ```

pub mod backend;
pub mod batch;
pub mod command;
pub mod overlay;
pub mod report;

pub use backend::*;
pub use batch::*;
pub use command::*;
pub use overlay::*;
pub use report::*;
