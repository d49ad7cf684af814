//! quotereel data model
//!
//! Defines the inputs of a batch run:
//! - **Records:** one `(quote, author)` pair per input row, and the render
//!   job derived from it
//! - **Source:** lazy reader over the delimited quote file
//! - **Text:** quote wrapping, author byline, and filter-text escaping

pub mod record;
pub mod source;
pub mod text;

pub use record::*;
pub use source::*;
pub use text::*;
