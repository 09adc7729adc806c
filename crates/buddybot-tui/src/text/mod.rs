//! Text rendering utilities.
//!
//! - [`render_markdown`] - Render bot replies to styled, wrapped Lines
//! - [`wrap_text`] - Plain-text wrapping
//! - [`visual_width`], [`truncate_to_width`] - Unicode-aware width helpers

mod markdown;
mod styles;
mod width;
mod wrap;

pub use markdown::render_markdown;
pub use width::{char_width, truncate_to_width, visual_width};
pub use wrap::wrap_text;
