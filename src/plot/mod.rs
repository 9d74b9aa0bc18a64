//! Renderer-independent plotting helpers.
//!
//! - terminal ASCII chart (`ascii`)
//! - the series color/glyph palette shared by every renderer (`palette`)

pub mod ascii;
pub mod palette;

pub use ascii::render_ascii_chart;
