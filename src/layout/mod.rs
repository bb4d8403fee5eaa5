//! Page layout: positioned text fragments and their grouping into visual lines.
//!
//! - [`TextFragment`]: one positioned glyph run in document space
//! - [`LineRectBuilder`]: baseline grouping and per-line highlight boxes

pub mod line_rects;
pub mod text_fragment;

// Re-export main types
pub use line_rects::{build_rects, group_lines, same_line, LineRectBuilder};
pub use text_fragment::{retain_text, TextFragment};
