//! Text normalization shared by quotes and composed fragment text.

pub mod normalize;

pub use normalize::{is_blank, normalize_whitespace, NormalizedBuffer};
