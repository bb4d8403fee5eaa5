//! Positioned text fragments as reported by a page's text-extraction layer.
//!
//! A fragment is one run of glyphs with a baseline origin in document space
//! (Y grows upward from the page bottom), an advance width, a height and a flag
//! telling whether a line or paragraph break follows it in reading order.

use crate::text::is_blank;
use serde::{Deserialize, Serialize};

/// A positioned run of text on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// The glyph run as extracted
    pub text: String,
    /// Baseline origin X in document space
    pub baseline_x: f32,
    /// Baseline origin Y in document space, measured from the page bottom
    pub baseline_y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent, measured downward from the baseline
    pub height: f32,
    /// A line break follows this fragment in reading order
    #[serde(default)]
    pub ends_line: bool,
}

impl TextFragment {
    /// Create a fragment from its baseline origin and extent.
    pub fn new(
        text: impl Into<String>,
        baseline_x: f32,
        baseline_y: f32,
        width: f32,
        height: f32,
        ends_line: bool,
    ) -> Self {
        Self {
            text: text.into(),
            baseline_x,
            baseline_y,
            width,
            height,
            ends_line,
        }
    }

    /// Create a fragment from a text-content item's transform matrix `[a, b, c, d, e, f]`.
    ///
    /// Only the translation part (`e`, `f`) is used: it is the baseline origin.
    ///
    /// ```
    /// use quote_locator::layout::TextFragment;
    ///
    /// let frag = TextFragment::from_transform("Hello", [12.0, 0.0, 0.0, 12.0, 72.0, 700.0], 30.0, 12.0, false);
    /// assert_eq!(frag.baseline_x, 72.0);
    /// assert_eq!(frag.baseline_y, 700.0);
    /// ```
    pub fn from_transform(
        text: impl Into<String>,
        transform: [f32; 6],
        width: f32,
        height: f32,
        ends_line: bool,
    ) -> Self {
        Self::new(text, transform[4], transform[5], width, height, ends_line)
    }

    /// Right edge of the fragment (`baseline_x + width`).
    pub fn right(&self) -> f32 {
        self.baseline_x + self.width
    }

    /// Lowest point of the fragment in document space (`baseline_y - height`).
    pub fn bottom(&self) -> f32 {
        self.baseline_y - self.height
    }

    /// True when the fragment carries no visible text.
    pub fn is_blank(&self) -> bool {
        is_blank(&self.text)
    }
}

/// Drop fragments whose text is empty or whitespace-only.
///
/// The extraction layer reports spacing runs as fragments of their own; they
/// carry no glyphs to highlight and are discarded before locating a quote.
pub fn retain_text(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    let before = fragments.len();
    let kept: Vec<TextFragment> = fragments.into_iter().filter(|f| !f.is_blank()).collect();
    if kept.len() != before {
        log::trace!("Discarded {} blank fragments", before - kept.len());
    }
    kept
}
