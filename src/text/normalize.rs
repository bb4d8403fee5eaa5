//! Whitespace normalization for quote matching.
//!
//! Quotes come from an analysis step that saw the page text joined with spaces,
//! while the fragment stream carries its own spacing and line breaks. Both sides
//! are reduced to the same canonical form before comparison: every run of
//! whitespace becomes a single ASCII space and the ends are trimmed.
//!
//! The result depends only on Unicode whitespace classes, never on locale.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for any run of whitespace, newlines included
    static ref RE_WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse whitespace runs to a single space and trim both ends.
///
/// # Examples
///
/// ```
/// use quote_locator::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Hello \n\t World.  "), "Hello World.");
/// assert_eq!(normalize_whitespace(" \n "), "");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    RE_WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Normalized text built up piece by piece.
///
/// After every [`push_str`](Self::push_str) the buffer equals
/// [`normalize_whitespace`] of everything pushed so far, so callers that grow a
/// composition one piece at a time do not re-scan the whole text. A trailing
/// whitespace run is held back until a visible character follows it.
///
/// # Examples
///
/// ```
/// use quote_locator::text::{normalize_whitespace, NormalizedBuffer};
///
/// let mut buffer = NormalizedBuffer::new();
/// buffer.push_str("  Hello \n");
/// assert_eq!(buffer.as_str(), "Hello");
/// buffer.push_str("\t World. ");
/// assert_eq!(buffer.as_str(), normalize_whitespace("  Hello \n\t World. "));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NormalizedBuffer {
    text: String,
    pending_space: bool,
}

impl NormalizedBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `piece`, collapsing whitespace across the join.
    pub fn push_str(&mut self, piece: &str) {
        for c in piece.chars() {
            if c.is_whitespace() {
                self.pending_space = !self.text.is_empty();
            } else {
                if self.pending_space {
                    self.text.push(' ');
                    self.pending_space = false;
                }
                self.text.push(c);
            }
        }
    }

    /// Normalized text so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes of the normalized text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True when nothing visible has been pushed.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// True when `text` is empty or contains only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
