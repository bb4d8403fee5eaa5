//! Locate a quote inside a page's fragment stream.
//!
//! Fragment boundaries do not line up with words or lines, so the search runs over
//! composed fragment text rather than over individual fragments. Text is composed
//! one fragment at a time (a line break contributes a single space) and the
//! normalized composition is tested for containment of the normalized quote.
//!
//! Composing from the first fragment finds the earliest fragment `end` at which the
//! quote is complete, i.e. the first occurrence on the page. The start is then pulled
//! forward to the last fragment that still yields a containing composition, so the
//! range covers the quote and nothing before it. Later occurrences are never
//! considered.

use crate::layout::TextFragment;
use crate::text::{normalize_whitespace, NormalizedBuffer};
use serde::{Deserialize, Serialize};

/// Inclusive range of fragment indexes that reproduces a quote.
///
/// Invariant: `start <= end`, and both index the fragment sequence the range was
/// located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRange {
    /// First fragment of the match
    pub start: usize,
    /// Last fragment of the match (inclusive)
    pub end: usize,
}

impl MatchRange {
    /// Create a range. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted match range {}..={}", start, end);
        Self { start, end }
    }

    /// Number of fragments covered.
    ///
    /// An inverted range (only constructible through the public fields) covers
    /// nothing and reports 0.
    pub fn len(&self) -> usize {
        if self.start <= self.end {
            self.end - self.start + 1
        } else {
            0
        }
    }

    /// True only for an inverted range.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Whether the range fits a sequence of `len` fragments.
    pub fn fits(&self, len: usize) -> bool {
        self.start <= self.end && self.end < len
    }
}

/// Quote locator over a fragment sequence.
pub struct SpanLocator;

impl SpanLocator {
    /// Find the tightest fragment range around the first occurrence of `quote`.
    ///
    /// Returns `None` for an empty quote, an empty fragment sequence, or a quote that
    /// does not occur. A missing quote is an ordinary outcome, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use quote_locator::layout::TextFragment;
    /// use quote_locator::search::{MatchRange, SpanLocator};
    ///
    /// let fragments = vec![
    ///     TextFragment::new("Hello ", 72.0, 700.0, 30.0, 12.0, false),
    ///     TextFragment::new("World.", 102.0, 700.0, 32.0, 12.0, false),
    /// ];
    /// assert_eq!(SpanLocator::locate(&fragments, "Hello World."), Some(MatchRange::new(0, 1)));
    /// assert_eq!(SpanLocator::locate(&fragments, "Goodbye"), None);
    /// ```
    pub fn locate(fragments: &[TextFragment], quote: &str) -> Option<MatchRange> {
        let normalized_quote = normalize_whitespace(quote);
        Self::locate_normalized(fragments, &normalized_quote)
    }

    /// Same as [`locate`](Self::locate) for a quote that is already normalized.
    pub fn locate_normalized(fragments: &[TextFragment], normalized_quote: &str) -> Option<MatchRange> {
        if normalized_quote.is_empty() || fragments.is_empty() {
            return None;
        }

        let end = Self::earliest_end(fragments, normalized_quote)?;

        // Containment only grows as fragments are prepended, so the first start found
        // walking backwards from `end` is the tightest one.
        let start = (0..=end)
            .rev()
            .find(|&start| Self::contains(&fragments[start..=end], normalized_quote))
            .unwrap_or(0);

        log::debug!(
            "Quote matched fragments {}..={} ({} chars)",
            start,
            end,
            normalized_quote.len()
        );
        Some(MatchRange::new(start, end))
    }

    /// Index of the first fragment at which the composed page prefix contains the quote.
    ///
    /// The prefix is normalized incrementally. Before fragment `end` was appended it
    /// did not contain the quote, so only matches ending in the newly added text can
    /// be new and the search covers the last `quote.len()` bytes of the old prefix
    /// plus the new text.
    fn earliest_end(fragments: &[TextFragment], normalized_quote: &str) -> Option<usize> {
        let mut prefix = NormalizedBuffer::new();
        for (end, fragment) in fragments.iter().enumerate() {
            let previous_len = prefix.len();
            prefix.push_str(&fragment.text);
            if fragment.ends_line {
                prefix.push_str(" ");
            }

            let text = prefix.as_str();
            let mut from = previous_len.saturating_sub(normalized_quote.len());
            while !text.is_char_boundary(from) {
                from -= 1;
            }
            if text[from..].contains(normalized_quote) {
                return Some(end);
            }
        }
        None
    }

    fn contains(fragments: &[TextFragment], normalized_quote: &str) -> bool {
        let mut composed = String::new();
        for fragment in fragments {
            Self::append_fragment(&mut composed, fragment);
        }
        normalize_whitespace(&composed).contains(normalized_quote)
    }

    /// Normalized text of `fragments[range]`, composed the way the locator composes it.
    ///
    /// Returns `None` if the range does not fit the sequence.
    pub fn composed_text(fragments: &[TextFragment], range: MatchRange) -> Option<String> {
        if !range.fits(fragments.len()) {
            return None;
        }
        let mut composed = String::new();
        for fragment in &fragments[range.start..=range.end] {
            Self::append_fragment(&mut composed, fragment);
        }
        Some(normalize_whitespace(&composed))
    }

    fn append_fragment(composed: &mut String, fragment: &TextFragment) {
        composed.push_str(&fragment.text);
        if fragment.ends_line {
            composed.push(' ');
        }
    }
}
