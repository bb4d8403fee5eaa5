//! Quote search over positioned page text.
//!
//! This module finds the contiguous run of fragments whose composed text contains a
//! quote after whitespace normalization. Matching is exact apart from whitespace:
//! no case folding, no fuzzy matching.
//!
//! ## Example
//!
//! ```
//! use quote_locator::layout::TextFragment;
//! use quote_locator::search::SpanLocator;
//!
//! let fragments = vec![
//!     TextFragment::new("We propose a new", 72.0, 700.0, 90.0, 10.0, true),
//!     TextFragment::new("simple network architecture", 72.0, 688.0, 140.0, 10.0, false),
//! ];
//!
//! let range = SpanLocator::locate(&fragments, "new simple network").unwrap();
//! assert_eq!((range.start, range.end), (0, 1));
//! ```

mod span_locator;

pub use span_locator::{MatchRange, SpanLocator};
