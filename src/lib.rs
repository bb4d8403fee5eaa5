// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::enum_variant_names)]

//! # Quote Locator
//!
//! Find a quoted passage inside the positioned text of a rendered page and compute
//! the rectangles that highlight it.
//!
//! ## Core Features
//!
//! - **Span location**: whitespace-insensitive search over fragment streams whose
//!   boundaries do not follow words or lines
//! - **Line rectangles**: baseline grouping with drift tolerance, one union box per
//!   visual line
//! - **Coordinate flip**: document space (Y up from the page bottom) to viewport
//!   space (Y down from the top), optionally scaled
//! - **Overlay helpers**: page-relative percentages, page-addressed highlights
//!
//! ## Architecture
//!
//! Two pure, synchronous stages with no shared state:
//!
//! 1. [`search::SpanLocator`] turns fragments and a quote into a [`search::MatchRange`]
//!    (or `None`)
//! 2. [`layout::LineRectBuilder`] turns that range into [`geometry::HighlightRect`]s
//!
//! [`highlight::QuoteHighlighter`] runs both.
//!
//! ## Quick Start
//!
//! ```
//! use quote_locator::highlight::QuoteHighlighter;
//! use quote_locator::layout::TextFragment;
//!
//! # fn main() -> quote_locator::Result<()> {
//! let fragments = vec![
//!     TextFragment::new("Hello ", 72.0, 700.0, 30.0, 12.0, false),
//!     TextFragment::new("World.", 102.0, 700.0, 32.0, 12.0, false),
//! ];
//!
//! let rects = QuoteHighlighter::default().highlight(&fragments, "Hello World.", 800.0)?;
//! assert_eq!(rects.len(), 1);
//! assert_eq!(rects[0].y, 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometry and layout
pub mod geometry;
pub mod layout;

// Text normalization
pub mod text;

// Quote search
pub mod search;

// Page text and the highlight pipeline
pub mod highlight;
pub mod page;

// Re-exports
pub use config::HighlightConfig;
pub use error::{Error, Result};
pub use geometry::{HighlightRect, RelativeRect, Viewport};
pub use highlight::{find_highlight_rects, PageHighlight, QuoteHighlighter};
pub use layout::{build_rects, TextFragment};
pub use page::{PageContent, PageText};
pub use search::{MatchRange, SpanLocator};

/// Locate `quote` in `fragments`. See [`SpanLocator::locate`].
pub fn locate(fragments: &[TextFragment], quote: &str) -> Option<MatchRange> {
    SpanLocator::locate(fragments, quote)
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "quote_locator");
    }

    #[test]
    fn test_public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextFragment>();
        assert_send_sync::<MatchRange>();
        assert_send_sync::<HighlightRect>();
        assert_send_sync::<PageText>();
        assert_send_sync::<QuoteHighlighter>();
    }

    #[test]
    fn test_locate_then_build() {
        let fragments = vec![
            TextFragment::new("Hello ", 72.0, 700.0, 30.0, 12.0, false),
            TextFragment::new("World.", 102.0, 700.0, 32.0, 12.0, false),
        ];
        let range = locate(&fragments, "Hello World.").unwrap();
        let rects = build_rects(&fragments, range, 800.0).unwrap();
        assert_eq!(rects, vec![HighlightRect::new(72.0, 100.0, 62.0, 12.0)]);
    }
}
