//! Locate-then-build pipeline producing highlight rectangles for a quote.
//!
//! The pipeline runs the [`SpanLocator`] and hands its range to the
//! [`LineRectBuilder`]. A quote that is not on the page produces an empty rectangle
//! list and a warning in the log; the overlay treats that as nothing to draw.

use crate::config::HighlightConfig;
use crate::error::Result;
use crate::geometry::{check_dimension, HighlightRect};
use crate::layout::{LineRectBuilder, TextFragment};
use crate::page::PageText;
use crate::search::SpanLocator;
use crate::text::normalize_whitespace;
use serde::{Deserialize, Serialize};

/// Highlight rectangles for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageHighlight {
    /// Page number the rectangles belong to
    pub page: usize,
    /// One rectangle per visual line, in reading order
    pub rects: Vec<HighlightRect>,
}

impl PageHighlight {
    /// Smallest rectangle covering every line rectangle.
    pub fn bounds(&self) -> Option<HighlightRect> {
        let (first, rest) = self.rects.split_first()?;
        Some(rest.iter().fold(*first, |acc, r| acc.union(r)))
    }
}

/// Quote highlighter.
#[derive(Debug, Clone, Default)]
pub struct QuoteHighlighter {
    config: HighlightConfig,
}

impl QuoteHighlighter {
    /// Create a highlighter after validating `config`.
    pub fn new(config: HighlightConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use.
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Rectangles highlighting `quote` within `fragments`.
    ///
    /// `viewport_height` is the page height in document units; output is multiplied by
    /// the configured scale. An empty result means the quote was not found.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidViewport`](crate::Error::InvalidViewport) if `viewport_height` is
    /// not a positive finite number.
    pub fn highlight(
        &self,
        fragments: &[TextFragment],
        quote: &str,
        viewport_height: f32,
    ) -> Result<Vec<HighlightRect>> {
        check_dimension("height", viewport_height)?;

        let normalized_quote = normalize_whitespace(quote);
        let range = match SpanLocator::locate_normalized(fragments, &normalized_quote) {
            Some(range) => range,
            None => {
                log::warn!("Could not find quote in page text content: {:?}", normalized_quote);
                return Ok(Vec::new());
            },
        };

        let rects = LineRectBuilder::new(self.config.line_tolerance).build(
            fragments,
            range,
            viewport_height,
        )?;

        Ok(rects.iter().map(|r| r.scaled(self.config.scale)).collect())
    }

    /// Highlight `quote` on one page. Blank fragments are dropped first.
    ///
    /// Returns `None` when the quote is not on the page.
    pub fn highlight_page(&self, page: &PageText, quote: &str) -> Result<Option<PageHighlight>> {
        let fragments = page.text_fragments();
        let rects = self.highlight(&fragments, quote, page.viewport.height)?;
        if rects.is_empty() {
            return Ok(None);
        }
        Ok(Some(PageHighlight {
            page: page.page_number,
            rects,
        }))
    }

    /// Highlight `quote` on page `page_number` of a document.
    ///
    /// Only the named page is searched: a quote that lives on another page is reported
    /// as not found. An unknown page number also yields `None`.
    pub fn highlight_in_document(
        &self,
        pages: &[PageText],
        page_number: usize,
        quote: &str,
    ) -> Result<Option<PageHighlight>> {
        match pages.iter().find(|p| p.page_number == page_number) {
            Some(page) => self.highlight_page(page, quote),
            None => {
                log::warn!("Page {} not found among {} pages", page_number, pages.len());
                Ok(None)
            },
        }
    }
}

/// Rectangles highlighting `quote` with the default configuration.
///
/// # Examples
///
/// ```
/// use quote_locator::highlight::find_highlight_rects;
/// use quote_locator::layout::TextFragment;
///
/// let fragments = vec![
///     TextFragment::new("Hello ", 72.0, 700.0, 30.0, 12.0, false),
///     TextFragment::new("World.", 102.0, 700.0, 32.0, 12.0, false),
/// ];
/// let rects = find_highlight_rects(&fragments, "Hello World.", 800.0).unwrap();
/// assert_eq!(rects.len(), 1);
/// assert_eq!(rects[0].y, 100.0);
///
/// assert!(find_highlight_rects(&fragments, "Goodbye", 800.0).unwrap().is_empty());
/// ```
pub fn find_highlight_rects(
    fragments: &[TextFragment],
    quote: &str,
    viewport_height: f32,
) -> Result<Vec<HighlightRect>> {
    QuoteHighlighter::default().highlight(fragments, quote, viewport_height)
}
