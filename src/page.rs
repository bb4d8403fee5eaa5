//! Per-page text as handed over by the document layer.

use crate::error::Result;
use crate::geometry::Viewport;
use crate::layout::{retain_text, TextFragment};
use serde::{Deserialize, Serialize};

/// Positioned text of one page together with its page box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-based, as shown to the reader)
    pub page_number: usize,
    /// Fragments in reading order
    pub fragments: Vec<TextFragment>,
    /// Page box at scale 1, in document units
    pub viewport: Viewport,
}

/// Plain text of one page, as sent to the analysis step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-based)
    pub page_number: usize,
    /// Fragment texts joined with single spaces
    pub content: String,
}

impl PageText {
    /// Create page text, validating the viewport.
    pub fn new(page_number: usize, fragments: Vec<TextFragment>, viewport: Viewport) -> Result<Self> {
        viewport.validate()?;
        Ok(Self {
            page_number,
            fragments,
            viewport,
        })
    }

    /// Parse page text from JSON and validate its viewport.
    pub fn from_json(json: &str) -> Result<Self> {
        let page: Self = serde_json::from_str(json)?;
        page.viewport.validate()?;
        Ok(page)
    }

    /// Fragments with blank ones removed, ready for locating a quote.
    pub fn text_fragments(&self) -> Vec<TextFragment> {
        retain_text(self.fragments.clone())
    }

    /// Join every fragment's text with a single space.
    ///
    /// Quotes produced from this text are substrings of it, which is why the locator
    /// treats whitespace as insignificant.
    pub fn content(&self) -> PageContent {
        let content = self
            .fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        PageContent {
            page_number: self.page_number,
            content,
        }
    }
}

/// Join the text of every page, in order.
pub fn extract_contents(pages: &[PageText]) -> Vec<PageContent> {
    pages.iter().map(PageText::content).collect()
}
