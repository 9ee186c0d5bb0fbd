//! Page range extraction.

use lopdf::Document;

use crate::error::EngineError;
use crate::merge::builder::DocumentBuilder;
use crate::validation::PageRange;

/// Copies a page range out of a document.
pub(crate) struct PageExtractor;

impl PageExtractor {
    /// Build a new document holding only the pages in `range`.
    ///
    /// `range` uses 1-based page numbers, matching the keys of
    /// [`Document::get_pages`], so `1..=1` is exactly the first page.
    pub fn extract(doc: Document, range: PageRange) -> Result<Document, EngineError> {
        let mut builder = DocumentBuilder::new();
        builder.append(doc, Some(range))?;
        builder.finish()
    }

    /// Get the number of pages in a document.
    pub fn page_count(doc: &Document) -> usize {
        doc.get_pages().len()
    }
}
