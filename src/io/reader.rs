//! PDF reading and inspection.

use lopdf::{Dictionary, Document, Object, ObjectId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::EngineError;

/// How many pages a summary describes individually.
pub const PREVIEW_PAGES: usize = 10;

/// Size of a page in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    /// Width in points.
    pub width: f32,
    /// Height in points.
    pub height: f32,
}

/// Page information about a document, used for previews and `info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// Path to the summarised file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// PDF version string, e.g. "1.7".
    pub version: String,

    /// Size of the file in bytes.
    pub file_size: u64,

    /// Dimensions of the first pages, in page order. `None` for a page
    /// without a usable MediaBox.
    pub pages: Vec<Option<PageDimensions>>,
}

impl DocumentSummary {
    pub(crate) fn from_document(path: &Path, doc: &Document) -> Self {
        let pages = doc
            .get_pages()
            .into_values()
            .take(PREVIEW_PAGES)
            .map(|page_id| page_dimensions(doc, page_id))
            .collect();

        Self {
            path: path.to_path_buf(),
            page_count: doc.get_pages().len(),
            version: doc.version.clone(),
            file_size: std::fs::metadata(path).map(|m| m.len()).unwrap_or(0),
            pages,
        }
    }

    /// Dimensions of the first page, if known.
    pub fn first_page_dimensions(&self) -> Option<PageDimensions> {
        self.pages.first().copied().flatten()
    }
}

/// Loads PDF documents from disk.
pub(crate) struct PdfReader;

impl PdfReader {
    /// Open a document.
    pub fn load(path: &Path) -> Result<Document, EngineError> {
        let doc = Document::load(path)?;
        tracing::debug!(path = %path.display(), pages = doc.get_pages().len(), "loaded pdf");
        Ok(doc)
    }

    /// Open a document and summarise it.
    pub fn summarize(path: &Path) -> Result<DocumentSummary, EngineError> {
        let doc = Self::load(path)?;
        Ok(DocumentSummary::from_document(path, &doc))
    }
}

/// Keys a page may inherit from its ancestors in the page tree.
pub(crate) const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Look up a page attribute, following `Parent` links for inherited keys.
pub(crate) fn inherited_attribute<'a>(
    doc: &'a Document,
    page: &'a Dictionary,
    key: &[u8],
) -> Option<&'a Object> {
    let mut current = page;
    // Page trees are shallow; the bound only guards against Parent cycles.
    for _ in 0..64 {
        if let Ok(value) = current.get(key) {
            return Some(resolve(doc, value));
        }
        let parent_id = current.get(b"Parent").and_then(Object::as_reference).ok()?;
        current = doc.get_dictionary(parent_id).ok()?;
    }
    None
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> &'a Object {
    match object {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(object),
        _ => object,
    }
}

/// Size of one page, following inherited MediaBox entries.
pub(crate) fn page_dimensions(doc: &Document, page_id: ObjectId) -> Option<PageDimensions> {
    let page = doc.get_dictionary(page_id).ok()?;
    let media_box = inherited_attribute(doc, page, b"MediaBox")?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }

    let coord = |i: usize| resolve(doc, &media_box[i]).as_float().ok();
    let (x0, y0, x1, y1) = (coord(0)?, coord(1)?, coord(2)?, coord(3)?);

    Some(PageDimensions {
        width: (x1 - x0).abs(),
        height: (y1 - y0).abs(),
    })
}
