//! Assembling an output document page by page.
//!
//! Both merging and range extraction start from an empty document and
//! append pages taken from source documents. Each source is renumbered
//! above the objects already present, so the same file can be appended
//! more than once, and every appended page is re-parented under the
//! output's single page tree node.

use lopdf::{Document, Object, ObjectId, dictionary};

use crate::error::EngineError;
use crate::io::reader::{INHERITABLE_KEYS, inherited_attribute};
use crate::validation::PageRange;

const BASE_VERSION: &str = "1.5";

/// An output document under construction.
pub(crate) struct DocumentBuilder {
    doc: Document,
    pages_id: ObjectId,
}

impl DocumentBuilder {
    /// Start an empty document with a catalog and an empty page tree.
    pub fn new() -> Self {
        let mut doc = Document::with_version(BASE_VERSION);
        let pages_id = doc.new_object_id();
        doc.objects.insert(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => Vec::<Object>::new(),
                "Count" => 0,
            }
            .into(),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        Self { doc, pages_id }
    }

    /// Pages appended so far.
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Append the pages of `source`, or only those in `range`, in page order.
    ///
    /// Returns the number of pages appended.
    pub fn append(
        &mut self,
        mut source: Document,
        range: Option<PageRange>,
    ) -> Result<usize, EngineError> {
        source.renumber_objects_with(self.doc.max_id + 1);

        let page_ids: Vec<ObjectId> = source
            .get_pages()
            .into_iter()
            .filter(|(number, _)| range.is_none_or(|r| r.contains(*number)))
            .map(|(_, id)| id)
            .collect();

        if let Some(range) = range
            && page_ids.len() != range.len()
        {
            return Err(EngineError::structure(format!(
                "expected {} pages in range {}-{}, found {}",
                range.len(),
                range.start(),
                range.end(),
                page_ids.len()
            )));
        }

        for &page_id in &page_ids {
            self.adopt_page(&mut source, page_id)?;
        }

        if version_number(&source.version) > version_number(&self.doc.version) {
            self.doc.version = source.version.clone();
        }

        self.doc.max_id = self.doc.max_id.max(source.max_id);
        self.doc.objects.extend(source.objects);
        self.add_pages_to_tree(&page_ids)?;

        tracing::debug!(
            appended = page_ids.len(),
            total = self.page_count(),
            "appended pages"
        );
        Ok(page_ids.len())
    }

    /// Copy inherited attributes onto the page and point it at the output's
    /// page tree.
    fn adopt_page(&self, source: &mut Document, page_id: ObjectId) -> Result<(), EngineError> {
        let page = source.get_dictionary(page_id)?;
        let inherited: Vec<(&[u8], Object)> = INHERITABLE_KEYS
            .iter()
            .filter(|key| !page.has(key))
            .filter_map(|&key| {
                inherited_attribute(source, page, key).map(|value| (key, value.clone()))
            })
            .collect();

        let page = source.get_dictionary_mut(page_id)?;
        for (key, value) in inherited {
            page.set(key, value);
        }
        page.set("Parent", self.pages_id);

        Ok(())
    }

    /// Add pages to the output's page tree.
    fn add_pages_to_tree(&mut self, page_ids: &[ObjectId]) -> Result<(), EngineError> {
        let dict = self.doc.get_dictionary_mut(self.pages_id)?;

        let kids = dict
            .get_mut(b"Kids")
            .map_err(|_| EngineError::structure("Pages dictionary missing Kids array"))?;

        if let Object::Array(kids_array) = kids {
            kids_array.extend(page_ids.iter().map(|&id| Object::Reference(id)));
        } else {
            return Err(EngineError::structure("Kids is not an array"));
        }

        let current_count = dict.get(b"Count").and_then(|c| c.as_i64()).unwrap_or(0);
        dict.set("Count", current_count + page_ids.len() as i64);

        Ok(())
    }

    /// Drop everything the page tree no longer reaches and return the
    /// finished document.
    pub fn finish(mut self) -> Result<Document, EngineError> {
        if self.page_count() == 0 {
            return Err(EngineError::structure("document has no pages"));
        }

        self.doc.prune_objects();
        self.doc.renumber_objects();
        Ok(self.doc)
    }
}

fn version_number(version: &str) -> f32 {
    version.trim().parse().unwrap_or(0.0)
}
