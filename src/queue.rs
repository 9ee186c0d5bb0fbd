//! The list of documents waiting to be merged.
//!
//! A [`MergeQueue`] is the front end's model of the merge list: entries are
//! added, removed and reordered by explicit commands, and
//! [`MergeQueue::file_set`] hands the current order to [`crate::ops::merge`].
//! Each entry caches a [`DocumentSummary`] for previews; a file that cannot
//! be summarised is still queued, just without a preview.

use std::path::{Path, PathBuf};

use crate::error::{PdfToolError, Result};
use crate::io::DocumentSummary;
use crate::io::reader::PdfReader;

/// One queued document.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry {
    /// Path to the source document.
    pub path: PathBuf,

    /// Preview data, if the document could be read when it was added.
    pub summary: Option<DocumentSummary>,
}

impl QueueEntry {
    /// Queue `path`, reading its preview data if possible.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let summary = match PdfReader::summarize(&path) {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "no preview for queued file");
                None
            }
        };
        Self { path, summary }
    }

    /// Page count from the cached preview.
    pub fn page_count(&self) -> Option<usize> {
        self.summary.as_ref().map(|s| s.page_count)
    }
}

/// Ordered documents to merge.
#[derive(Debug, Clone, Default)]
pub struct MergeQueue {
    entries: Vec<QueueEntry>,
}

impl MergeQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document.
    pub fn add(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(QueueEntry::new(path));
    }

    /// Append every `.pdf` path, ignoring anything else.
    ///
    /// Returns how many paths were accepted.
    pub fn add_dropped<P: AsRef<Path>>(&mut self, paths: &[P]) -> usize {
        let mut accepted = 0;
        for path in paths.iter().map(AsRef::as_ref) {
            if is_pdf_path(path) {
                self.add(path);
                accepted += 1;
            } else {
                tracing::debug!(path = %path.display(), "ignoring non-pdf drop");
            }
        }
        accepted
    }

    /// Remove and return the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Result<QueueEntry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Remove several entries at once. Duplicate indices are ignored.
    pub fn remove_many(&mut self, indices: &[usize]) -> Result<usize> {
        for &index in indices {
            self.check_index(index)?;
        }

        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        for &index in sorted.iter().rev() {
            self.entries.remove(index);
        }
        Ok(sorted.len())
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Move the entry at `from` so it ends up at index `to`.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    /// The queued paths in order.
    pub fn file_set(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    /// Sum of the known page counts.
    pub fn total_pages(&self) -> usize {
        self.entries.iter().filter_map(QueueEntry::page_count).sum()
    }

    /// The queued entries.
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(PdfToolError::invalid_config(format!(
                "Queue index {index} out of range (queue has {} entries)",
                self.entries.len()
            )));
        }
        Ok(())
    }
}

fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
