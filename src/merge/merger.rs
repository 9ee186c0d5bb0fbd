//! Core PDF merging implementation.
//!
//! Sources are loaded one at a time, in file-set order, and appended to a
//! fresh output document. A path listed twice is loaded twice and
//! contributes its pages twice.

use lopdf::Document;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::EngineError;
use crate::io::reader::PdfReader;
use crate::merge::builder::DocumentBuilder;

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub(crate) struct MergeStatistics {
    /// Number of source documents appended.
    pub files_merged: usize,

    /// Total number of pages in merged document.
    pub total_pages: usize,

    /// Total time taken for merge.
    pub merge_time: Duration,
}

/// Result of a merge operation.
pub(crate) struct MergeResult {
    /// The merged PDF document.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,
}

/// PDF merger that combines multiple documents.
pub(crate) struct Merger;

impl Merger {
    /// Merge the documents at `paths` into one, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any source cannot be loaded or its page tree
    /// cannot be grafted onto the output.
    pub fn merge<P: AsRef<Path>>(paths: &[P]) -> Result<MergeResult, EngineError> {
        let merge_start = Instant::now();
        let mut builder = DocumentBuilder::new();

        for (idx, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            tracing::debug!(
                "[{}/{}] appending {}",
                idx + 1,
                paths.len(),
                path.display()
            );

            let source = PdfReader::load(path)?;
            builder.append(source, None)?;
        }

        let document = builder.finish()?;
        let statistics = MergeStatistics {
            files_merged: paths.len(),
            total_pages: document.get_pages().len(),
            merge_time: merge_start.elapsed(),
        };

        Ok(MergeResult {
            document,
            statistics,
        })
    }

    /// Count the pages a merge of `paths` would produce, without building it.
    pub fn count_pages<P: AsRef<Path>>(paths: &[P]) -> Result<usize, EngineError> {
        let mut total = 0;
        for path in paths {
            total += PdfReader::load(path.as_ref())?.get_pages().len();
        }
        Ok(total)
    }
}
