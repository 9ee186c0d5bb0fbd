//! Input validation for pdftool.
//!
//! Every document operation runs these checks before it touches the engine,
//! so a bad request fails fast with an error that says exactly what to fix.
//! The checks only query the file system; they never create or modify
//! anything.
//!
//! # Examples
//!
//! ```no_run
//! use pdftool::validation::{validate_file_set, validate_page_range};
//! use std::path::PathBuf;
//!
//! # fn example() -> pdftool::Result<()> {
//! validate_file_set(&[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")])?;
//! let range = validate_page_range(2, 4, 10)?;
//! assert_eq!(range.len(), 3);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{PdfToolError, Result};

/// An inclusive, 1-based page range known to fit its document.
///
/// The only way to obtain one is [`validate_page_range`], so every value
/// satisfies `1 <= start <= end <= total_pages` for the document it was
/// validated against. It serialises for reports but never deserialises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    /// First page, 1-based.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last page, 1-based and inclusive.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of pages in the range.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Always false; a validated range holds at least one page.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The same range as zero-based engine indices, inclusive on both ends.
    pub fn to_zero_based(&self) -> (u32, u32) {
        (self.start - 1, self.end - 1)
    }

    /// Whether a 1-based page number falls inside the range.
    pub fn contains(&self, page: u32) -> bool {
        page >= self.start && page <= self.end
    }
}

/// Check that a file set can be merged.
///
/// # Errors
///
/// - [`PdfToolError::EmptyInput`] if `paths` is empty
/// - [`PdfToolError::FileNotFound`] naming the first path that is not an
///   existing file
pub fn validate_file_set<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    if paths.is_empty() {
        return Err(PdfToolError::EmptyInput);
    }

    for path in paths {
        validate_source(path.as_ref())?;
    }

    Ok(())
}

/// Check that a single source document exists.
///
/// A directory does not count as an existing file.
pub fn validate_source(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(PdfToolError::file_not_found(path));
    }

    Ok(())
}

/// Check that the directory the output would land in exists.
///
/// Relative paths are resolved against the current working directory.
/// Nothing is created and writability is not checked.
///
/// # Returns
///
/// The absolute output path.
///
/// # Errors
///
/// Returns [`PdfToolError::DirectoryNotFound`] with the parent directory if
/// it does not exist.
pub fn validate_output_location(output: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(output)
        .map_err(|e| PdfToolError::invalid_config(format!("Invalid output path: {e}")))?;

    let parent = absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"));

    if !parent.is_dir() {
        return Err(PdfToolError::directory_not_found(parent));
    }

    Ok(absolute)
}

/// Check a requested page range against a document's page count.
///
/// The checks run in a fixed order and the first one that fails is
/// reported:
///
/// 1. both numbers are at least 1, else [`PdfToolError::InvalidRange`]
/// 2. `start <= end`, else [`PdfToolError::InvalidRange`]
/// 3. `end <= total_pages`, else [`PdfToolError::RangeExceedsDocument`]
pub fn validate_page_range(start: i64, end: i64, total_pages: usize) -> Result<PageRange> {
    if start < 1 || end < 1 {
        return Err(PdfToolError::invalid_range(
            start,
            end,
            "page numbers must be >= 1",
        ));
    }

    if start > end {
        return Err(PdfToolError::invalid_range(
            start,
            end,
            "start page cannot be greater than end page",
        ));
    }

    if end > total_pages as i64 {
        return Err(PdfToolError::RangeExceedsDocument { end, total_pages });
    }

    // Both bounds are now within 1..=total_pages, which fits a page number.
    let to_page = |n: i64| {
        u32::try_from(n).map_err(|_| PdfToolError::RangeExceedsDocument { end, total_pages })
    };

    Ok(PageRange {
        start: to_page(start)?,
        end: to_page(end)?,
    })
}
