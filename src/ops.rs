//! Validated document operations.
//!
//! Each operation runs its validation steps, delegates to the document
//! engine and translates any engine failure into the matching
//! [`PdfToolError`] variant. Outputs are staged beside the requested path
//! and only appear there once fully written, so a failed operation never
//! leaves a partial file behind.
//!
//! # Examples
//!
//! ```no_run
//! use pdftool::config::OperationOptions;
//! use pdftool::ops;
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> pdftool::Result<()> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let report = ops::merge(&inputs, Path::new("merged.pdf"), &OperationOptions::default())?;
//! println!("{} pages written to {}", report.pages, report.output.display());
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::OperationOptions;
use crate::convert::DocxConverter;
use crate::error::{PdfToolError, Result};
use crate::io::DocumentSummary;
use crate::io::reader::PdfReader;
use crate::io::writer::PdfWriter;
use crate::merge::{Merger, PageExtractor};
use crate::validation::{
    validate_file_set, validate_output_location, validate_page_range, validate_source,
};

/// The operation that produced a report or plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Several documents combined into one.
    Merge,
    /// A page range copied into a new document.
    Extract,
    /// A document converted to DOCX.
    Convert,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Merge => "merge",
            Self::Extract => "extract",
            Self::Convert => "convert",
        };
        f.write_str(name)
    }
}

/// What a successful operation wrote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationReport {
    /// Which operation ran.
    pub kind: OperationKind,

    /// Absolute path of the written file.
    pub output: PathBuf,

    /// Pages written, or pages converted for DOCX output.
    pub pages: usize,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Wall time of the whole operation, validation included.
    pub elapsed: Duration,
}

/// Outcome of a document operation.
pub type OperationResult = Result<OperationReport>;

/// What an operation would do, produced by the `plan_*` functions after
/// every validation step has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationPlan {
    /// Which operation would run.
    pub kind: OperationKind,

    /// Source documents, in the order they would be read.
    pub inputs: Vec<PathBuf>,

    /// Absolute path that would be written.
    pub output: PathBuf,

    /// Pages the output would hold (pages converted, for DOCX).
    pub pages: usize,
}

/// Merge `inputs` into a single PDF at `output`.
///
/// Pages are appended in the order of `inputs`; a path listed more than
/// once contributes its pages once per occurrence. Any existing file at
/// `output` is replaced.
///
/// # Errors
///
/// - validation errors from [`validate_file_set`] and
///   [`validate_output_location`]
/// - [`PdfToolError::MergeFailed`] if a source cannot be read or the merged
///   document cannot be written
pub fn merge(inputs: &[PathBuf], output: &Path, options: &OperationOptions) -> OperationResult {
    let start = Instant::now();
    validate_file_set(inputs)?;
    let output = validate_output_location(output)?;

    let mut result = Merger::merge(inputs).map_err(PdfToolError::merge_failed)?;
    let stats = PdfWriter::new(options.compression)
        .save(&mut result.document, &output)
        .map_err(PdfToolError::merge_failed)?;

    tracing::debug!(
        files = result.statistics.files_merged,
        pages = result.statistics.total_pages,
        merge_ms = result.statistics.merge_time.as_millis() as u64,
        write_ms = stats.write_time.as_millis() as u64,
        "merge finished"
    );

    Ok(OperationReport {
        kind: OperationKind::Merge,
        output,
        pages: result.statistics.total_pages,
        file_size: stats.file_size,
        elapsed: start.elapsed(),
    })
}

/// Copy pages `start..=end` (1-based) of `source` into a new PDF at
/// `output`.
///
/// The source is opened before the range is checked, since the check needs
/// its page count; a source that cannot be opened is a
/// [`PdfToolError::SplitFailed`].
///
/// # Errors
///
/// - [`PdfToolError::FileNotFound`] if `source` is not a file
/// - range errors from [`validate_page_range`]
/// - [`PdfToolError::DirectoryNotFound`] if the output directory is missing
/// - [`PdfToolError::SplitFailed`] for any engine failure
pub fn extract_range(
    source: &Path,
    start: i64,
    end: i64,
    output: &Path,
    options: &OperationOptions,
) -> OperationResult {
    let started = Instant::now();
    validate_source(source)?;
    let doc = PdfReader::load(source).map_err(PdfToolError::split_failed)?;
    let range = validate_page_range(start, end, PageExtractor::page_count(&doc))?;
    let output = validate_output_location(output)?;

    let mut extracted = PageExtractor::extract(doc, range).map_err(PdfToolError::split_failed)?;
    let stats = PdfWriter::new(options.compression)
        .save(&mut extracted, &output)
        .map_err(PdfToolError::split_failed)?;

    Ok(OperationReport {
        kind: OperationKind::Extract,
        output,
        pages: range.len(),
        file_size: stats.file_size,
        elapsed: started.elapsed(),
    })
}

/// Convert `source` to a DOCX package at `output`.
///
/// # Errors
///
/// - [`PdfToolError::FileNotFound`] / [`PdfToolError::DirectoryNotFound`]
///   from validation
/// - [`PdfToolError::ConvertFailed`] if the source cannot be read, a page's
///   text cannot be extracted, or the package cannot be written
pub fn convert(source: &Path, output: &Path) -> OperationResult {
    let start = Instant::now();
    validate_source(source)?;
    let output = validate_output_location(output)?;

    let doc = PdfReader::load(source).map_err(PdfToolError::convert_failed)?;
    let stats = DocxConverter::convert(&doc, &output).map_err(PdfToolError::convert_failed)?;
    tracing::debug!(
        pages = stats.pages,
        paragraphs = stats.paragraphs,
        "convert finished"
    );

    Ok(OperationReport {
        kind: OperationKind::Convert,
        output,
        pages: stats.pages,
        file_size: stats.file_size,
        elapsed: start.elapsed(),
    })
}

/// Run every check [`merge`] would run, without writing anything.
pub fn plan_merge(inputs: &[PathBuf], output: &Path) -> Result<OperationPlan> {
    validate_file_set(inputs)?;
    let output = validate_output_location(output)?;
    let pages = Merger::count_pages(inputs).map_err(PdfToolError::merge_failed)?;

    Ok(OperationPlan {
        kind: OperationKind::Merge,
        inputs: inputs.to_vec(),
        output,
        pages,
    })
}

/// Run every check [`extract_range`] would run, without writing anything.
pub fn plan_extract(source: &Path, start: i64, end: i64, output: &Path) -> Result<OperationPlan> {
    validate_source(source)?;
    let doc = PdfReader::load(source).map_err(PdfToolError::split_failed)?;
    let range = validate_page_range(start, end, PageExtractor::page_count(&doc))?;
    let output = validate_output_location(output)?;

    Ok(OperationPlan {
        kind: OperationKind::Extract,
        inputs: vec![source.to_path_buf()],
        output,
        pages: range.len(),
    })
}

/// Run every check [`convert`] would run, without writing anything.
pub fn plan_convert(source: &Path, output: &Path) -> Result<OperationPlan> {
    validate_source(source)?;
    let output = validate_output_location(output)?;
    let doc = PdfReader::load(source).map_err(PdfToolError::convert_failed)?;

    Ok(OperationPlan {
        kind: OperationKind::Convert,
        inputs: vec![source.to_path_buf()],
        output,
        pages: PageExtractor::page_count(&doc),
    })
}

/// Summarise a document for previews.
///
/// # Errors
///
/// - [`PdfToolError::FileNotFound`] if `path` is not a file
/// - [`PdfToolError::ReadFailed`] if it cannot be parsed
pub fn inspect(path: &Path) -> Result<DocumentSummary> {
    validate_source(path)?;
    PdfReader::summarize(path).map_err(|e| PdfToolError::ReadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
