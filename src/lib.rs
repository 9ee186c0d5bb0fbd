//! pdftool - merge, split and convert PDF files.
//!
//! The library is a validated-operations core: every operation checks its
//! inputs, delegates to the document engine, and reports either an
//! [`ops::OperationReport`] or a [`PdfToolError`]. Outputs are staged next
//! to the requested path, so a failed operation never leaves a partial file.
//!
//! - [`ops::merge`] combines a file set into one PDF
//! - [`ops::extract_range`] copies an inclusive page range into a new PDF
//! - [`ops::convert`] writes the text of a PDF as a DOCX document
//!
//! # Examples
//!
//! ```no_run
//! use pdftool::config::OperationOptions;
//! use pdftool::ops;
//! use pdftool::queue::MergeQueue;
//! use std::path::Path;
//!
//! # fn example() -> pdftool::Result<()> {
//! let mut queue = MergeQueue::new();
//! queue.add("chapter2.pdf");
//! queue.add("chapter1.pdf");
//! queue.move_entry(1, 0)?;
//!
//! let options = OperationOptions::default();
//! ops::merge(&queue.file_set(), Path::new("book.pdf"), &options)?;
//! ops::extract_range(Path::new("book.pdf"), 1, 1, Path::new("cover.pdf"), &options)?;
//! ops::convert(Path::new("book.pdf"), Path::new("book.docx"))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod ops;
pub mod output;
pub mod queue;
pub mod utils;
pub mod validation;

mod convert;
mod io;
mod merge;

pub use error::{ErrorKind, PdfToolError, Result};
pub use io::{DocumentSummary, PREVIEW_PAGES, PageDimensions};
pub use ops::{OperationKind, OperationPlan, OperationReport, OperationResult};
pub use validation::PageRange;

/// Version of pdftool.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the package.
pub const NAME: &str = env!("CARGO_PKG_NAME");
