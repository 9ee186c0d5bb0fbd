//! PDF input and output.
//!
//! - [`reader`]: opening documents and summarising their pages
//! - [`writer`]: staged output files that only appear once fully written

pub(crate) mod reader;
pub(crate) mod writer;

pub use reader::{DocumentSummary, PREVIEW_PAGES, PageDimensions};
