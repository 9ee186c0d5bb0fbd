//! PDF page assembly.
//!
//! - [`builder`]: grafting source pages onto a fresh output document
//! - [`merger`]: appending whole documents in file-set order
//! - [`pages`]: copying an inclusive page range into a new document

pub(crate) mod builder;
pub(crate) mod merger;
pub(crate) mod pages;

pub(crate) use merger::Merger;
pub(crate) use pages::PageExtractor;
