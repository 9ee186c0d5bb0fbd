//! Error types for pdftool.
//!
//! Every failure that leaves the document operations is a [`PdfToolError`].
//! Errors raised by the underlying engine (`lopdf`, the DOCX writer, staging
//! I/O) are folded into one of the `*Failed` variants with the engine's
//! message preserved, so callers never see a third-party error type.
//!
//! # Error Categories
//!
//! - **Validation errors**: raised before anything is written
//!   ([`PdfToolError::EmptyInput`], [`PdfToolError::FileNotFound`],
//!   [`PdfToolError::DirectoryNotFound`], [`PdfToolError::InvalidRange`],
//!   [`PdfToolError::RangeExceedsDocument`])
//! - **Execution errors**: the engine failed while producing the output
//!   ([`PdfToolError::MergeFailed`], [`PdfToolError::SplitFailed`],
//!   [`PdfToolError::ConvertFailed`])
//! - **Front-end errors**: configuration and overwrite guards

use std::path::PathBuf;

/// Result type alias for pdftool operations.
pub type Result<T> = std::result::Result<T, PdfToolError>;

/// Main error type for pdftool operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfToolError {
    /// No files were provided.
    #[error("No input files provided")]
    EmptyInput,

    /// An input path does not reference an existing file.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// The first missing path.
        path: PathBuf,
    },

    /// The directory that should contain the output does not exist.
    #[error("Output directory does not exist: {}", path.display())]
    DirectoryNotFound {
        /// The missing directory.
        path: PathBuf,
    },

    /// The requested page numbers are not a valid range.
    #[error("Invalid page range {start}-{end}: {reason}")]
    InvalidRange {
        /// Requested first page (1-based).
        start: i64,
        /// Requested last page (1-based).
        end: i64,
        /// Which rule was broken.
        reason: String,
    },

    /// The range ends past the last page of the document.
    #[error("End page {end} exceeds document page count {total_pages}")]
    RangeExceedsDocument {
        /// Requested last page (1-based).
        end: i64,
        /// Pages actually in the document.
        total_pages: usize,
    },

    /// The engine failed while merging.
    #[error("Failed to merge PDFs: {reason}")]
    MergeFailed {
        /// Message reported by the engine.
        reason: String,
    },

    /// The engine failed while extracting a page range.
    #[error("Failed to split PDF: {reason}")]
    SplitFailed {
        /// Message reported by the engine.
        reason: String,
    },

    /// The engine failed while converting to DOCX.
    #[error("Failed to convert PDF to DOCX: {reason}")]
    ConvertFailed {
        /// Message reported by the engine.
        reason: String,
    },

    /// A document could not be read for inspection.
    #[error("Failed to read PDF: {}\n  Reason: {reason}", path.display())]
    ReadFailed {
        /// Path to the unreadable document.
        path: PathBuf,
        /// Message reported by the engine.
        reason: String,
    },

    /// Output file already exists and overwriting was refused.
    #[error(
        "Output file already exists: {}\n  Remove --no-clobber or choose a different output path",
        path.display()
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Invalid configuration or arguments.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },
}

/// Failure reported by the document engine or by output staging.
///
/// Never leaves the crate: the document operations fold it into the
/// matching `*Failed` variant of [`PdfToolError`].
#[derive(Debug, thiserror::Error)]
pub(crate) enum EngineError {
    #[error(transparent)]
    Pdf(#[from] lopdf::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error("{0}")]
    Structure(String),
}

impl EngineError {
    pub(crate) fn structure(message: impl Into<String>) -> Self {
        Self::Structure(message.into())
    }
}

/// Flat category of a [`PdfToolError`], for callers that only need to branch
/// on what went wrong.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    FileNotFound,
    DirectoryNotFound,
    InvalidRange,
    RangeExceedsDocument,
    MergeFailed,
    SplitFailed,
    ConvertFailed,
    ReadFailed,
    OutputExists,
    InvalidConfig,
}

impl PdfToolError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a DirectoryNotFound error.
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Create an InvalidRange error.
    pub fn invalid_range(start: i64, end: i64, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            start,
            end,
            reason: reason.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl ToString) -> Self {
        Self::MergeFailed {
            reason: reason.to_string(),
        }
    }

    /// Create a SplitFailed error.
    pub fn split_failed(reason: impl ToString) -> Self {
        Self::SplitFailed {
            reason: reason.to_string(),
        }
    }

    /// Create a ConvertFailed error.
    pub fn convert_failed(reason: impl ToString) -> Self {
        Self::ConvertFailed {
            reason: reason.to_string(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: impl Into<PathBuf>) -> Self {
        Self::OutputExists { path: path.into() }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::DirectoryNotFound { .. } => ErrorKind::DirectoryNotFound,
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
            Self::RangeExceedsDocument { .. } => ErrorKind::RangeExceedsDocument,
            Self::MergeFailed { .. } => ErrorKind::MergeFailed,
            Self::SplitFailed { .. } => ErrorKind::SplitFailed,
            Self::ConvertFailed { .. } => ErrorKind::ConvertFailed,
            Self::ReadFailed { .. } => ErrorKind::ReadFailed,
            Self::OutputExists { .. } => ErrorKind::OutputExists,
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    /// Whether this error was raised by input validation, before any write.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::FileNotFound { .. }
                | Self::DirectoryNotFound { .. }
                | Self::InvalidRange { .. }
                | Self::RangeExceedsDocument { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyInput => 1,
            Self::FileNotFound { .. } => 2,
            Self::DirectoryNotFound { .. } => 2,
            Self::InvalidRange { .. } => 1,
            Self::RangeExceedsDocument { .. } => 1,
            Self::MergeFailed { .. } => 6,
            Self::SplitFailed { .. } => 6,
            Self::ConvertFailed { .. } => 6,
            Self::ReadFailed { .. } => 3,
            Self::OutputExists { .. } => 4,
            Self::InvalidConfig { .. } => 1,
        }
    }
}
