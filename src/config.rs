//! Configuration for pdftool.
//!
//! The command line is turned into a [`Config`]: the command to run with its
//! plain input values, the options shared by every operation, and the
//! output preferences of the front end. Only argument syntax is checked
//! here; file and page-range checks belong to [`crate::validation`].

use anyhow::{Context, bail};
use std::{path::PathBuf, str::FromStr};

use crate::error::{PdfToolError, Result};

/// Compression level for PDF outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// No compression - streams are written as they are.
    None,
    /// Compress streams.
    #[default]
    Standard,
    /// Compress streams and drop unreferenced objects.
    Maximum,
}

impl FromStr for CompressionLevel {
    type Err = PdfToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(PdfToolError::invalid_config(format!(
                "Invalid compression level: {s}. Must be one of: none, standard, maximum"
            ))),
        }
    }
}

/// Options that apply to every document operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationOptions {
    /// Compression applied to PDF outputs.
    pub compression: CompressionLevel,
}

/// Raw `START-END` page numbers as typed by the user.
///
/// Parsing only checks the syntax; numeric sanity is left to
/// [`crate::validation::validate_page_range`] so that `0-3` is reported as
/// an invalid range rather than a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    /// First page, 1-based.
    pub start: i64,
    /// Last page, 1-based and inclusive.
    pub end: i64,
}

impl FromStr for RangeSpec {
    type Err = anyhow::Error;

    /// Parse `N-M`, or a single `N` meaning `N-N`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            bail!("Page range cannot be empty");
        }

        match s.split_once('-') {
            Some((start, end)) => {
                let start = start
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid page number: {start}"))?;
                let end = end
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid page number: {end}"))?;
                Ok(Self { start, end })
            }
            None => {
                let page = s
                    .parse()
                    .with_context(|| format!("Invalid page number: {s}"))?;
                Ok(Self {
                    start: page,
                    end: page,
                })
            }
        }
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Merge a file set into one PDF.
    Merge {
        /// Source documents, in output order.
        inputs: Vec<PathBuf>,
        /// Merged PDF path.
        output: PathBuf,
    },
    /// Copy a page range into a new PDF.
    Split {
        /// Source document.
        source: PathBuf,
        /// Requested pages.
        range: RangeSpec,
        /// Extracted PDF path.
        output: PathBuf,
    },
    /// Convert a PDF to DOCX.
    Convert {
        /// Source document.
        source: PathBuf,
        /// DOCX path.
        output: PathBuf,
    },
    /// Show page information for documents.
    Info {
        /// Documents to inspect.
        inputs: Vec<PathBuf>,
    },
}

impl Command {
    /// The output path, for commands that write one.
    pub fn output(&self) -> Option<&PathBuf> {
        match self {
            Self::Merge { output, .. } | Self::Split { output, .. } | Self::Convert { output, .. } => {
                Some(output)
            }
            Self::Info { .. } => None,
        }
    }
}

/// Complete configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// The command to run.
    pub command: Command,

    /// Options passed to the document operation.
    pub options: OperationOptions,

    /// Dry run mode - validate without creating output.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Refuse to overwrite an existing output file.
    pub no_clobber: bool,

    /// Print reports as JSON.
    pub json: bool,
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Verbose and quiet modes are both enabled
    /// - An `info` command has no inputs
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(PdfToolError::invalid_config(
                "Cannot use --verbose and --quiet together",
            ));
        }

        if let Command::Info { inputs } = &self.command
            && inputs.is_empty()
        {
            return Err(PdfToolError::EmptyInput);
        }

        Ok(())
    }
}
