//! Command-line interface for pdftool.
//!
//! Arguments are parsed with `clap` and turned into a [`Config`], which is
//! all the rest of the program sees.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pdftool::config::{Command, CompressionLevel, Config, OperationOptions, RangeSpec};
use pdftool::error::{PdfToolError, Result};
use pdftool::utils::collect_paths_for_patterns;

/// Merge, split and convert PDF files.
#[derive(Parser, Debug)]
#[command(name = "pdftool")]
#[command(version)]
#[command(about = "Merge, split and convert PDF files", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show detailed information about each step
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Validate inputs and show what would be written without writing it
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Compression level for PDF output
    ///
    /// - none: streams are written as they are
    /// - standard: compress streams (default)
    /// - maximum: compress streams and drop unreferenced objects
    #[arg(long, global = true, value_name = "LEVEL", default_value = "standard")]
    #[arg(value_parser = ["none", "standard", "maximum"])]
    pub compression: String,

    /// Never overwrite an existing output file
    #[arg(long, global = true)]
    pub no_clobber: bool,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge PDF files into one, in the order given
    ///
    /// Examples:
    ///   pdftool merge cover.pdf body.pdf -o book.pdf
    ///   pdftool merge 'chapter*.pdf' -o book.pdf
    Merge {
        /// Input PDF files or glob patterns
        #[arg(required = true, value_name = "FILE")]
        inputs: Vec<String>,

        /// Merged PDF path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Copy an inclusive page range into a new PDF
    ///
    /// Examples:
    ///   pdftool split report.pdf --start 3 --end 7 -o excerpt.pdf
    ///   pdftool split report.pdf --pages 1 -o cover.pdf
    Split {
        /// Source PDF
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// First page to keep (1-based)
        #[arg(long, allow_negative_numbers = true, requires = "end")]
        #[arg(conflicts_with = "pages")]
        start: Option<i64>,

        /// Last page to keep (inclusive)
        #[arg(long, allow_negative_numbers = true, requires = "start")]
        end: Option<i64>,

        /// Page range as START-END, or a single page
        #[arg(long, value_name = "RANGE")]
        pages: Option<String>,

        /// Extracted PDF path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Convert a PDF to a DOCX document
    Convert {
        /// Source PDF
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// DOCX path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Show page count, version and page sizes of PDF files
    Info {
        /// PDF files or glob patterns
        #[arg(required = true, value_name = "FILE")]
        inputs: Vec<String>,
    },
}

impl Cli {
    /// Build the validated configuration.
    pub fn to_config(&self) -> Result<Config> {
        let compression = CompressionLevel::from_str(&self.compression)?;

        let command = match &self.command {
            Commands::Merge { inputs, output } => Command::Merge {
                inputs: collect_paths_for_patterns(inputs)?,
                output: non_empty_output(output)?,
            },
            Commands::Split {
                source,
                start,
                end,
                pages,
                output,
            } => Command::Split {
                source: source.clone(),
                range: requested_range(*start, *end, pages.as_deref())?,
                output: non_empty_output(output)?,
            },
            Commands::Convert { source, output } => Command::Convert {
                source: source.clone(),
                output: non_empty_output(output)?,
            },
            Commands::Info { inputs } => Command::Info {
                inputs: collect_paths_for_patterns(inputs)?,
            },
        };

        let config = Config {
            command,
            options: OperationOptions { compression },
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
            no_clobber: self.no_clobber,
            json: self.json,
        };
        config.validate()?;

        Ok(config)
    }
}

fn requested_range(start: Option<i64>, end: Option<i64>, pages: Option<&str>) -> Result<RangeSpec> {
    match (start, end, pages) {
        (Some(start), Some(end), None) => Ok(RangeSpec { start, end }),
        (None, None, Some(pages)) => RangeSpec::from_str(pages)
            .map_err(|e| PdfToolError::invalid_config(format!("{e:#}"))),
        _ => Err(PdfToolError::invalid_config(
            "Specify either --start and --end, or --pages",
        )),
    }
}

fn non_empty_output(output: &Path) -> Result<PathBuf> {
    if output.as_os_str().is_empty() {
        return Err(PdfToolError::invalid_config("Output path cannot be empty"));
    }
    Ok(output.to_path_buf())
}
