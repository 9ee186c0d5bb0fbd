//! pdftool - merge, split and convert PDF files.

mod cli;

use clap::Parser;
use serde::Serialize;
use std::process;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use pdftool::DocumentSummary;
use pdftool::config::{Command, Config, OperationOptions};
use pdftool::error::{PdfToolError, Result};
use pdftool::ops::{self, OperationPlan, OperationReport};
use pdftool::output::{OutputFormatter, display_plan, display_report, display_summary};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);

    if let Err(err) = run(cli, &formatter).await {
        formatter.error(&err.to_string());
        process::exit(err.exit_code());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` refines the default level.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    let config = cli.to_config()?;
    tracing::debug!(?config, "parsed configuration");

    if let Command::Info { inputs } = &config.command {
        let inputs = inputs.clone();
        let summaries = run_blocking(move || {
            inputs
                .iter()
                .map(|path| ops::inspect(path))
                .collect::<Result<Vec<DocumentSummary>>>()
        })
        .await?;

        if config.json {
            return print_json(&summaries);
        }
        for summary in &summaries {
            display_summary(formatter, summary);
        }
        return Ok(());
    }

    check_overwrite(&config, formatter)?;

    if config.dry_run {
        let command = config.command.clone();
        let plan = run_blocking(move || plan_command(&command)).await?;

        if config.json {
            return print_json(&plan);
        }
        display_plan(formatter, &plan);
        formatter.success("Dry run completed, nothing was written");
        return Ok(());
    }

    let command = config.command.clone();
    let options = config.options;
    let report = run_blocking(move || execute_command(&command, &options)).await?;

    if config.json {
        return print_json(&report);
    }
    display_report(formatter, &report);
    Ok(())
}

fn execute_command(command: &Command, options: &OperationOptions) -> Result<OperationReport> {
    match command {
        Command::Merge { inputs, output } => ops::merge(inputs, output, options),
        Command::Split {
            source,
            range,
            output,
        } => ops::extract_range(source, range.start, range.end, output, options),
        Command::Convert { source, output } => ops::convert(source, output),
        Command::Info { .. } => Err(PdfToolError::invalid_config("info does not write output")),
    }
}

fn plan_command(command: &Command) -> Result<OperationPlan> {
    match command {
        Command::Merge { inputs, output } => ops::plan_merge(inputs, output),
        Command::Split {
            source,
            range,
            output,
        } => ops::plan_extract(source, range.start, range.end, output),
        Command::Convert { source, output } => ops::plan_convert(source, output),
        Command::Info { .. } => Err(PdfToolError::invalid_config("info does not write output")),
    }
}

/// Refuse to replace an existing output when `--no-clobber` is set, in
/// dry runs as well as real ones.
fn check_overwrite(config: &Config, formatter: &OutputFormatter) -> Result<()> {
    let Some(output) = config.command.output() else {
        return Ok(());
    };

    if !output.exists() {
        return Ok(());
    }
    if config.no_clobber {
        return Err(PdfToolError::output_exists(output));
    }
    if config.dry_run {
        formatter.warning(&format!("Would replace existing file {}", output.display()));
    } else {
        formatter.debug(&format!("Replacing existing file {}", output.display()));
    }
    Ok(())
}

/// Run a document operation on the blocking thread pool.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(e) => match e.try_into_panic() {
            Ok(panic) => std::panic::resume_unwind(panic),
            Err(e) => Err(PdfToolError::invalid_config(format!(
                "Operation was cancelled: {e}"
            ))),
        },
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| PdfToolError::invalid_config(format!("Cannot encode JSON output: {e}")))?;
    println!("{json}");
    Ok(())
}
