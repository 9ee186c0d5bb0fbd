//! User-facing output.
//!
//! [`OutputFormatter`] prints status lines; the `display_*` functions render
//! the results of document operations with it.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::io::DocumentSummary;
use crate::ops::{OperationKind, OperationPlan, OperationReport};
use crate::utils::format_file_size;

/// Show what an operation wrote.
pub fn display_report(formatter: &OutputFormatter, report: &OperationReport) {
    let what = match report.kind {
        OperationKind::Merge => "Merged",
        OperationKind::Extract => "Extracted",
        OperationKind::Convert => "Converted",
    };
    formatter.success(&format!(
        "{what} {} page(s) into {}",
        report.pages,
        report.output.display()
    ));
    formatter.detail("Size", &format_file_size(report.file_size));
    formatter.detail("Time", &format!("{:.2}s", report.elapsed.as_secs_f64()));
}

/// Show what an operation would do.
pub fn display_plan(formatter: &OutputFormatter, plan: &OperationPlan) {
    formatter.section(&format!("Dry run: {} plan", plan.kind));
    for (idx, input) in plan.inputs.iter().enumerate() {
        formatter.list_item(idx + 1, &input.display().to_string());
    }
    formatter.info(&format!(
        "Would write {} page(s) to {}",
        plan.pages,
        plan.output.display()
    ));
}

/// Show a document's page information.
pub fn display_summary(formatter: &OutputFormatter, summary: &DocumentSummary) {
    formatter.section(&summary.path.display().to_string());
    formatter.info(&format!(
        "  {} page(s), PDF {}, {}",
        summary.page_count,
        summary.version,
        format_file_size(summary.file_size)
    ));

    for (idx, dims) in summary.pages.iter().enumerate() {
        let size = match dims {
            Some(d) => format!("{:.0} x {:.0} pt", d.width, d.height),
            None => "unknown size".to_string(),
        };
        formatter.list_item(idx + 1, &size);
    }

    let hidden = summary.page_count.saturating_sub(summary.pages.len());
    if hidden > 0 {
        formatter.info(&format!("  ... and {hidden} more"));
    }
}
