//! Integration tests for planning operations without writing.

use pdftool::error::ErrorKind;
use pdftool::ops::{self, OperationKind};
use tempfile::TempDir;

use crate::common::{dir_entries, write_pdf};

#[test]
fn test_plan_merge_counts_every_occurrence() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[101, 102]);
    let b = write_pdf(dir.path(), "b.pdf", &[201]);
    let output = dir.path().join("merged.pdf");

    let plan = ops::plan_merge(&[a.clone(), b.clone(), a.clone()], &output).unwrap();

    assert_eq!(plan.kind, OperationKind::Merge);
    assert_eq!(plan.inputs, vec![a.clone(), b, a]);
    assert_eq!(plan.output, output);
    assert_eq!(plan.pages, 5);
    assert_eq!(dir_entries(dir.path()), vec!["a.pdf", "b.pdf"]);
}

#[test]
fn test_plan_extract_validates_range() {
    let dir = TempDir::new().unwrap();
    let source = write_pdf(dir.path(), "source.pdf", &[101, 102, 103]);
    let output = dir.path().join("part.pdf");

    let plan = ops::plan_extract(&source, 2, 3, &output).unwrap();
    assert_eq!(plan.pages, 2);

    let err = ops::plan_extract(&source, 2, 4, &output).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RangeExceedsDocument);

    assert_eq!(dir_entries(dir.path()), vec!["source.pdf"]);
}

#[test]
fn test_plan_convert_reports_missing_directory() {
    let dir = TempDir::new().unwrap();
    let source = write_pdf(dir.path(), "source.pdf", &[612]);

    let err = ops::plan_convert(&source, &dir.path().join("nope/out.docx")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DirectoryNotFound);
}

#[test]
fn test_plan_serializes_to_json() {
    let dir = TempDir::new().unwrap();
    let source = write_pdf(dir.path(), "source.pdf", &[612, 612]);

    let plan = ops::plan_convert(&source, &dir.path().join("out.docx")).unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["kind"], "convert");
    assert_eq!(json["pages"], 2);
}
