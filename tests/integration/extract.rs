//! Integration tests for page range extraction.

use pdftool::config::OperationOptions;
use pdftool::ops::{self, OperationKind};
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{page_widths, write_pdf};

const WIDTHS: [i64; 6] = [101, 102, 103, 104, 105, 106];

#[rstest]
#[case(1, 1, vec![101])]
#[case(6, 6, vec![106])]
#[case(2, 4, vec![102, 103, 104])]
#[case(1, 6, WIDTHS.to_vec())]
fn test_extract_exact_pages(#[case] start: i64, #[case] end: i64, #[case] expected: Vec<i64>) {
    let dir = TempDir::new().unwrap();
    let source = write_pdf(dir.path(), "source.pdf", &WIDTHS);
    let output = dir.path().join("part.pdf");

    let report =
        ops::extract_range(&source, start, end, &output, &OperationOptions::default()).unwrap();

    assert_eq!(report.kind, OperationKind::Extract);
    assert_eq!(report.pages, expected.len());
    assert_eq!(page_widths(&output), expected);
}

#[test]
fn test_extract_leaves_source_untouched() {
    let dir = TempDir::new().unwrap();
    let source = write_pdf(dir.path(), "source.pdf", &WIDTHS);
    let before = std::fs::read(&source).unwrap();

    ops::extract_range(
        &source,
        2,
        3,
        &dir.path().join("part.pdf"),
        &OperationOptions::default(),
    )
    .unwrap();

    assert_eq!(std::fs::read(&source).unwrap(), before);
}

#[test]
fn test_extract_from_merged_document() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[101, 102]);
    let b = write_pdf(dir.path(), "b.pdf", &[201, 202]);
    let merged = dir.path().join("merged.pdf");
    ops::merge(&[a, b], &merged, &OperationOptions::default()).unwrap();

    let output = dir.path().join("middle.pdf");
    ops::extract_range(&merged, 2, 3, &output, &OperationOptions::default()).unwrap();

    assert_eq!(page_widths(&output), vec![102, 201]);
}

#[test]
fn test_extract_output_may_replace_source() {
    let dir = TempDir::new().unwrap();
    let source = write_pdf(dir.path(), "source.pdf", &WIDTHS);

    ops::extract_range(&source, 5, 6, &source, &OperationOptions::default()).unwrap();

    assert_eq!(page_widths(&source), vec![105, 106]);
}

#[test]
fn test_extract_everything_then_merge_restores_pages() {
    let dir = TempDir::new().unwrap();
    let source = write_pdf(dir.path(), "source.pdf", &WIDTHS);
    let whole = dir.path().join("whole.pdf");
    let remerged = dir.path().join("remerged.pdf");

    ops::extract_range(
        &source,
        1,
        WIDTHS.len() as i64,
        &whole,
        &OperationOptions::default(),
    )
    .unwrap();
    let report = ops::merge(&[whole], &remerged, &OperationOptions::default()).unwrap();

    assert_eq!(report.pages, WIDTHS.len());
    assert_eq!(page_widths(&remerged), WIDTHS.to_vec());
}
