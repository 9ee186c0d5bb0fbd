//! Integration tests for merging.

use pdftool::config::{CompressionLevel, OperationOptions};
use pdftool::ops::{self, OperationKind};
use pdftool::queue::MergeQueue;
use rstest::rstest;
use serial_test::serial;
use std::path::Path;
use tempfile::TempDir;

use crate::common::{dir_entries, page_widths, write_pdf};

#[test]
fn test_merge_keeps_file_set_order() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[101, 102]);
    let b = write_pdf(dir.path(), "b.pdf", &[201, 202, 203]);
    let output = dir.path().join("merged.pdf");

    let report = ops::merge(&[b, a], &output, &OperationOptions::default()).unwrap();

    assert_eq!(report.kind, OperationKind::Merge);
    assert_eq!(report.pages, 5);
    assert_eq!(page_widths(&output), vec![201, 202, 203, 101, 102]);
    assert_eq!(report.file_size, std::fs::metadata(&output).unwrap().len());
}

#[test]
fn test_merge_repeats_duplicate_paths() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[101, 102]);
    let b = write_pdf(dir.path(), "b.pdf", &[201]);
    let output = dir.path().join("merged.pdf");

    ops::merge(&[a.clone(), b, a], &output, &OperationOptions::default()).unwrap();

    assert_eq!(page_widths(&output), vec![101, 102, 201, 101, 102]);
}

#[test]
fn test_merge_single_file() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[101, 102, 103]);
    let output = dir.path().join("copy.pdf");

    let report = ops::merge(&[a], &output, &OperationOptions::default()).unwrap();

    assert_eq!(report.pages, 3);
    assert_eq!(page_widths(&output), vec![101, 102, 103]);
}

#[test]
fn test_merge_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[101]);
    let output = dir.path().join("merged.pdf");
    std::fs::write(&output, b"stale").unwrap();

    ops::merge(&[a], &output, &OperationOptions::default()).unwrap();

    assert_eq!(page_widths(&output), vec![101]);
    assert_eq!(dir_entries(dir.path()), vec!["a.pdf", "merged.pdf"]);
}

#[rstest]
#[case(CompressionLevel::None)]
#[case(CompressionLevel::Standard)]
#[case(CompressionLevel::Maximum)]
fn test_merge_with_compression(#[case] compression: CompressionLevel) {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[101, 102]);
    let b = write_pdf(dir.path(), "b.pdf", &[201]);
    let output = dir.path().join("merged.pdf");

    ops::merge(&[a, b], &output, &OperationOptions { compression }).unwrap();

    assert_eq!(page_widths(&output), vec![101, 102, 201]);
}

#[test]
fn test_queue_reorder_changes_merged_order() {
    let dir = TempDir::new().unwrap();
    let mut queue = MergeQueue::new();
    queue.add(write_pdf(dir.path(), "a.pdf", &[101]));
    queue.add(write_pdf(dir.path(), "b.pdf", &[201]));
    queue.add(write_pdf(dir.path(), "c.pdf", &[301, 302]));
    assert_eq!(queue.total_pages(), 4);

    queue.move_entry(2, 0).unwrap();
    queue.remove(2).unwrap();

    let output = dir.path().join("merged.pdf");
    ops::merge(&queue.file_set(), &output, &OperationOptions::default()).unwrap();

    assert_eq!(page_widths(&output), vec![301, 302, 101]);
}

#[test]
#[serial]
fn test_merge_relative_output_resolves_against_working_directory() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[101]);
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = ops::merge(&[a], Path::new("out.pdf"), &OperationOptions::default());
    std::env::set_current_dir(previous).unwrap();

    let report = result.unwrap();
    assert!(report.output.is_absolute());
    assert_eq!(report.output.file_name().unwrap(), "out.pdf");
    assert_eq!(page_widths(&dir.path().join("out.pdf")), vec![101]);
}

#[test]
fn test_merge_same_file_set_twice_is_stable() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[101, 102]);
    let b = write_pdf(dir.path(), "b.pdf", &[201]);
    let inputs = [b, a.clone(), a];
    let output = dir.path().join("merged.pdf");

    let first = ops::merge(&inputs, &output, &OperationOptions::default()).unwrap();
    let first_widths = page_widths(&output);
    let second = ops::merge(&inputs, &output, &OperationOptions::default()).unwrap();

    assert_eq!(first.pages, second.pages);
    assert_eq!(page_widths(&output), first_widths);
    assert_eq!(first_widths, vec![201, 101, 102, 101, 102]);
    assert_eq!(
        dir_entries(dir.path()),
        vec!["a.pdf", "b.pdf", "merged.pdf"]
    );
}
