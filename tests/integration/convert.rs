//! Integration tests for DOCX conversion.

use pdftool::ops::{self, OperationKind};
use tempfile::TempDir;

use crate::common::{read_docx_part, write_pdf, write_pdf_with_title};

#[test]
fn test_convert_writes_page_text_in_order() {
    let dir = TempDir::new().unwrap();
    let source = write_pdf(dir.path(), "report.pdf", &[612, 612, 612]);
    let output = dir.path().join("report.docx");

    let report = ops::convert(&source, &output).unwrap();

    assert_eq!(report.kind, OperationKind::Convert);
    assert_eq!(report.pages, 3);
    assert_eq!(report.file_size, std::fs::metadata(&output).unwrap().len());

    let body = read_docx_part(&output, "word/document.xml");
    let first = body.find("report page 1").unwrap();
    let second = body.find("report page 2").unwrap();
    let third = body.find("report page 3").unwrap();
    assert!(first < second && second < third);
    assert_eq!(body.matches(r#"<w:br w:type="page"/>"#).count(), 2);
}

#[test]
fn test_convert_uses_first_page_size() {
    let dir = TempDir::new().unwrap();
    let source = write_pdf(dir.path(), "wide.pdf", &[842, 612]);
    let output = dir.path().join("wide.docx");

    ops::convert(&source, &output).unwrap();

    let body = read_docx_part(&output, "word/document.xml");
    assert!(body.contains(r#"w:w="16840""#));
    assert!(body.contains(r#"w:orient="landscape""#));
}

#[test]
fn test_convert_carries_title() {
    let dir = TempDir::new().unwrap();
    let source = write_pdf_with_title(dir.path(), "doc.pdf", &[612], Some("Annual Summary"));
    let output = dir.path().join("doc.docx");

    ops::convert(&source, &output).unwrap();

    let core = read_docx_part(&output, "docProps/core.xml");
    assert!(core.contains("<dc:title>Annual Summary</dc:title>"));
}

#[test]
fn test_convert_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let source = write_pdf(dir.path(), "doc.pdf", &[612]);
    let output = dir.path().join("doc.docx");
    std::fs::write(&output, b"old").unwrap();

    ops::convert(&source, &output).unwrap();

    let body = read_docx_part(&output, "word/document.xml");
    assert!(body.contains("doc page 1"));
}
