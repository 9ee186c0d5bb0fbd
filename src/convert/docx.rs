//! Writing extracted PDF text as a WordprocessingML package.
//!
//! The package holds the minimum a word processor needs to open it: content
//! types, the package relationships, `word/document.xml` and the core
//! properties. Layout is not preserved. Each text line of the source
//! becomes a paragraph, and source pages are separated by page breaks
//! inside a single section sized like the first source page.

use lopdf::{Document, Object};
use quick_xml::escape::escape;
use std::io::{Seek, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::EngineError;
use crate::io::reader::{PageDimensions, page_dimensions};
use crate::io::writer::StagedFile;

const TWIPS_PER_POINT: f32 = 20.0;

/// US Letter, used when the source has no readable MediaBox.
const DEFAULT_PAGE_SIZE: PageDimensions = PageDimensions {
    width: 612.0,
    height: 792.0,
};

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

/// Text pulled out of a PDF, page by page.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExtractedText {
    /// `Title` from the document information dictionary.
    pub title: Option<String>,
    /// Text of each page, in page order.
    pub pages: Vec<String>,
    /// Size of the first page.
    pub page_size: PageDimensions,
}

/// Statistics about a conversion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ConversionStatistics {
    /// Source pages converted.
    pub pages: usize,
    /// Paragraphs written to the document body.
    pub paragraphs: usize,
    /// Size of the written package in bytes.
    pub file_size: u64,
}

/// Converts PDF documents to DOCX packages.
pub(crate) struct DocxConverter;

impl DocxConverter {
    /// Convert `doc` and write the package to `output`.
    ///
    /// The package is staged next to `output`; on error nothing is left
    /// behind.
    pub fn convert(doc: &Document, output: &Path) -> Result<ConversionStatistics, EngineError> {
        let text = Self::extract(doc)?;

        let mut staged = StagedFile::new(output)?;
        let paragraphs = Self::write_package(&text, staged.file_mut())?;
        let file_size = staged.persist()?;

        tracing::debug!(
            pages = text.pages.len(),
            paragraphs,
            output = %output.display(),
            "wrote docx"
        );

        Ok(ConversionStatistics {
            pages: text.pages.len(),
            paragraphs,
            file_size,
        })
    }

    /// Pull the text of every page.
    ///
    /// A page whose content cannot be decoded fails the whole extraction.
    pub fn extract(doc: &Document) -> Result<ExtractedText, EngineError> {
        let page_numbers: Vec<u32> = doc.get_pages().into_keys().collect();
        if page_numbers.is_empty() {
            return Err(EngineError::structure("document has no pages"));
        }

        let mut pages = Vec::with_capacity(page_numbers.len());
        for number in page_numbers {
            let text = doc.extract_text(&[number]).map_err(|e| {
                EngineError::structure(format!("cannot extract text of page {number}: {e}"))
            })?;
            pages.push(text);
        }

        let page_size = doc
            .page_iter()
            .next()
            .and_then(|page_id| page_dimensions(doc, page_id))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Ok(ExtractedText {
            title: document_title(doc),
            pages,
            page_size,
        })
    }

    /// Write the package parts into `writer`. Returns the paragraph count.
    pub fn write_package<W: Write + Seek>(
        text: &ExtractedText,
        writer: W,
    ) -> Result<usize, EngineError> {
        let (body, paragraphs) = document_xml(text);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut zip = ZipWriter::new(writer);
        for (name, content) in [
            ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
            ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
            ("word/document.xml", body),
            ("docProps/core.xml", core_xml(text.title.as_deref())),
        ] {
            zip.start_file(name, options)?;
            zip.write_all(content.as_bytes())?;
        }
        zip.finish()?;

        Ok(paragraphs)
    }
}

fn document_xml(text: &ExtractedText) -> (String, usize) {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );
    let mut paragraphs = 0;

    for (idx, page) in text.pages.iter().enumerate() {
        if idx > 0 {
            xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
            paragraphs += 1;
        }
        for line in page.trim_end_matches(['\r', '\n']).lines() {
            let line = xml_safe(line);
            if line.trim().is_empty() {
                xml.push_str("<w:p/>");
            } else {
                xml.push_str(r#"<w:p><w:r><w:t xml:space="preserve">"#);
                xml.push_str(&escape(line.as_str()));
                xml.push_str("</w:t></w:r></w:p>");
            }
            paragraphs += 1;
        }
    }

    xml.push_str(&section_properties(text.page_size));
    xml.push_str("</w:body></w:document>");
    (xml, paragraphs)
}

fn section_properties(size: PageDimensions) -> String {
    let width = (size.width * TWIPS_PER_POINT).round() as u32;
    let height = (size.height * TWIPS_PER_POINT).round() as u32;
    let orient = if width > height {
        r#" w:orient="landscape""#
    } else {
        ""
    };
    format!(
        r#"<w:sectPr><w:pgSz w:w="{width}" w:h="{height}"{orient}/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#
    )
}

fn core_xml(title: Option<&str>) -> String {
    let title = title
        .map(|t| format!("<dc:title>{}</dc:title>", escape(xml_safe(t).as_str())))
        .unwrap_or_default();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/">{title}</cp:coreProperties>"#
    )
}

/// Drop characters XML 1.0 cannot carry.
fn xml_safe(s: &str) -> String {
    s.chars()
        .filter(|&c| c == '\t' || c == '\n' || c == '\r' || c >= ' ')
        .filter(|&c| c != '\u{FFFE}' && c != '\u{FFFF}')
        .collect()
}

fn document_title(doc: &Document) -> Option<String> {
    let info = match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok()?,
        Object::Dictionary(dict) => dict,
        _ => return None,
    };
    let title = match info.get(b"Title").ok()? {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        object => object,
    };
    let bytes = title.as_str().ok()?;

    let decoded = decode_text_string(bytes);
    let trimmed = decoded.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Decode a PDF text string: UTF-16BE with a byte order mark, otherwise
/// PDFDocEncoding.
fn decode_text_string(bytes: &[u8]) -> String {
    match bytes {
        [0xFE, 0xFF, rest @ ..] => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        _ => bytes.iter().copied().map(pdf_doc_char).collect(),
    }
}

/// Characters 0x80..=0xA0 of PDFDocEncoding. 0x9F is undefined.
const PDF_DOC_HIGH: [char; 33] = [
    '\u{2022}', '\u{2020}', '\u{2021}', '\u{2026}', '\u{2014}', '\u{2013}', '\u{0192}', '\u{2044}',
    '\u{2039}', '\u{203A}', '\u{2212}', '\u{2030}', '\u{201E}', '\u{201C}', '\u{201D}', '\u{2018}',
    '\u{2019}', '\u{201A}', '\u{2122}', '\u{FB01}', '\u{FB02}', '\u{0141}', '\u{0152}', '\u{0160}',
    '\u{0178}', '\u{017D}', '\u{0131}', '\u{0142}', '\u{0153}', '\u{0161}', '\u{017E}', '\u{FFFD}',
    '\u{20AC}',
];

/// Characters 0x18..=0x1F of PDFDocEncoding.
const PDF_DOC_ACCENTS: [char; 8] = [
    '\u{02D8}', '\u{02C7}', '\u{02C6}', '\u{02D9}', '\u{02DD}', '\u{02DB}', '\u{02DA}', '\u{02DC}',
];

/// Map one PDFDocEncoding byte. Bytes outside the remapped ranges keep
/// their Latin-1 meaning.
fn pdf_doc_char(byte: u8) -> char {
    match byte {
        0x18..=0x1F => PDF_DOC_ACCENTS[usize::from(byte - 0x18)],
        0x80..=0xA0 => PDF_DOC_HIGH[usize::from(byte - 0x80)],
        0x7F | 0xAD => '\u{FFFD}',
        _ => char::from(byte),
    }
}
