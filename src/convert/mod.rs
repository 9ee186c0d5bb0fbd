//! PDF to DOCX conversion.

pub(crate) mod docx;

pub(crate) use docx::DocxConverter;
