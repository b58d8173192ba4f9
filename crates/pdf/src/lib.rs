//! PDF text-layer extraction backend.
//!
//! Extracts whatever text layer the document carries. There is no OCR
//! fallback: a scanned PDF legitimately yields an empty body.

pub mod parser;

pub use parser::PdfExtractor;
