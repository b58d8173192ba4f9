//! PDF text extraction over the whole document byte buffer.

use std::path::Path;

use docask_core::{text, Error, Result};

/// Extractor for the text layer of PDF documents.
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the text layer from a complete PDF byte buffer.
    ///
    /// Page boundaries emitted by the underlying parser survive as blank
    /// lines. A document with no text layer (e.g. a scan) yields an empty
    /// body; that is valid output, not an error.
    pub fn extract(&self, data: &[u8], path: &Path) -> Result<String> {
        let raw = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| Error::unreadable(path, e))?;

        let body = text::clean_block(&raw);
        if body.is_empty() {
            log::debug!("{}: no text layer found", path.display());
        }
        Ok(body)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}
