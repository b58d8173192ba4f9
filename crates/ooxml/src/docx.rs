//! Word-package (.docx) text extraction.

use std::io::{Read, Seek};
use std::path::Path;

use docask_core::{text, Error, Result};

use crate::container;
use crate::xmltree;

/// Archive member holding the main document body.
const MAIN_DOCUMENT_PART: &str = "word/document.xml";

/// Qualified tag of a Word text run.
const TEXT_RUN_TAG: &str = "w:t";

/// Extractor for Word OOXML packages.
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new docx extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the document body as plain text, one cleaned run per line.
    ///
    /// `path` is the source file, used only for error reporting.
    pub fn extract<R: Read + Seek>(&self, reader: R, path: &Path) -> Result<String> {
        let members = container::read_members(reader, |member| member == MAIN_DOCUMENT_PART)?;
        let member = members.into_iter().next().ok_or_else(|| {
            Error::unreadable(path, format!("missing {} member", MAIN_DOCUMENT_PART))
        })?;

        let xml = std::str::from_utf8(&member.data)
            .map_err(|e| Error::unreadable(path, format!("{} is not UTF-8: {}", member.path, e)))?;
        let tree = xmltree::parse_tree(xml).map_err(|e| Error::unreadable(path, e))?;

        let runs = xmltree::collect_runs(&tree, TEXT_RUN_TAG);
        Ok(text::clean_runs(runs).join("\n"))
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}
