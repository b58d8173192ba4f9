//! Domain types for resolved input files and extracted text.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A resolved input file.
///
/// Immutable once created; resolution checks existence up front so that a
/// missing file aborts the batch before any extraction work starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Absolute path on disk.
    pub path: PathBuf,

    /// Lowercased extension without the dot; empty if the file has none.
    pub extension: String,

    /// Base filename, used to label the extracted text.
    pub display_name: String,
}

impl SourceFile {
    /// Resolve a path to an absolute location, verifying it exists.
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let absolute = path.canonicalize()?;

        let extension = absolute
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let display_name = absolute
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(Self {
            path: absolute,
            extension,
            display_name,
        })
    }

    /// The extraction strategy selected by this file's suffix.
    pub fn format(&self) -> DocFormat {
        DocFormat::from_extension(&self.extension)
    }
}

/// The extraction strategy for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocFormat {
    /// Raw UTF-8 text, no structural parsing. Also the fallback for any
    /// unrecognized suffix.
    Plain,
    /// Word OOXML package (.docx).
    Docx,
    /// PDF text layer (.pdf).
    Pdf,
    /// Slide-deck OOXML package (.pptx).
    Pptx,
}

impl DocFormat {
    /// Select a format from a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "docx" => Self::Docx,
            "pdf" => Self::Pdf,
            "pptx" => Self::Pptx,
            _ => Self::Plain,
        }
    }
}

/// Text extracted from one source file, stripped of container markup.
///
/// Whitespace inside a line is collapsed to single spaces; line breaks
/// between semantic blocks (paragraphs, slides, pages) are preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    /// Label for this document in the combined prompt.
    pub source_name: String,

    /// Flattened text body. May be empty (e.g. a scanned PDF), which is
    /// valid output rather than an error.
    pub body: String,
}

impl ExtractedText {
    /// Create extracted text for the given source label.
    pub fn new(source_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocFormat::from_extension("docx"), DocFormat::Docx);
        assert_eq!(DocFormat::from_extension("pdf"), DocFormat::Pdf);
        assert_eq!(DocFormat::from_extension("pptx"), DocFormat::Pptx);
        assert_eq!(DocFormat::from_extension("txt"), DocFormat::Plain);
        assert_eq!(DocFormat::from_extension("md"), DocFormat::Plain);
        assert_eq!(DocFormat::from_extension("json"), DocFormat::Plain);
    }

    #[test]
    fn test_format_from_extension_is_case_insensitive() {
        assert_eq!(DocFormat::from_extension("DOCX"), DocFormat::Docx);
        assert_eq!(DocFormat::from_extension("Pptx"), DocFormat::Pptx);
    }

    #[test]
    fn test_unknown_extension_falls_back_to_plain() {
        assert_eq!(DocFormat::from_extension("yaml"), DocFormat::Plain);
        assert_eq!(DocFormat::from_extension(""), DocFormat::Plain);
    }

    #[test]
    fn test_resolve_missing_file() {
        let err = SourceFile::resolve("/nonexistent/missing.docx").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_resolve_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Notes.TXT");
        std::fs::write(&path, "hello").unwrap();

        let source = SourceFile::resolve(&path).unwrap();
        assert!(source.path.is_absolute());
        assert_eq!(source.extension, "txt");
        assert_eq!(source.display_name, "Notes.TXT");
        assert_eq!(source.format(), DocFormat::Plain);
    }
}
