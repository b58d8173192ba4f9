//! Error types for document extraction and prompt assembly.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning input files into prompt text.
///
/// Every variant here is fatal for the whole batch: the first failing file
/// aborts assembly before anything is sent to the model.
#[derive(Error, Debug)]
pub enum Error {
    /// An input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to open or read an input file.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid ZIP-structured document container.
    #[error("invalid document container: {0}")]
    ContainerRead(String),

    /// XML inside a document container could not be parsed.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// A format-specific extractor failed on the given file.
    #[error("could not extract text from {path}: {cause}")]
    UnreadableDocument {
        /// The input file the extractor was running on.
        path: PathBuf,
        /// Underlying parser failure.
        cause: String,
    },
}

impl Error {
    /// Wrap an extractor failure with the source path it occurred on.
    pub fn unreadable(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        Self::UnreadableDocument {
            path: path.into(),
            cause: cause.to_string(),
        }
    }
}
