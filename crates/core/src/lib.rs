//! Core domain types, error taxonomy, and text cleanup for turning
//! document files into a single model prompt.

pub mod error;
pub mod prompt;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use types::{DocFormat, ExtractedText, SourceFile};
