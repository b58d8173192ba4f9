//! Combined prompt assembly from extracted document text.
//!
//! Each document becomes one labeled block; blocks are joined with a blank
//! line in input order. The combined text is the prompt sent to the model
//! when no explicit prompt override is given.

use crate::types::ExtractedText;

/// Header prefix labeling each document block.
const BLOCK_HEADER: &str = "### ";

/// Format one extracted document as a labeled prompt block.
pub fn block(text: &ExtractedText) -> String {
    format!("{}{}\n{}", BLOCK_HEADER, text.source_name, text.body)
}

/// Join labeled blocks with blank lines, preserving input order exactly.
pub fn combine(texts: &[ExtractedText]) -> String {
    texts.iter().map(block).collect::<Vec<_>>().join("\n\n")
}
