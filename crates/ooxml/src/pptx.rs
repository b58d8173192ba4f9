//! Slide-deck package (.pptx) text extraction.

use std::io::{Read, Seek};
use std::path::Path;

use docask_core::{text, Error, Result};

use crate::container;
use crate::xmltree;

/// Path prefix of slide parts inside the package.
const SLIDE_PART_PREFIX: &str = "ppt/slides/slide";

/// Qualified tag of a DrawingML text run.
const TEXT_RUN_TAG: &str = "a:t";

/// Extractor for slide-deck OOXML packages.
pub struct PptxExtractor;

impl PptxExtractor {
    /// Create a new pptx extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract all slide text, one labeled block per slide, in numeric
    /// slide order.
    ///
    /// Slide labels are numbered by position in the sorted sequence, so a
    /// deck whose parts are named 1, 2, 10 reads as slides 1, 2, 3.
    pub fn extract<R: Read + Seek>(&self, reader: R, path: &Path) -> Result<String> {
        let mut slides = container::read_members(reader, is_slide_part)?;
        // Archive order is meaningless; the numeric suffix in the part
        // path is the slide's real position. Stable sort keeps archive
        // order among parts with no parsable number.
        slides.sort_by_key(|member| slide_ordinal(&member.path));

        let mut blocks = Vec::with_capacity(slides.len());
        for (position, member) in slides.iter().enumerate() {
            let xml = std::str::from_utf8(&member.data).map_err(|e| {
                Error::unreadable(path, format!("{} is not UTF-8: {}", member.path, e))
            })?;
            let tree = xmltree::parse_tree(xml)
                .map_err(|e| Error::unreadable(path, format!("{}: {}", member.path, e)))?;

            let lines = text::clean_runs(xmltree::collect_runs(&tree, TEXT_RUN_TAG));
            let mut block = format!("-- Slide {} --", position + 1);
            if !lines.is_empty() {
                block.push('\n');
                block.push_str(&lines.join("\n"));
            }
            blocks.push(block);
        }

        Ok(blocks.join("\n\n"))
    }
}

impl Default for PptxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Match `ppt/slides/slideN.xml` parts, not their relationship siblings.
fn is_slide_part(path: &str) -> bool {
    path.starts_with(SLIDE_PART_PREFIX) && path.ends_with(".xml")
}

/// Numeric suffix of a slide part stem, e.g. 10 for `slide10.xml`.
///
/// Parts with no parsable suffix sort as 0.
fn slide_ordinal(path: &str) -> usize {
    let stem = path.trim_end_matches(".xml");
    let digits: String = stem
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.chars().rev().collect::<String>().parse().unwrap_or(0)
}
