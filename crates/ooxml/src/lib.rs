//! OOXML package (.docx / .pptx) text extraction.
//!
//! Both formats are ZIP archives of XML parts. This crate provides the
//! shared container access and XML tree walking, plus the two
//! format-specific extractors built on them.

pub mod container;
pub mod docx;
pub mod pptx;
pub mod xmltree;

pub use container::PackageMember;
pub use docx::DocxExtractor;
pub use pptx::PptxExtractor;
pub use xmltree::XmlNode;
