//! Document assembly: resolve inputs, dispatch extractors, combine text.
//!
//! Files are processed strictly in input order, one at a time. The first
//! failure aborts the whole batch, so a prompt is either built from every
//! requested file or not sent at all.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use docask_core::{prompt, DocFormat, ExtractedText, Result, SourceFile};
use docask_ooxml::{DocxExtractor, PptxExtractor};
use docask_pdf::PdfExtractor;

/// Extract every input file in order and combine the results into one
/// labeled block per file, joined by blank lines.
pub fn combine_documents<P: AsRef<Path>>(paths: &[P]) -> Result<String> {
    let mut texts = Vec::with_capacity(paths.len());
    for path in paths {
        let source = SourceFile::resolve(path)?;
        log::debug!(
            "extracting {} as {:?}",
            source.path.display(),
            source.format()
        );
        texts.push(extract_file(&source)?);
    }
    Ok(prompt::combine(&texts))
}

/// Extract one resolved file with the strategy its suffix selects.
fn extract_file(source: &SourceFile) -> Result<ExtractedText> {
    let body = match source.format() {
        DocFormat::Plain => std::fs::read_to_string(&source.path)?,
        DocFormat::Docx => {
            let file = BufReader::new(File::open(&source.path)?);
            DocxExtractor::new().extract(file, &source.path)?
        }
        DocFormat::Pptx => {
            let file = BufReader::new(File::open(&source.path)?);
            PptxExtractor::new().extract(file, &source.path)?
        }
        DocFormat::Pdf => {
            let data = std::fs::read(&source.path)?;
            PdfExtractor::new().extract(&data, &source.path)?
        }
    };

    Ok(ExtractedText::new(&source.display_name, body))
}
