//! ZIP-structured document container access.

use docask_core::{Error, Result};
use std::io::{Read, Seek};
use zip::ZipArchive;

/// One member read out of a packaged document.
#[derive(Debug, Clone)]
pub struct PackageMember {
    /// Member path inside the archive, e.g. `ppt/slides/slide1.xml`.
    pub path: String,

    /// Raw member contents.
    pub data: Vec<u8>,
}

/// Read every archive member whose path satisfies `predicate`.
///
/// Members come back in archive index order, which carries no semantic
/// meaning; callers that need a specific order must re-sort using data
/// derived from the member path. An archive with no matching members
/// yields an empty vec, not an error.
pub fn read_members<R, F>(reader: R, predicate: F) -> Result<Vec<PackageMember>>
where
    R: Read + Seek,
    F: Fn(&str) -> bool,
{
    let mut archive = ZipArchive::new(reader)
        .map_err(|e| Error::ContainerRead(format!("failed to open ZIP: {}", e)))?;

    let mut members = Vec::new();
    for index in 0..archive.len() {
        let mut file = archive.by_index(index).map_err(|e| {
            Error::ContainerRead(format!("failed to read archive entry {}: {}", index, e))
        })?;

        let path = file.name().to_string();
        if !predicate(&path) {
            continue;
        }

        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)
            .map_err(|e| Error::ContainerRead(format!("failed to read '{}': {}", path, e)))?;

        log::debug!("read package member '{}' ({} bytes)", path, data.len());
        members.push(PackageMember { path, data });
    }

    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;

    fn archive_with(entries: &[(&str, &str)]) -> Cursor<Vec<u8>> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap()
    }

    #[test]
    fn test_read_members_filters_by_predicate() {
        let archive = archive_with(&[
            ("word/document.xml", "<doc/>"),
            ("word/styles.xml", "<styles/>"),
            ("[Content_Types].xml", "<types/>"),
        ]);

        let members = read_members(archive, |path| path == "word/document.xml").unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].path, "word/document.xml");
        assert_eq!(members[0].data, b"<doc/>");
    }

    #[test]
    fn test_read_members_no_match_is_empty_not_error() {
        let archive = archive_with(&[("word/document.xml", "<doc/>")]);
        let members = read_members(archive, |path| path.starts_with("ppt/")).unwrap();
        assert!(members.is_empty());
    }

    #[test]
    fn test_read_members_rejects_non_zip_bytes() {
        let bogus = Cursor::new(b"this is not a zip archive".to_vec());
        let err = read_members(bogus, |_| true).unwrap_err();
        assert!(matches!(err, Error::ContainerRead(_)));
    }
}
