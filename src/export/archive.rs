//! Zip packaging of generated CSV files.

use std::io::{Cursor, Write};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Errors raised while packaging files into an archive. Packaging failures
/// are fatal for the archive step; nothing is retried.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("archive write failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("archive write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Bundles named byte buffers into a deflate-compressed zip archive.
///
/// Entries appear in slice order.
pub fn pack(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, bytes) in files {
        writer.start_file(name.as_str(), options)?;
        writer.write_all(bytes)?;
    }
    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn packs_entries_in_order() {
        let files = vec![
            ("Orders.csv".to_owned(), b"\"A\"\n".to_vec()),
            ("BU POS.csv".to_owned(), b"\"B\"\n".to_vec()),
        ];

        let bytes = pack(&files).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let names: Vec<String> = (0..archive.len())
            .map(|index| archive.by_index(index).unwrap().name().to_owned())
            .collect();
        assert_eq!(names, vec!["Orders.csv", "BU POS.csv"]);

        for (name, content) in &files {
            let mut entry = archive.by_name(name).unwrap();
            let mut unpacked = Vec::new();
            entry.read_to_end(&mut unpacked).unwrap();
            assert_eq!(&unpacked, content);
        }
    }

    #[test]
    fn empty_file_map_packs_to_empty_archive() {
        let bytes = pack(&[]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
