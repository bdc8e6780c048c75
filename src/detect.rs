//! DOCX format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// DOCX package information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxFormat {
    /// Number of entries in the ZIP container
    pub part_count: usize,
    /// Whether the package carries a stylesheet part
    pub has_styles: bool,
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DOCX ({} parts)", self.part_count)
    }
}

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Main document part every WordprocessingML package must carry.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Stylesheet part.
pub const STYLES_PART: &str = "word/styles.xml";

/// Check whether bytes start with the ZIP container signature.
pub fn has_zip_magic(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

/// Detect DOCX format from a file path.
///
/// # Example
/// ```no_run
/// use docxstyle::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("reference.docx").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader
        .read_exact(&mut header)
        .map_err(|_| Error::UnknownFormat)?;
    if !has_zip_magic(&header) {
        return Err(Error::UnknownFormat);
    }
    reader.rewind()?;
    inspect_archive(reader)
}

/// Detect DOCX format from the complete package bytes.
///
/// # Returns
/// * `Ok(DocxFormat)` if the data is a ZIP archive holding `word/document.xml`
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocxFormat> {
    if !has_zip_magic(data) {
        return Err(Error::UnknownFormat);
    }
    inspect_archive(Cursor::new(data))
}

fn inspect_archive<R: Read + Seek>(reader: R) -> Result<DocxFormat> {
    let archive = zip::ZipArchive::new(reader).map_err(|_| Error::UnknownFormat)?;
    let mut has_document = false;
    let mut has_styles = false;
    for name in archive.file_names() {
        match name {
            DOCUMENT_PART => has_document = true,
            STYLES_PART => has_styles = true,
            _ => {}
        }
    }

    if !has_document {
        return Err(Error::UnknownFormat);
    }

    Ok(DocxFormat {
        part_count: archive.len(),
        has_styles,
    })
}

/// Check if a file is a valid DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes represent a valid DOCX package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn package(parts: &[&str]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for part in parts {
            zip.start_file(*part, options).unwrap();
            zip.write_all(b"<x/>").unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_detect_valid_docx() {
        let data = package(&[DOCUMENT_PART, STYLES_PART]);
        let format = detect_format_from_bytes(&data).unwrap();
        assert_eq!(format.part_count, 2);
        assert!(format.has_styles);
    }

    #[test]
    fn test_detect_docx_without_styles() {
        let data = package(&[DOCUMENT_PART]);
        let format = detect_format_from_bytes(&data).unwrap();
        assert!(!format.has_styles);
    }

    #[test]
    fn test_detect_zip_without_document() {
        let data = package(&["mimetype", "OEBPS/content.opf"]);
        let result = detect_format_from_bytes(&data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_invalid_format() {
        let result = detect_format_from_bytes(b"%PDF-1.7\n");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_truncated_zip() {
        let result = detect_format_from_bytes(b"PK\x03\x04truncated");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_is_docx_bytes() {
        assert!(is_docx_bytes(&package(&[DOCUMENT_PART])));
        assert!(!is_docx_bytes(b"Not a package"));
        assert!(!is_docx_bytes(b""));
    }
}
