//! Helpers for building DOCX packages in tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::PathBuf;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Wrap style definitions in a `w:styles` part.
pub fn styles_xml(styles: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:styles xmlns:w="{}">{}</w:styles>"#,
        W_NS, styles
    )
}

/// Wrap body content in a `w:document` part.
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        W_NS, body
    )
}

/// A body-level section with page margins in twips.
pub fn section(top: i64, bottom: i64, left: i64, right: i64) -> String {
    format!(
        r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="{}" w:bottom="{}" w:left="{}" w:right="{}" w:header="851" w:footer="992" w:gutter="0"/></w:sectPr>"#,
        top, bottom, left, right
    )
}

/// Build a package from part names and contents.
pub fn package(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, contents) in parts {
        zip.start_file(*name, options).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Build a package with a stylesheet and body.
pub fn docx(styles: &str, body: &str) -> Vec<u8> {
    let styles = styles_xml(styles);
    let document = document_xml(body);
    package(&[
        ("[Content_Types].xml", "<Types/>"),
        ("word/styles.xml", &styles),
        ("word/document.xml", &document),
    ])
}

/// Write a package into a temporary directory; keep the guard alive.
pub fn write_docx(data: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.docx");
    std::fs::write(&path, data).unwrap();
    (dir, path)
}

/// `Normal`, 11pt Calibri.
pub const NORMAL_CALIBRI: &str = r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri"/><w:sz w:val="22"/></w:rPr></w:style>"#;
