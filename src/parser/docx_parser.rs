//! DOCX package reader using zip and roxmltree.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use roxmltree::Node;
use zip::ZipArchive;

use crate::detect::{has_zip_magic, DOCUMENT_PART, STYLES_PART};
use crate::error::{Error, Result};
use crate::model::{
    Border, Document, Length, PageMargins, Paragraph, RgbColor, Run, Section, StyleSheet, Table,
    TableBorders, TableCell, TableRow,
};

use super::options::{ErrorMode, ParseOptions};
use super::styles::parse_styles;
use super::xml::{attr, is_wml, parse_twips, wml, wml_attr, wml_bool, wml_children};

/// DOCX package parser.
///
/// The package parts are read eagerly; XML is parsed on [`DocxParser::parse`].
pub struct DocxParser {
    document_xml: String,
    styles_xml: Option<String>,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a DOCX package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX package from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        if !has_zip_magic(data) {
            return Err(Error::UnknownFormat);
        }

        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let document_xml = read_part(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| Error::MissingPart(DOCUMENT_PART.to_string()))?;
        let styles_xml = read_part(&mut archive, STYLES_PART)?;
        if styles_xml.is_none() {
            log::debug!("Package has no {}", STYLES_PART);
        }

        Ok(Self {
            document_xml,
            styles_xml,
            options,
        })
    }

    /// Parse a DOCX package from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX package from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse the package and return the document model.
    pub fn parse(&self) -> Result<Document> {
        let mut document = Document::new();
        document.styles = self.parse_stylesheet()?;

        let xml = roxmltree::Document::parse(&self.document_xml)?;
        let Some(body) = wml(xml.root_element(), "body") else {
            log::warn!("{} has no body element", DOCUMENT_PART);
            return Ok(document);
        };

        for child in body.children().filter(|n| n.is_element()) {
            if is_wml(child, "p") {
                if let Some(sect) = wml(child, "pPr").and_then(|ppr| wml(ppr, "sectPr")) {
                    document.add_section(parse_section(sect));
                }
            } else if is_wml(child, "sectPr") {
                document.add_section(parse_section(child));
            } else if is_wml(child, "tbl") && self.options.read_tables {
                document.add_table(parse_table(child));
            }
        }

        log::debug!(
            "Parsed {} sections, {} styles, {} tables",
            document.sections.len(),
            document.styles.len(),
            document.tables.len()
        );

        Ok(document)
    }

    fn parse_stylesheet(&self) -> Result<StyleSheet> {
        let Some(xml) = self.styles_xml.as_deref() else {
            return Ok(StyleSheet::new());
        };

        match parse_styles(xml) {
            Ok(sheet) => Ok(sheet),
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("Ignoring unreadable {}: {}", STYLES_PART, e);
                Ok(StyleSheet::new())
            }
            Err(e) => Err(e),
        }
    }
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    // Strip UTF-8 BOM if present
    if contents.starts_with(&[0xEF, 0xBB, 0xBF]) {
        contents.drain(..3);
    }
    Ok(Some(String::from_utf8(contents)?))
}

fn parse_section(sect: Node) -> Section {
    let Some(pg_mar) = wml(sect, "pgMar") else {
        return Section::default();
    };
    let side = |name: &str| {
        let twips = attr(pg_mar, name).and_then(parse_twips)?;
        let length = Length::from_twips(twips);
        if length.is_none() {
            log::warn!("Ignoring out-of-range {} margin: {}", name, twips);
        }
        length
    };

    Section::with_margins(PageMargins {
        top: side("top"),
        bottom: side("bottom"),
        left: side("left").or_else(|| side("start")),
        right: side("right").or_else(|| side("end")),
    })
}

fn parse_table(tbl: Node) -> Table {
    let borders = wml(tbl, "tblPr")
        .and_then(|pr| wml(pr, "tblBorders"))
        .map(parse_table_borders)
        .unwrap_or_default();

    let rows = wml_children(tbl, "tr")
        .map(|tr| {
            TableRow::new(
                wml_children(tr, "tc")
                    .map(|tc| {
                        TableCell::with_content(wml_children(tc, "p").map(parse_paragraph).collect())
                    })
                    .collect(),
            )
        })
        .collect();

    Table { borders, rows }
}

fn parse_table_borders(node: Node) -> TableBorders {
    let side = |names: &[&str]| names.iter().find_map(|name| wml(node, name)).map(parse_border);

    TableBorders {
        top: side(&["top"]),
        bottom: side(&["bottom"]),
        left: side(&["left", "start"]),
        right: side(&["right", "end"]),
        inside_h: side(&["insideH"]),
        inside_v: side(&["insideV"]),
    }
}

fn parse_border(node: Node) -> Border {
    Border {
        style: attr(node, "val").map(str::to_string),
        color: attr(node, "color").map(str::to_string),
        size: attr(node, "sz").and_then(|v| v.trim().parse::<u32>().ok()),
    }
}

fn parse_paragraph(p: Node) -> Paragraph {
    let style_id = wml(p, "pPr")
        .and_then(|ppr| wml_attr(ppr, "pStyle"))
        .map(str::to_string);

    let runs = wml_children(p, "r").map(parse_run).collect();

    Paragraph { style_id, runs }
}

fn parse_run(r: Node) -> Run {
    let text = wml_children(r, "t")
        .filter_map(|t| t.text())
        .collect::<String>();
    let rpr = wml(r, "rPr");

    Run {
        text,
        bold: rpr.and_then(|n| wml_bool(n, "b")),
        color: rpr
            .and_then(|n| wml_attr(n, "color"))
            .and_then(RgbColor::parse),
    }
}
