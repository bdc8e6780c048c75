//! Table convention inference.
//!
//! Only the first table is inspected. Every field is looked up on its own
//! and falls back to a default, so a table with missing borders, rows,
//! cells or runs still yields a full convention.

use serde::Serialize;

use crate::model::{Document, Paragraph, RgbColor, StyleSheet, Table};

/// Border width used when the table declares none (eighths of a point).
pub const DEFAULT_BORDER_SIZE: u32 = 4;

/// Border style as the renderer names it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No border
    None,
    /// Single line
    #[default]
    Single,
    /// Dotted line
    Dotted,
    /// Dashed line
    Dashed,
    /// Double line
    Double,
}

impl BorderStyle {
    /// Map a `w:val` border tag. Unrecognized tags map to `Single`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "none" | "nil" => BorderStyle::None,
            "single" => BorderStyle::Single,
            "dotted" => BorderStyle::Dotted,
            "dashed" => BorderStyle::Dashed,
            "double" => BorderStyle::Double,
            other => {
                log::debug!("Treating border style '{}' as single", other);
                BorderStyle::Single
            }
        }
    }
}

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlign {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

/// Table conventions inferred from the first table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConvention {
    /// Bottom border style
    pub border_style: BorderStyle,
    /// Bottom border color
    pub border_color: RgbColor,
    /// Bottom border width in eighths of a point
    pub border_size: u32,
    /// Whether the header cell is bold
    pub header_bold: bool,
    /// Header text color
    pub header_color: RgbColor,
    /// Cell alignment; never inferred
    pub cell_align: CellAlign,
}

impl Default for TableConvention {
    fn default() -> Self {
        Self {
            border_style: BorderStyle::default(),
            border_color: RgbColor::black(),
            border_size: DEFAULT_BORDER_SIZE,
            header_bold: false,
            header_color: RgbColor::black(),
            cell_align: CellAlign::default(),
        }
    }
}

/// Infer table conventions from the document's first table.
pub fn analyze(document: &Document) -> Option<TableConvention> {
    let table = document.first_table()?;
    Some(analyze_table(table, &document.styles))
}

/// Infer conventions from one table.
pub fn analyze_table(table: &Table, styles: &StyleSheet) -> TableConvention {
    let defaults = TableConvention::default();
    let bottom = table.borders.bottom.as_ref();

    let border_style = bottom
        .and_then(|b| b.style.as_deref())
        .map(BorderStyle::from_tag)
        .unwrap_or(defaults.border_style);
    let border_color = bottom
        .and_then(|b| b.color.as_deref())
        .and_then(RgbColor::parse)
        .unwrap_or(defaults.border_color);
    let border_size = bottom
        .and_then(|b| b.size)
        .unwrap_or(defaults.border_size);

    let header = table.header_cell().and_then(|cell| cell.paragraphs.first());
    let header_bold = header
        .map(|p| header_is_bold(p, styles))
        .unwrap_or(defaults.header_bold);
    let header_color = header
        .and_then(|p| p.runs.iter().find_map(|r| r.color.clone()))
        .unwrap_or(defaults.header_color);

    TableConvention {
        border_style,
        border_color,
        border_size,
        header_bold,
        header_color,
        cell_align: defaults.cell_align,
    }
}

fn header_is_bold(paragraph: &Paragraph, styles: &StyleSheet) -> bool {
    if paragraph.runs.iter().any(|r| r.is_bold()) {
        return true;
    }
    paragraph
        .style_id
        .as_deref()
        .and_then(|id| styles.by_id(id))
        .and_then(|style| style.font.bold)
        .unwrap_or(false)
}
