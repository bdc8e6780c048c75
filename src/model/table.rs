//! Table types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A table structure (`w:tbl`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table-level borders (`w:tblPr/w:tblBorders`)
    pub borders: TableBorders,

    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first cell of the first row, if present.
    pub fn header_cell(&self) -> Option<&TableCell> {
        self.rows.first().and_then(|r| r.cells.first())
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (paragraphs)
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Create a cell with paragraphs.
    pub fn with_content(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Borders declared directly on a table, keyed by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableBorders {
    /// Top border
    pub top: Option<Border>,
    /// Bottom border
    pub bottom: Option<Border>,
    /// Left border
    pub left: Option<Border>,
    /// Right border
    pub right: Option<Border>,
    /// Inside horizontal border
    pub inside_h: Option<Border>,
    /// Inside vertical border
    pub inside_v: Option<Border>,
}

impl TableBorders {
    /// Look up a border by its `w:tblBorders` child name.
    pub fn side(&self, name: &str) -> Option<&Border> {
        match name {
            "top" => self.top.as_ref(),
            "bottom" => self.bottom.as_ref(),
            "left" | "start" => self.left.as_ref(),
            "right" | "end" => self.right.as_ref(),
            "insideH" => self.inside_h.as_ref(),
            "insideV" => self.inside_v.as_ref(),
            _ => None,
        }
    }
}

/// A single border as declared, uninterpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    /// Border style tag (`w:val`)
    pub style: Option<String>,
    /// Border color (`w:color`)
    pub color: Option<String>,
    /// Border width in eighths of a point (`w:sz`)
    pub size: Option<u32>,
}
