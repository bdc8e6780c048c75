//! Document-level types.

use super::{Length, StyleSheet, Table};
use serde::{Deserialize, Serialize};

/// A parsed WordprocessingML document, reduced to what style profiling needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Sections in document order
    pub sections: Vec<Section>,

    /// Stylesheet (`word/styles.xml`)
    pub styles: StyleSheet,

    /// Top-level body tables in document order
    pub tables: Vec<Table>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Get the first section, if any.
    pub fn first_section(&self) -> Option<&Section> {
        self.sections.first()
    }

    /// Get the first table, if any.
    pub fn first_table(&self) -> Option<&Table> {
        self.tables.first()
    }
}

/// A document section (`w:sectPr`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Page margins
    pub margins: PageMargins,
}

impl Section {
    /// Create a section with the given margins.
    pub fn with_margins(margins: PageMargins) -> Self {
        Self { margins }
    }
}

/// Page margins (`w:pgMar`). Each side is independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    /// Top margin
    pub top: Option<Length>,
    /// Bottom margin
    pub bottom: Option<Length>,
    /// Left margin
    pub left: Option<Length>,
    /// Right margin
    pub right: Option<Length>,
}

impl PageMargins {
    /// Create margins with all four sides set.
    pub fn uniform(length: Length) -> Self {
        Self {
            top: Some(length),
            bottom: Some(length),
            left: Some(length),
            right: Some(length),
        }
    }
}
