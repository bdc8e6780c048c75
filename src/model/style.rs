//! Stylesheet types.

use super::{LineSpacing, Pt, RgbColor, Twips};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The kind of a style definition (`w:style/@w:type`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    /// Paragraph style
    #[default]
    Paragraph,
    /// Character style
    Character,
    /// Table style
    Table,
    /// Numbering style
    Numbering,
}

impl StyleKind {
    /// Map a `w:type` attribute value.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "character" => StyleKind::Character,
            "table" => StyleKind::Table,
            "numbering" => StyleKind::Numbering,
            _ => StyleKind::Paragraph,
        }
    }
}

/// Explicit `w:rFonts` run-formatting override declared on a style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunFonts {
    /// East Asian font (`w:eastAsia`)
    pub east_asia: Option<String>,
    /// ASCII font (`w:ascii`)
    pub ascii: Option<String>,
}

impl RunFonts {
    /// The preferred override: East Asian, then ASCII.
    pub fn preferred(&self) -> Option<&str> {
        non_empty(self.east_asia.as_deref()).or_else(|| non_empty(self.ascii.as_deref()))
    }
}

/// Character formatting declared on a style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Stylesheet font name
    pub name: Option<String>,
    /// Font size
    pub size: Option<Pt>,
    /// Font color
    pub color: Option<RgbColor>,
    /// Bold toggle
    pub bold: Option<bool>,
}

/// Paragraph formatting declared on a style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    /// Line spacing
    pub line_spacing: Option<LineSpacing>,
    /// First-line indent (negative for hanging indents)
    pub first_line_indent: Option<Twips>,
}

/// A single style definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Stable style id (`w:styleId`)
    pub id: String,
    /// Display name (`w:name`)
    pub name: String,
    /// Style kind
    pub kind: StyleKind,
    /// Id of the base style (`w:basedOn`)
    pub based_on: Option<String>,
    /// Run font override
    pub run_fonts: RunFonts,
    /// Character formatting
    pub font: Font,
    /// Paragraph formatting
    pub paragraph: ParagraphFormat,
}

impl Style {
    /// Create a paragraph style whose display name equals its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            ..Default::default()
        }
    }

    /// Set the display name and return self.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the base style id and return self.
    pub fn based_on(mut self, id: impl Into<String>) -> Self {
        self.based_on = Some(id.into());
        self
    }

    /// Check if this is a paragraph style.
    pub fn is_paragraph(&self) -> bool {
        self.kind == StyleKind::Paragraph
    }
}

/// All styles of a document, in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Style>", into = "Vec<Style>")]
pub struct StyleSheet {
    styles: Vec<Style>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a style. The first style registered under a given id or name wins.
    pub fn add(&mut self, style: Style) {
        let index = self.styles.len();
        self.by_id.entry(style.id.clone()).or_insert(index);
        self.by_name.entry(style.name.clone()).or_insert(index);
        self.styles.push(style);
    }

    /// Look up a style by display name.
    pub fn by_name(&self, name: &str) -> Option<&Style> {
        self.by_name.get(name).map(|&i| &self.styles[i])
    }

    /// Look up a style by id.
    pub fn by_id(&self, id: &str) -> Option<&Style> {
        self.by_id.get(id).map(|&i| &self.styles[i])
    }

    /// Check whether a display name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate styles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl FromIterator<Style> for StyleSheet {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        let mut sheet = StyleSheet::new();
        for style in iter {
            sheet.add(style);
        }
        sheet
    }
}

impl From<Vec<Style>> for StyleSheet {
    fn from(styles: Vec<Style>) -> Self {
        styles.into_iter().collect()
    }
}

impl From<StyleSheet> for Vec<Style> {
    fn from(sheet: StyleSheet) -> Self {
        sheet.styles
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
