//! Base-style chain resolution.
//!
//! Every attribute resolves the same way: read the style's own value, then
//! its base style, then the base's base, until a value turns up or the
//! chain ends. The walk tracks visited style ids, so self-referential or
//! looping `w:basedOn` chains terminate with no value.

use std::collections::HashSet;

use serde::Serialize;

use crate::model::{RgbColor, Style, StyleSheet};

use super::units::{font_size_to_half_points, indent_to_twentieths, line_spacing_to_twentieths};

/// The result of resolving one attribute along a style chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    /// A value was found on the style or one of its ancestors
    Found(T),
    /// No style in the chain declares the attribute
    Absent,
}

impl<T> Resolved<T> {
    /// Check if a value was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Resolved::Found(_))
    }

    /// Convert to an `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Resolved::Found(v) => Some(v),
            Resolved::Absent => None,
        }
    }

    /// Map the found value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Resolved::Found(v) => Resolved::Found(f(v)),
            Resolved::Absent => Resolved::Absent,
        }
    }
}

impl<T> From<Option<T>> for Resolved<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Resolved::Found(v),
            None => Resolved::Absent,
        }
    }
}

/// The attributes a style chain can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Font name
    FontName,
    /// Font size in half-points
    FontSize,
    /// Font color
    FontColor,
    /// Line spacing in twentieths of a point
    LineSpacing,
    /// First-line indent in twentieths of a point
    FirstLineIndent,
}

impl AttributeKind {
    /// All attribute kinds.
    pub const ALL: [AttributeKind; 5] = [
        AttributeKind::FontName,
        AttributeKind::FontSize,
        AttributeKind::FontColor,
        AttributeKind::LineSpacing,
        AttributeKind::FirstLineIndent,
    ];

    /// Short name used in log messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::FontName => "font name",
            AttributeKind::FontSize => "font size",
            AttributeKind::FontColor => "font color",
            AttributeKind::LineSpacing => "line spacing",
            AttributeKind::FirstLineIndent => "first-line indent",
        }
    }
}

/// A resolved value in renderer units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Font name
    FontName(String),
    /// Half-points
    FontSize(i64),
    /// Hex color
    FontColor(RgbColor),
    /// Twentieths of a point
    LineSpacing(i64),
    /// Twentieths of a point
    FirstLineIndent(i64),
}

/// Resolves style attributes over a stylesheet's base-style graph.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    styles: &'a StyleSheet,
}

impl<'a> StyleResolver<'a> {
    /// Create a resolver over a stylesheet.
    pub fn new(styles: &'a StyleSheet) -> Self {
        Self { styles }
    }

    /// Iterate a style and its ancestors, nearest first.
    pub fn chain(&self, style: &'a Style) -> StyleChain<'a> {
        StyleChain {
            styles: self.styles,
            next: Some(style),
            visited: HashSet::new(),
        }
    }

    /// Resolve an attribute with a field accessor. The first style in the chain
    /// for which `field` returns a value wins.
    pub fn resolve<T, F>(&self, style: &'a Style, field: F) -> Resolved<T>
    where
        F: FnMut(&'a Style) -> Option<T>,
    {
        self.chain(style).find_map(field).into()
    }

    fn resolve_logged<T, F>(&self, style: &'a Style, kind: AttributeKind, field: F) -> Resolved<T>
    where
        F: FnMut(&'a Style) -> Option<T>,
    {
        let resolved = self.resolve(style, field);
        if !resolved.is_found() {
            log::debug!("No {} for style '{}'", kind.as_str(), style.name);
        }
        resolved
    }

    /// Resolve an attribute by kind.
    pub fn resolve_kind(&self, style: &'a Style, kind: AttributeKind) -> Resolved<AttributeValue> {
        match kind {
            AttributeKind::FontName => self.font_name(style).map(AttributeValue::FontName),
            AttributeKind::FontSize => self.font_size(style).map(AttributeValue::FontSize),
            AttributeKind::FontColor => self.font_color(style).map(AttributeValue::FontColor),
            AttributeKind::LineSpacing => {
                self.line_spacing(style).map(AttributeValue::LineSpacing)
            }
            AttributeKind::FirstLineIndent => self
                .first_line_indent(style)
                .map(AttributeValue::FirstLineIndent),
        }
    }

    /// Font name: the run-font override, then the stylesheet font field.
    pub fn font_name(&self, style: &'a Style) -> Resolved<String> {
        self.resolve_logged(style, AttributeKind::FontName, |s| {
            s.run_fonts
                .preferred()
                .or_else(|| s.font.name.as_deref().filter(|n| !n.trim().is_empty()))
                .map(str::to_string)
        })
    }

    /// Font size in half-points.
    pub fn font_size(&self, style: &'a Style) -> Resolved<i64> {
        self.resolve_logged(style, AttributeKind::FontSize, |s| {
            s.font.size.map(font_size_to_half_points)
        })
    }

    /// Font color.
    pub fn font_color(&self, style: &'a Style) -> Resolved<RgbColor> {
        self.resolve_logged(style, AttributeKind::FontColor, |s| s.font.color.clone())
    }

    /// Line spacing in twentieths of a point.
    pub fn line_spacing(&self, style: &'a Style) -> Resolved<i64> {
        self.resolve_logged(style, AttributeKind::LineSpacing, |s| {
            s.paragraph.line_spacing.map(line_spacing_to_twentieths)
        })
    }

    /// First-line indent in twentieths of a point.
    pub fn first_line_indent(&self, style: &'a Style) -> Resolved<i64> {
        self.resolve_logged(style, AttributeKind::FirstLineIndent, |s| {
            s.paragraph.first_line_indent.map(indent_to_twentieths)
        })
    }
}

/// Iterator over a style's base-style chain.
pub struct StyleChain<'a> {
    styles: &'a StyleSheet,
    next: Option<&'a Style>,
    visited: HashSet<&'a str>,
}

impl<'a> Iterator for StyleChain<'a> {
    type Item = &'a Style;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.visited.insert(current.id.as_str()) {
            log::warn!("Base-style cycle detected at style '{}'", current.id);
            return None;
        }

        self.next = current.based_on.as_deref().and_then(|id| {
            let base = self.styles.by_id(id);
            if base.is_none() {
                log::debug!("Style '{}' is based on unknown style '{}'", current.id, id);
            }
            base
        });
        Some(current)
    }
}
