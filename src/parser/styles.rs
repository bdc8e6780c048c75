//! Stylesheet (`word/styles.xml`) reading.

use roxmltree::Node;

use crate::error::Result;
use crate::model::{
    Font, LineSpacing, ParagraphFormat, Pt, RgbColor, RunFonts, Style, StyleKind, StyleSheet,
    Twips,
};

use super::xml::{attr, is_wml, parse_twips, wml, wml_attr, wml_bool};

/// Built-in style names Word stores in lowercase, mapped to the names
/// shown in its user interface.
const UI_NAMES: &[(&str, &str)] = &[
    ("caption", "Caption"),
    ("footer", "Footer"),
    ("header", "Header"),
    ("heading 1", "Heading 1"),
    ("heading 2", "Heading 2"),
    ("heading 3", "Heading 3"),
    ("heading 4", "Heading 4"),
    ("heading 5", "Heading 5"),
    ("heading 6", "Heading 6"),
    ("heading 7", "Heading 7"),
    ("heading 8", "Heading 8"),
    ("heading 9", "Heading 9"),
    ("normal", "Normal"),
    ("subtitle", "Subtitle"),
    ("title", "Title"),
];

/// Map a stored style name to its display name.
pub fn ui_name(stored: &str) -> &str {
    UI_NAMES
        .iter()
        .find(|(internal, _)| *internal == stored)
        .map(|(_, ui)| *ui)
        .unwrap_or(stored)
}

/// Parse a stylesheet part.
pub fn parse_styles(xml: &str) -> Result<StyleSheet> {
    let doc = roxmltree::Document::parse(xml)?;
    let sheet = doc
        .root_element()
        .children()
        .filter(|n| is_wml(*n, "style"))
        .filter_map(parse_style)
        .collect();
    Ok(sheet)
}

fn parse_style(node: Node) -> Option<Style> {
    let id = attr(node, "styleId")?;
    let name = wml_attr(node, "name").map(ui_name).unwrap_or(id);
    let kind = attr(node, "type")
        .map(StyleKind::from_attr)
        .unwrap_or_default();
    let based_on = wml_attr(node, "basedOn")
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    let rpr = wml(node, "rPr");
    let ppr = wml(node, "pPr");

    Some(Style {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        based_on,
        run_fonts: rpr.map(parse_run_fonts).unwrap_or_default(),
        font: rpr.map(parse_font).unwrap_or_default(),
        paragraph: ppr.map(parse_paragraph_format).unwrap_or_default(),
    })
}

fn parse_run_fonts(rpr: Node) -> RunFonts {
    let Some(rfonts) = wml(rpr, "rFonts") else {
        return RunFonts::default();
    };
    RunFonts {
        east_asia: attr(rfonts, "eastAsia").map(str::to_string),
        ascii: attr(rfonts, "ascii").map(str::to_string),
    }
}

fn parse_font(rpr: Node) -> Font {
    let name = wml(rpr, "rFonts")
        .and_then(|n| attr(n, "hAnsi").or_else(|| attr(n, "cs")))
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    let size = wml_attr(rpr, "sz")
        .and_then(|v| v.trim().parse::<f64>().ok())
        .map(Pt::from_half_points);
    let color = wml_attr(rpr, "color").and_then(RgbColor::parse);

    Font {
        name,
        size,
        color,
        bold: wml_bool(rpr, "b"),
    }
}

fn parse_paragraph_format(ppr: Node) -> ParagraphFormat {
    let line_spacing = wml(ppr, "spacing").and_then(|spacing| {
        let line = attr(spacing, "line")?.trim().parse::<f64>().ok()?;
        Some(match attr(spacing, "lineRule") {
            Some("exact") | Some("atLeast") => LineSpacing::Exact(Pt(line / 20.0)),
            _ => LineSpacing::Multiple(line / 240.0),
        })
    });

    // `w:firstLine` is ignored when `w:hanging` is present
    let first_line_indent = wml(ppr, "ind").and_then(|ind| {
        if let Some(hanging) = attr(ind, "hanging").and_then(parse_twips) {
            return Some(Twips(-hanging));
        }
        attr(ind, "firstLine").and_then(parse_twips).map(Twips)
    });

    ParagraphFormat {
        line_spacing,
        first_line_indent,
    }
}
