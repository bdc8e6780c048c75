//! Style profile output types.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::Result;
use crate::model::RgbColor;

use super::table::TableConvention;

/// A flattened style profile, serialized with the renderer's key names.
///
/// Absent attributes are omitted from the output rather than written as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    /// First-section page margins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margins>,

    /// `font{prefix}` / `fontSize{prefix}` per target style
    #[serde(flatten)]
    pub fonts: TargetFonts,

    /// Whether the first-level heading is red-like
    #[serde(skip_serializing_if = "is_false")]
    pub red_header: bool,

    /// Body first-line indent in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line_indent: Option<i64>,

    /// Body line spacing in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<i64>,

    /// Body text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_main: Option<RgbColor>,

    /// Table conventions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableConvention>,

    /// Per-style listing of every paragraph style
    #[serde(
        rename = "detailedStylesInfo",
        skip_serializing_if = "Option::is_none"
    )]
    pub detailed_styles: Option<Vec<StyleDetail>>,
}

impl StyleProfile {
    /// Create an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Font name exported under a prefix.
    pub fn font(&self, prefix: &str) -> Option<&str> {
        self.fonts.get(prefix).and_then(|f| f.name.as_deref())
    }

    /// Font size exported under a prefix.
    pub fn font_size(&self, prefix: &str) -> Option<i64> {
        self.fonts.get(prefix).and_then(|f| f.size)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Page margins as centimeter strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Margins {
    /// Top margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    /// Bottom margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    /// Left margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Right margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

/// Resolved font name and size for one target style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetFont {
    /// Output key suffix (`Main`, `H1`, ...)
    pub prefix: String,
    /// Font name
    pub name: Option<String>,
    /// Font size in half-points
    pub size: Option<i64>,
}

/// Target fonts in target order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetFonts(Vec<TargetFont>);

impl TargetFonts {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target font. Entries with neither name nor size are dropped.
    pub fn push(&mut self, font: TargetFont) {
        if font.name.is_some() || font.size.is_some() {
            self.0.push(font);
        }
    }

    /// Look up a target by prefix.
    pub fn get(&self, prefix: &str) -> Option<&TargetFont> {
        self.0.iter().find(|f| f.prefix == prefix)
    }

    /// Iterate targets.
    pub fn iter(&self) -> impl Iterator<Item = &TargetFont> {
        self.0.iter()
    }

    /// Number of targets carrying a value.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no target carries a value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for TargetFonts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for font in &self.0 {
            if let Some(name) = &font.name {
                map.serialize_entry(&format!("font{}", font.prefix), name)?;
            }
            if let Some(size) = font.size {
                map.serialize_entry(&format!("fontSize{}", font.prefix), &size)?;
            }
        }
        map.end()
    }
}

/// Resolved attributes of one paragraph style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDetail {
    /// Style id
    pub id: String,
    /// Display name
    pub name: String,
    /// Font name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    /// Font size in half-points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i64>,
    /// Line spacing in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<i64>,
    /// First-line indent in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line_indent: Option<i64>,
    /// Display name of the base style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_style: Option<String>,
}

/// The outcome of one extraction, as written to standard output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractionReport {
    /// A profile was built
    Profile(StyleProfile),
    /// The input was missing or could not be processed
    Failure {
        /// Error message
        error: String,
    },
}

impl ExtractionReport {
    /// Check if this report carries a profile.
    pub fn is_profile(&self) -> bool {
        matches!(self, ExtractionReport::Profile(_))
    }

    /// Get the profile, if any.
    pub fn profile(&self) -> Option<&StyleProfile> {
        match self {
            ExtractionReport::Profile(p) => Some(p),
            ExtractionReport::Failure { .. } => None,
        }
    }
}

impl From<Result<StyleProfile>> for ExtractionReport {
    fn from(result: Result<StyleProfile>) -> Self {
        match result {
            Ok(profile) => ExtractionReport::Profile(profile),
            Err(e) => ExtractionReport::Failure {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_empty_profile_serializes_empty() {
        let value = serde_json::to_value(StyleProfile::new()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_profile_keys() {
        let mut profile = StyleProfile::new();
        profile.margin = Some(Margins {
            top: Some("2.54cm".to_string()),
            left: Some("3.18cm".to_string()),
            ..Default::default()
        });
        profile.fonts.push(TargetFont {
            prefix: "Main".to_string(),
            name: Some("Calibri".to_string()),
            size: Some(22),
        });
        profile.fonts.push(TargetFont {
            prefix: "H1".to_string(),
            name: None,
            size: Some(32),
        });
        profile.red_header = true;
        profile.line_spacing = Some(360);
        profile.color_main = RgbColor::parse("333333");

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            value,
            json!({
                "margin": { "top": "2.54cm", "left": "3.18cm" },
                "fontMain": "Calibri",
                "fontSizeMain": 22,
                "fontSizeH1": 32,
                "redHeader": true,
                "lineSpacing": 360,
                "colorMain": "333333"
            })
        );
        assert_eq!(profile.font("Main"), Some("Calibri"));
        assert_eq!(profile.font("H1"), None);
        assert_eq!(profile.font_size("H1"), Some(32));
    }

    #[test]
    fn test_target_fonts_drop_empty() {
        let mut fonts = TargetFonts::new();
        fonts.push(TargetFont {
            prefix: "H3".to_string(),
            ..Default::default()
        });
        assert!(fonts.is_empty());
    }

    #[test]
    fn test_report_not_found() {
        let report = ExtractionReport::from(Err(Error::FileNotFound(PathBuf::from("x.docx"))));
        assert!(!report.is_profile());
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "error": "File not found" })
        );
    }

    #[test]
    fn test_report_processing_failure() {
        let report = ExtractionReport::from(Err(Error::UnknownFormat));
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "error": "Unknown file format: not a valid DOCX package" })
        );
    }

    #[test]
    fn test_report_profile() {
        let report = ExtractionReport::from(Ok(StyleProfile::new()));
        assert!(report.is_profile());
        assert!(report.profile().is_some());
    }
}
