//! Native measurement types as they appear in a WordprocessingML package.

use serde::{Deserialize, Serialize};
use std::fmt;

/// English Metric Units per twip (1 inch = 914400 EMU = 1440 twips).
pub const EMU_PER_TWIP: i64 = 635;

/// A linear length in English Metric Units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Length(pub i64);

impl Length {
    /// Create a length from EMUs.
    pub fn emu(value: i64) -> Self {
        Self(value)
    }

    /// Create a length from twentieths of a point. Returns `None` if the
    /// value does not fit in EMUs.
    pub fn from_twips(twips: i64) -> Option<Self> {
        twips.checked_mul(EMU_PER_TWIP).map(Self)
    }

    /// Get the raw EMU value.
    pub fn as_emu(self) -> i64 {
        self.0
    }
}

/// A size in points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Pt(pub f64);

impl Pt {
    /// Create a point size from half-points (`w:sz`).
    pub fn from_half_points(half_points: f64) -> Self {
        Self(half_points / 2.0)
    }
}

/// A signed length in twentieths of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Twips(pub i64);

/// Paragraph line spacing.
///
/// The two forms are mutually exclusive and come from `w:spacing/@w:lineRule`:
/// `auto` (or absent) stores a multiple of single spacing, `exact` and
/// `atLeast` store an absolute height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum LineSpacing {
    /// Multiple of single-line spacing (1.0, 1.5, 2.0, ...)
    Multiple(f64),
    /// Absolute line height
    Exact(Pt),
}

/// A six-digit RGB hex color, stored uppercase without `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RgbColor(String);

impl RgbColor {
    /// Parse a `w:color`-style value. `auto` and malformed values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().trim_start_matches('#');
        if value.len() != 6 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(value.to_ascii_uppercase()))
    }

    /// Black, the renderer's fallback color.
    pub fn black() -> Self {
        Self("000000".to_string())
    }

    /// Get the hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the color starts with a hex prefix (case-insensitive).
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(&prefix.to_ascii_uppercase())
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_from_twips() {
        // 1 inch
        assert_eq!(Length::from_twips(1440).unwrap().as_emu(), 914_400);
    }

    #[test]
    fn test_length_from_twips_overflow() {
        assert_eq!(Length::from_twips(99_999_999_999_999_999), None);
        assert_eq!(Length::from_twips(i64::MIN), None);
        assert!(Length::from_twips(-720).is_some());
    }

    #[test]
    fn test_pt_from_half_points() {
        assert_eq!(Pt::from_half_points(21.0), Pt(10.5));
    }

    #[test]
    fn test_rgb_color_parse() {
        assert_eq!(RgbColor::parse("ff0000").unwrap().as_str(), "FF0000");
        assert_eq!(RgbColor::parse("#1F3864").unwrap().as_str(), "1F3864");
        assert!(RgbColor::parse("auto").is_none());
        assert!(RgbColor::parse("F00").is_none());
        assert!(RgbColor::parse("GG0000").is_none());
        assert_eq!(RgbColor::black().as_str(), "000000");
    }

    #[test]
    fn test_rgb_color_prefix() {
        let color = RgbColor::parse("E02020").unwrap();
        assert!(color.has_prefix("e020"));
        assert!(!color.has_prefix("FF"));
    }
}
