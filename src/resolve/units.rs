//! Conversion from document-native units to renderer units.
//!
//! The renderer wants margins as centimeter strings, font sizes in
//! half-points, and line spacing and indents in twentieths of a point.

use crate::model::{Length, LineSpacing, Pt, Twips};

/// EMUs per centimeter.
pub const EMU_PER_CM: f64 = 360_000.0;

/// Twentieths of a point per single line.
pub const TWENTIETHS_PER_LINE: f64 = 240.0;

/// Twentieths of a point per point.
pub const TWENTIETHS_PER_POINT: f64 = 20.0;

/// Convert a length to a centimeter string rounded to two decimals
/// (`360000` → `"1.0cm"`, `1314000` → `"3.65cm"`).
pub fn length_to_renderer_units(length: Option<Length>) -> Option<String> {
    let length = length?;
    let cm = (length.as_emu() as f64 * 100.0 / EMU_PER_CM).round() / 100.0;
    // `{:?}` keeps the trailing `.0` on whole numbers
    Some(format!("{:?}cm", cm))
}

/// Convert a point size to truncated half-points.
pub fn font_size_to_half_points(size: Pt) -> i64 {
    (size.0 * 2.0) as i64
}

/// Convert line spacing to truncated twentieths of a point.
pub fn line_spacing_to_twentieths(spacing: LineSpacing) -> i64 {
    match spacing {
        LineSpacing::Multiple(lines) => (lines * TWENTIETHS_PER_LINE) as i64,
        LineSpacing::Exact(pt) => (pt.0 * TWENTIETHS_PER_POINT) as i64,
    }
}

/// Convert a first-line indent to twentieths of a point.
pub fn indent_to_twentieths(indent: Twips) -> i64 {
    indent.0
}
