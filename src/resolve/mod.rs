//! Style resolution: unit conversion, base-style chain walking and style
//! name aliasing.

pub mod alias;
pub mod chain;
pub mod units;

pub use alias::{find_style, STYLE_ALIASES};
pub use chain::{AttributeKind, AttributeValue, Resolved, StyleChain, StyleResolver};
pub use units::{
    font_size_to_half_points, indent_to_twentieths, length_to_renderer_units,
    line_spacing_to_twentieths,
};
