//! Style profile extraction.
//!
//! This module turns a parsed [`Document`](crate::model::Document) into a
//! flat [`StyleProfile`]: first-section margins, resolved fonts for a fixed
//! list of target styles, body text formatting, a red-heading flag, and
//! conventions read off the first table.

mod builder;
mod options;
mod output;
pub mod table;

pub use builder::{build_profile, is_red_like, ProfileBuilder};
pub use options::{
    ProfileOptions, TargetStyle, BODY_STYLE, HEADING_STYLE, RED_PREFIXES, TARGET_STYLES,
};
pub use output::{
    ExtractionReport, Margins, StyleDetail, StyleProfile, TargetFont, TargetFonts,
};
pub use table::{BorderStyle, CellAlign, TableConvention, DEFAULT_BORDER_SIZE};
