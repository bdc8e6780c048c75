//! Document model types for style profiling.
//!
//! This module defines the read-only object model the package reader
//! produces: sections with margins, the stylesheet with its base-style
//! graph, and top-level tables. Values keep their native units; conversion
//! to renderer units happens in [`crate::resolve`].

mod document;
mod paragraph;
mod style;
mod table;
mod units;

pub use document::{Document, PageMargins, Section};
pub use paragraph::{Paragraph, Run};
pub use style::{Font, ParagraphFormat, RunFonts, Style, StyleKind, StyleSheet};
pub use table::{Border, Table, TableBorders, TableCell, TableRow};
pub use units::{Length, LineSpacing, Pt, RgbColor, Twips, EMU_PER_TWIP};
