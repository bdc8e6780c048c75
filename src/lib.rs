//! # docxstyle
//!
//! Style profile extraction for DOCX documents.
//!
//! This library reads a WordprocessingML package and flattens its cascading
//! stylesheet into a compact profile of already-resolved values (fonts,
//! sizes, colors, spacing, indentation, margins and table conventions) for
//! a document generator that cannot walk style inheritance itself.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docxstyle::{extract_profile_file, render, JsonFormat};
//!
//! fn main() -> docxstyle::Result<()> {
//!     let profile = extract_profile_file("report.docx")?;
//!     println!("{:?}", profile.font("Main"));
//!
//!     let json = render::to_json(&profile, JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Base-style resolution**: attributes are inherited through `basedOn`
//!   chains, with cycle protection
//! - **Name aliasing**: `Heading1` and `Heading 1` are the same target
//! - **Renderer units**: centimeter margins, half-point sizes, twentieths
//!   of a point for spacing and indents
//! - **Table conventions**: border and header formatting from the first table
//! - **Structured errors**: missing or broken inputs become `{"error": ...}`

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod profile;
pub mod render;
pub mod resolve;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, DocxFormat};
pub use error::{Error, Result};
pub use model::{
    Document, Length, LineSpacing, PageMargins, Paragraph, Pt, RgbColor, Run, Section, Style,
    StyleKind, StyleSheet, Table, TableCell, TableRow, Twips,
};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use profile::{
    build_profile, ExtractionReport, ProfileBuilder, ProfileOptions, StyleProfile,
    TableConvention,
};
pub use render::JsonFormat;
pub use resolve::{Resolved, StyleResolver};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file into a document model.
///
/// # Example
///
/// ```no_run
/// use docxstyle::parse_file;
///
/// let doc = parse_file("report.docx").unwrap();
/// println!("Styles: {}", doc.styles.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
///
/// # Example
///
/// ```no_run
/// use docxstyle::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient();
/// let doc = parse_file_with_options("report.docx", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX package from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX package from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a DOCX package from a reader.
///
/// # Example
///
/// ```no_run
/// use docxstyle::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("report.docx").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Extract the style profile of a DOCX file with default options.
///
/// # Example
///
/// ```no_run
/// use docxstyle::extract_profile_file;
///
/// let profile = extract_profile_file("report.docx").unwrap();
/// assert!(profile.font_size("Main").is_some());
/// ```
pub fn extract_profile_file<P: AsRef<Path>>(path: P) -> Result<StyleProfile> {
    DocxStyle::new().parse(path).map(DocxStyleResult::into_profile)
}

/// Extract the style profile of an in-memory DOCX package.
pub fn extract_profile_bytes(data: &[u8]) -> Result<StyleProfile> {
    DocxStyle::new()
        .parse_bytes(data)
        .map(DocxStyleResult::into_profile)
}

/// Extract a profile and fold any failure into a report.
///
/// This never fails: a missing file becomes `{"error": "File not found"}`
/// and any other failure becomes `{"error": "<message>"}`.
///
/// # Example
///
/// ```no_run
/// use docxstyle::{extract_report, render, JsonFormat};
///
/// let report = extract_report("report.docx");
/// println!("{}", render::to_json(&report, JsonFormat::Pretty).unwrap());
/// ```
pub fn extract_report<P: AsRef<Path>>(path: P) -> ExtractionReport {
    DocxStyle::new().report(path)
}

/// Builder for extracting style profiles.
///
/// # Example
///
/// ```no_run
/// use docxstyle::{DocxStyle, JsonFormat};
///
/// let json = DocxStyle::new()
///     .lenient()
///     .with_detailed_styles(true)
///     .parse("report.docx")?
///     .to_json(JsonFormat::Compact)?;
/// # Ok::<(), docxstyle::Error>(())
/// ```
pub struct DocxStyle {
    parse_options: ParseOptions,
    profile_options: ProfileOptions,
}

impl DocxStyle {
    /// Create a new DocxStyle builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            profile_options: ProfileOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Enable or disable table analysis.
    pub fn with_tables(mut self, analyze: bool) -> Self {
        self.parse_options = self.parse_options.with_tables(analyze);
        self.profile_options = self.profile_options.with_tables(analyze);
        self
    }

    /// Include the per-style listing in the profile.
    pub fn with_detailed_styles(mut self, detailed: bool) -> Self {
        self.profile_options = self.profile_options.with_detailed_styles(detailed);
        self
    }

    /// Add a target style exported under `font{prefix}` / `fontSize{prefix}`.
    pub fn with_target(mut self, name: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.profile_options = self.profile_options.with_target(name, prefix);
        self
    }

    /// Replace the red-like color prefixes.
    pub fn with_red_prefixes<S: Into<String>>(
        mut self,
        prefixes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.profile_options = self.profile_options.with_red_prefixes(prefixes);
        self
    }

    /// Parse a DOCX file and build its profile.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<DocxStyleResult> {
        let parser = DocxParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(DocxStyleResult::new(document, &self.profile_options))
    }

    /// Parse a DOCX package from bytes and build its profile.
    pub fn parse_bytes(self, data: &[u8]) -> Result<DocxStyleResult> {
        let parser = DocxParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(DocxStyleResult::new(document, &self.profile_options))
    }

    /// Parse a DOCX file and report the outcome as data.
    ///
    /// Processing failures are logged at `error` with the input path.
    pub fn report<P: AsRef<Path>>(self, path: P) -> ExtractionReport {
        let path = path.as_ref();
        let result = self.parse(path).map(DocxStyleResult::into_profile);
        if let Err(e) = &result {
            if !matches!(e, Error::FileNotFound(_)) {
                log::error!("Error processing {}: {}", path.display(), e);
            }
        }
        ExtractionReport::from(result)
    }
}

impl Default for DocxStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of profiling a DOCX document.
pub struct DocxStyleResult {
    /// The parsed document
    pub document: Document,
    profile: StyleProfile,
}

impl DocxStyleResult {
    fn new(document: Document, options: &ProfileOptions) -> Self {
        let profile = build_profile(&document, options);
        Self { document, profile }
    }

    /// Get the profile.
    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    /// Take the profile.
    pub fn into_profile(self) -> StyleProfile {
        self.profile
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Convert the profile to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.profile, format)
    }
}
