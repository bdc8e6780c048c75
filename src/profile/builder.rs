//! Profile assembly.
//!
//! Each extraction step reads the document on its own and only ever fills
//! in its own keys, so an attribute that is missing anywhere in its chain
//! simply leaves that key out.

use crate::model::{Document, RgbColor, Style};
use crate::resolve::{find_style, length_to_renderer_units, StyleResolver};

use super::options::{ProfileOptions, BODY_STYLE, HEADING_STYLE};
use super::output::{Margins, StyleDetail, StyleProfile, TargetFont, TargetFonts};
use super::table;

/// Builds a [`StyleProfile`] from a parsed document.
pub struct ProfileBuilder<'a> {
    document: &'a Document,
    options: &'a ProfileOptions,
    resolver: StyleResolver<'a>,
}

impl<'a> ProfileBuilder<'a> {
    /// Create a builder over a document.
    pub fn new(document: &'a Document, options: &'a ProfileOptions) -> Self {
        Self {
            document,
            options,
            resolver: StyleResolver::new(&document.styles),
        }
    }

    /// Build the profile.
    pub fn build(&self) -> StyleProfile {
        let mut profile = StyleProfile::new();

        profile.margin = self.margins();
        profile.fonts = self.target_fonts();
        profile.red_header = self.red_header();

        if let Some(body) = self.style(BODY_STYLE) {
            profile.first_line_indent = self.resolver.first_line_indent(body).into_option();
            profile.line_spacing = self.resolver.line_spacing(body).into_option();
            profile.color_main = self.resolver.font_color(body).into_option();
        }

        if self.options.analyze_tables {
            profile.table = table::analyze(self.document);
        }

        if self.options.detailed_styles {
            profile.detailed_styles = Some(self.style_details());
        }

        profile
    }

    fn style(&self, canonical: &str) -> Option<&'a Style> {
        let style = find_style(&self.document.styles, canonical);
        if style.is_none() {
            log::debug!("Style '{}' not present", canonical);
        }
        style
    }

    fn margins(&self) -> Option<Margins> {
        let section = self.document.first_section()?;
        let m = &section.margins;
        Some(Margins {
            top: length_to_renderer_units(m.top),
            bottom: length_to_renderer_units(m.bottom),
            left: length_to_renderer_units(m.left),
            right: length_to_renderer_units(m.right),
        })
    }

    fn target_fonts(&self) -> TargetFonts {
        let mut fonts = TargetFonts::new();
        for target in &self.options.targets {
            let Some(style) = self.style(&target.name) else {
                continue;
            };
            fonts.push(TargetFont {
                prefix: target.prefix.clone(),
                name: self.resolver.font_name(style).into_option(),
                size: self.resolver.font_size(style).into_option(),
            });
        }
        fonts
    }

    fn red_header(&self) -> bool {
        self.style(HEADING_STYLE)
            .and_then(|style| self.resolver.font_color(style).into_option())
            .is_some_and(|color| is_red_like(&color, &self.options.red_prefixes))
    }

    fn style_details(&self) -> Vec<StyleDetail> {
        let styles = &self.document.styles;
        styles
            .iter()
            .filter(|s| s.is_paragraph())
            .map(|style| StyleDetail {
                id: style.id.clone(),
                name: style.name.clone(),
                font_name: self.resolver.font_name(style).into_option(),
                font_size: self.resolver.font_size(style).into_option(),
                line_spacing: self.resolver.line_spacing(style).into_option(),
                first_line_indent: self.resolver.first_line_indent(style).into_option(),
                base_style: style
                    .based_on
                    .as_deref()
                    .and_then(|id| styles.by_id(id))
                    .map(|base| base.name.clone()),
            })
            .collect()
    }
}

/// Check whether a color starts with one of the red-like hex prefixes.
pub fn is_red_like<S: AsRef<str>>(color: &RgbColor, prefixes: &[S]) -> bool {
    prefixes.iter().any(|p| color.has_prefix(p.as_ref()))
}

/// Build a profile with the given options.
pub fn build_profile(document: &Document, options: &ProfileOptions) -> StyleProfile {
    ProfileBuilder::new(document, options).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Length, LineSpacing, PageMargins, Pt, Section, StyleKind, StyleSheet, Table, Twips,
    };
    use crate::profile::options::RED_PREFIXES;

    fn color(hex: &str) -> RgbColor {
        RgbColor::parse(hex).unwrap()
    }

    fn document(styles: Vec<Style>) -> Document {
        let mut doc = Document::new();
        doc.styles = StyleSheet::from(styles);
        doc
    }

    fn heading_with_color(hex: &str) -> Document {
        let mut heading = Style::new("Heading1").named("Heading 1");
        heading.font.color = Some(color(hex));
        document(vec![heading])
    }

    #[test]
    fn test_red_prefixes() {
        assert!(is_red_like(&color("FF0000"), RED_PREFIXES));
        assert!(is_red_like(&color("E02020"), RED_PREFIXES));
        assert!(is_red_like(&color("D01010"), RED_PREFIXES));
        assert!(!is_red_like(&color("00FF00"), RED_PREFIXES));
        assert!(!is_red_like(&color("1F3864"), RED_PREFIXES));
    }

    #[test]
    fn test_red_header_flag() {
        let options = ProfileOptions::default();
        for hex in ["FF0000", "E02020", "D01010"] {
            assert!(build_profile(&heading_with_color(hex), &options).red_header);
        }
        assert!(!build_profile(&heading_with_color("00FF00"), &options).red_header);
    }

    #[test]
    fn test_red_header_inherited() {
        let mut base = Style::new("Title");
        base.font.color = Some(color("C00000"));
        let heading = Style::new("Heading1").named("Heading 1").based_on("Title");

        let profile = build_profile(&document(vec![base, heading]), &ProfileOptions::default());
        assert!(profile.red_header);
    }

    #[test]
    fn test_body_attributes() {
        let mut normal = Style::new("Normal");
        normal.run_fonts.ascii = Some("Calibri".to_string());
        normal.font.size = Some(Pt(11.0));
        normal.font.color = Some(color("333333"));
        normal.paragraph.line_spacing = Some(LineSpacing::Multiple(1.5));
        normal.paragraph.first_line_indent = Some(Twips(420));

        let profile = build_profile(&document(vec![normal]), &ProfileOptions::default());
        assert_eq!(profile.font("Main"), Some("Calibri"));
        assert_eq!(profile.font_size("Main"), Some(22));
        assert_eq!(profile.line_spacing, Some(360));
        assert_eq!(profile.first_line_indent, Some(420));
        assert_eq!(profile.color_main.unwrap().as_str(), "333333");
        assert!(!profile.red_header);
    }

    #[test]
    fn test_heading_inherits_from_normal() {
        let mut normal = Style::new("Normal");
        normal.font.name = Some("Times New Roman".to_string());
        normal.font.size = Some(Pt(12.0));
        let mut heading = Style::new("Heading2").named("Heading 2").based_on("Normal");
        heading.font.size = Some(Pt(14.0));

        let profile = build_profile(&document(vec![normal, heading]), &ProfileOptions::default());
        assert_eq!(profile.font("H2"), Some("Times New Roman"));
        assert_eq!(profile.font_size("H2"), Some(28));
        assert!(profile.fonts.get("H1").is_none());
    }

    #[test]
    fn test_aliased_heading() {
        let mut heading = Style::new("h1").named("Heading1");
        heading.font.size = Some(Pt(16.0));

        let profile = build_profile(&document(vec![heading]), &ProfileOptions::default());
        assert_eq!(profile.font_size("H1"), Some(32));
    }

    #[test]
    fn test_margins_first_section() {
        let mut doc = Document::new();
        doc.add_section(Section::with_margins(PageMargins {
            top: Some(Length::emu(360_000)),
            bottom: None,
            left: Length::from_twips(1800),
            right: Length::from_twips(1800),
        }));
        doc.add_section(Section::with_margins(PageMargins::uniform(Length::emu(0))));

        let margin = build_profile(&doc, &ProfileOptions::default()).margin.unwrap();
        assert_eq!(margin.top.as_deref(), Some("1.0cm"));
        assert_eq!(margin.bottom, None);
        assert_eq!(margin.left.as_deref(), Some("3.18cm"));
        assert_eq!(margin.right.as_deref(), Some("3.18cm"));
    }

    #[test]
    fn test_empty_document() {
        let profile = build_profile(&Document::new(), &ProfileOptions::default());
        assert_eq!(profile, StyleProfile::new());
    }

    #[test]
    fn test_cyclic_styles_still_build() {
        let mut normal = Style::new("Normal").based_on("Loop");
        normal.font.size = Some(Pt(10.5));
        let looped = Style::new("Loop").based_on("Normal");

        let profile = build_profile(&document(vec![normal, looped]), &ProfileOptions::default());
        assert_eq!(profile.font_size("Main"), Some(21));
        assert_eq!(profile.font("Main"), None);
    }

    #[test]
    fn test_tables_toggle() {
        let mut doc = Document::new();
        doc.add_table(Table::new());

        assert!(build_profile(&doc, &ProfileOptions::default()).table.is_some());
        let options = ProfileOptions::new().with_tables(false);
        assert!(build_profile(&doc, &options).table.is_none());
    }

    #[test]
    fn test_detailed_styles() {
        let mut normal = Style::new("Normal");
        normal.font.size = Some(Pt(12.0));
        let quote = Style::new("Quote").based_on("Normal");
        let mut strong = Style::new("Strong");
        strong.kind = StyleKind::Character;

        let doc = document(vec![normal, quote, strong]);
        assert!(build_profile(&doc, &ProfileOptions::default())
            .detailed_styles
            .is_none());

        let options = ProfileOptions::new().with_detailed_styles(true);
        let details = build_profile(&doc, &options).detailed_styles.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[1].id, "Quote");
        assert_eq!(details[1].font_size, Some(24));
        assert_eq!(details[1].base_style.as_deref(), Some("Normal"));
    }

    #[test]
    fn test_custom_targets() {
        let mut title = Style::new("Title");
        title.font.size = Some(Pt(28.0));

        let options = ProfileOptions::new().with_targets([("Title", "Title")]);
        let profile = build_profile(&document(vec![title]), &options);
        assert_eq!(profile.font_size("Title"), Some(56));
        assert_eq!(profile.fonts.len(), 1);
    }
}
