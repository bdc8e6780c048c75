//! Style name aliasing.

use crate::model::{Style, StyleSheet};

/// Known alternate names for canonical style names. Authoring tools do not
/// agree on naming, so this list is maintained by hand.
pub const STYLE_ALIASES: &[(&str, &str)] = &[
    ("Heading 1", "Heading1"),
    ("Heading 2", "Heading2"),
    ("Heading 3", "Heading3"),
    ("Normal", "Normal (Web)"),
];

/// Find a style by canonical name: exact display name first, then the
/// alias table.
pub fn find_style<'a>(styles: &'a StyleSheet, canonical: &str) -> Option<&'a Style> {
    if let Some(style) = styles.by_name(canonical) {
        return Some(style);
    }

    STYLE_ALIASES
        .iter()
        .filter(|(name, _)| *name == canonical)
        .find_map(|(_, alias)| {
            let style = styles.by_name(alias)?;
            log::debug!("Using style '{}' for '{}'", alias, canonical);
            Some(style)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(names: &[&str]) -> StyleSheet {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Style::new(format!("s{}", i)).named(*name))
            .collect()
    }

    #[test]
    fn test_exact_match() {
        let styles = sheet(&["Heading1", "Heading 1"]);
        assert_eq!(find_style(&styles, "Heading 1").unwrap().id, "s1");
    }

    #[test]
    fn test_alias_match() {
        let styles = sheet(&["Heading2", "Normal (Web)"]);
        assert_eq!(find_style(&styles, "Heading 2").unwrap().name, "Heading2");
        assert_eq!(find_style(&styles, "Normal").unwrap().name, "Normal (Web)");
    }

    #[test]
    fn test_no_match() {
        let styles = sheet(&["Title"]);
        assert!(find_style(&styles, "Heading 3").is_none());
        assert!(find_style(&styles, "Heading 4").is_none());
    }

    #[test]
    fn test_alias_is_one_way() {
        let styles = sheet(&["Heading 1"]);
        assert!(find_style(&styles, "Heading1").is_none());
    }
}
