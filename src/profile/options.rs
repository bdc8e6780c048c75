//! Profile building options.

/// Styles whose font name and size are exported, with their key prefix.
pub const TARGET_STYLES: &[(&str, &str)] = &[
    ("Normal", "Main"),
    ("Heading 1", "H1"),
    ("Heading 2", "H2"),
    ("Heading 3", "H3"),
];

/// Hex prefixes treated as red when classifying the first-level heading
/// color. Brand reds vary, so this is a prefix match rather than equality.
pub const RED_PREFIXES: &[&str] = &["FF00", "E000", "E020", "D000", "D010", "C000"];

/// Style whose color drives the red-header flag.
pub const HEADING_STYLE: &str = "Heading 1";

/// Style whose paragraph format and color describe body text.
pub const BODY_STYLE: &str = "Normal";

/// A style exported under `font{prefix}` / `fontSize{prefix}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStyle {
    /// Canonical style name
    pub name: String,
    /// Output key suffix
    pub prefix: String,
}

impl TargetStyle {
    /// Create a target.
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
        }
    }
}

/// Options for building a style profile.
#[derive(Debug, Clone)]
pub struct ProfileOptions {
    /// Styles to export fonts for
    pub targets: Vec<TargetStyle>,

    /// Hex prefixes considered red
    pub red_prefixes: Vec<String>,

    /// Whether to infer table conventions
    pub analyze_tables: bool,

    /// Whether to append a per-style listing of every paragraph style
    pub detailed_styles: bool,
}

impl ProfileOptions {
    /// Create new profile options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the target style list.
    pub fn with_targets<N, P>(mut self, targets: impl IntoIterator<Item = (N, P)>) -> Self
    where
        N: Into<String>,
        P: Into<String>,
    {
        self.targets = targets
            .into_iter()
            .map(|(name, prefix)| TargetStyle::new(name, prefix))
            .collect();
        self
    }

    /// Add one target style.
    pub fn with_target(mut self, name: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.targets.push(TargetStyle::new(name, prefix));
        self
    }

    /// Replace the red prefix set.
    pub fn with_red_prefixes<S: Into<String>>(
        mut self,
        prefixes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.red_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable table analysis.
    pub fn with_tables(mut self, analyze: bool) -> Self {
        self.analyze_tables = analyze;
        self
    }

    /// Enable or disable the detailed style listing.
    pub fn with_detailed_styles(mut self, detailed: bool) -> Self {
        self.detailed_styles = detailed;
        self
    }
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            targets: TARGET_STYLES
                .iter()
                .map(|(name, prefix)| TargetStyle::new(*name, *prefix))
                .collect(),
            red_prefixes: RED_PREFIXES.iter().map(|p| p.to_string()).collect(),
            analyze_tables: true,
            detailed_styles: false,
        }
    }
}
