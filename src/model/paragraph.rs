//! Paragraph and run types.

use super::RgbColor;
use serde::{Deserialize, Serialize};

/// A paragraph, as far as table analysis reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Id of the paragraph style (`w:pStyle`)
    pub style_id: Option<String>,

    /// Text runs
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph from runs.
    pub fn with_runs(runs: Vec<Run>) -> Self {
        Self {
            style_id: None,
            runs,
        }
    }

    /// Set the paragraph style id and return self.
    pub fn styled(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = Some(style_id.into());
        self
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A run of text with direct formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Explicit bold toggle (`w:b`)
    pub bold: Option<bool>,

    /// Explicit color (`w:color`)
    pub color: Option<RgbColor>,
}

impl Run {
    /// Create a plain run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create an explicitly bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: Some(true),
            color: None,
        }
    }

    /// Set the run color and return self.
    pub fn colored(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Check if the run is explicitly bold.
    pub fn is_bold(&self) -> bool {
        self.bold == Some(true)
    }
}
