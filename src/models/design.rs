//! Layout inputs: the typed `LayoutConfig` and the on-disk `Design` document.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{Bead, StitchStyle};

/// Typed layout request handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// User-authored bead sequence
    pub pattern: Vec<Bead>,
    /// Literal word spelled as letter beads ahead of the pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// Weave topology
    pub stitch: StitchStyle,
    /// Requested row count; values below 1 behave as 1
    pub rows: i32,
}

impl LayoutConfig {
    /// Creates a config with no word.
    pub fn new(pattern: Vec<Bead>, stitch: StitchStyle, rows: i32) -> Self {
        Self {
            pattern,
            word: None,
            stitch,
            rows,
        }
    }

    /// Sets the word, treating an empty string as no word.
    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        let word = word.into();
        self.word = (!word.is_empty()).then_some(word);
        self
    }

    /// Row count clamped to at least 1.
    #[must_use]
    pub fn effective_rows(&self) -> usize {
        usize::try_from(self.rows.max(1)).unwrap_or(1)
    }

    /// The word, if present and non-empty.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref().filter(|w| !w.is_empty())
    }
}

/// Design document as produced by the storefront authoring UI.
///
/// The stitch is kept as the free-form product option text and resolved with
/// [`StitchStyle::from_option_text`] when converted to a [`LayoutConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Design {
    /// User-authored bead sequence
    #[serde(default)]
    pub pattern: Vec<Bead>,
    /// Literal word spelled as letter beads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// Product option text for the stitch (e.g. "Brick Stitch Cuff")
    #[serde(default)]
    pub stitch: String,
    /// Requested row count
    #[serde(default = "default_rows")]
    pub rows: i32,
}

/// Designs without a row count are single-row bracelets
fn default_rows() -> i32 {
    1
}

impl Design {
    /// Loads a design document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read design file: {}", path.display()))?;
        serde_json::from_str(&content)
            .context(format!("Failed to parse design file: {}", path.display()))
    }

    /// Resolves the option text and builds the engine request.
    #[must_use]
    pub fn to_layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            pattern: self.pattern.clone(),
            word: self.word.clone().filter(|w| !w.is_empty()),
            stitch: StitchStyle::from_option_text(&self.stitch),
            rows: self.rows,
        }
    }
}
