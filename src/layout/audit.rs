//! Data-quality checks on a layout request.
//!
//! The engine lays out anything it is given; the audit reports what it had to
//! paper over so callers can surface it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{BeadCatalog, Design, LayoutConfig, StitchStyle};

/// Category of a quality warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Color token not in the catalog; rendered with the fallback color
    UnknownColor,
    /// Letter bead without a letter; rendered blank
    MissingLetter,
    /// Non-letter bead carrying a letter; the letter is dropped
    UnexpectedLetter,
    /// Row count below 1; treated as 1
    RowsClamped,
    /// Stitch option text matched no keyword; laid out as ladder
    UnrecognizedStitch,
    /// Nothing to lay out
    EmptyDesign,
}

impl WarningKind {
    /// Whether the engine substituted something for the authored value.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        !matches!(self, Self::EmptyDesign)
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UnknownColor => "unknown_color",
            Self::MissingLetter => "missing_letter",
            Self::UnexpectedLetter => "unexpected_letter",
            Self::RowsClamped => "rows_clamped",
            Self::UnrecognizedStitch => "unrecognized_stitch",
            Self::EmptyDesign => "empty_design",
        };
        write!(f, "{name}")
    }
}

/// One data-quality finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityWarning {
    /// Category
    pub kind: WarningKind,
    /// Human-readable description
    pub message: String,
    /// Pattern index the warning refers to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl QualityWarning {
    fn at(kind: WarningKind, index: usize, message: String) -> Self {
        Self {
            kind,
            message,
            index: Some(index),
        }
    }

    fn global(kind: WarningKind, message: String) -> Self {
        Self {
            kind,
            message,
            index: None,
        }
    }
}

/// Collects every quality warning for `config`, in pattern order.
#[must_use]
pub fn audit_design(config: &LayoutConfig, catalog: &BeadCatalog) -> Vec<QualityWarning> {
    let mut warnings = Vec::new();

    if config.pattern.is_empty() && config.word().is_none() {
        warnings.push(QualityWarning::global(
            WarningKind::EmptyDesign,
            "Design has no beads and no word".to_string(),
        ));
    }

    if config.rows < 1 {
        warnings.push(QualityWarning::global(
            WarningKind::RowsClamped,
            format!("Row count {} is below 1, using 1", config.rows),
        ));
    }

    for (index, bead) in config.pattern.iter().enumerate() {
        if !catalog.has_color(&bead.color) {
            warnings.push(QualityWarning::at(
                WarningKind::UnknownColor,
                index,
                format!(
                    "Bead {index}: unknown color '{}', rendered as {}",
                    bead.color, catalog.fallback_color
                ),
            ));
        }

        if bead.is_well_formed() {
            continue;
        }
        let warning = match bead.letter {
            None => QualityWarning::at(
                WarningKind::MissingLetter,
                index,
                format!("Bead {index}: letter bead has no letter, rendered blank"),
            ),
            Some(letter) => QualityWarning::at(
                WarningKind::UnexpectedLetter,
                index,
                format!(
                    "Bead {index}: {} bead carries letter '{letter}', ignored",
                    bead.kind
                ),
            ),
        };
        warnings.push(warning);
    }

    warnings
}

/// Audits a design document, including its free-form stitch text.
#[must_use]
pub fn audit_document(design: &Design, catalog: &BeadCatalog) -> Vec<QualityWarning> {
    let mut warnings = Vec::new();
    if StitchStyle::match_option_text(&design.stitch).is_none() {
        warnings.push(QualityWarning::global(
            WarningKind::UnrecognizedStitch,
            format!(
                "Stitch '{}' not recognized, using {}",
                design.stitch,
                StitchStyle::Ladder
            ),
        ));
    }
    warnings.extend(audit_design(&design.to_layout_config(), catalog));
    warnings
}
