//! Bead value types: shape, color token and optional letter glyph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color token every plain structural bead uses (letters, padding, petals, frames).
pub const NEUTRAL_COLOR: &str = "white";

/// Bead shape as sold in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeadType {
    /// Standard barrel pony bead
    Pony,
    /// Star-shaped bead
    Star,
    /// Heart-shaped bead
    Heart,
    /// Skull-shaped bead
    Skull,
    /// Flower-shaped bead
    Flower,
    /// Cube bead printed with a single letter
    Letter,
}

impl BeadType {
    /// All bead types, in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Pony,
        Self::Star,
        Self::Heart,
        Self::Skull,
        Self::Flower,
        Self::Letter,
    ];

    /// Lower-case name used in design files and catalog tables.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pony => "pony",
            Self::Star => "star",
            Self::Heart => "heart",
            Self::Skull => "skull",
            Self::Flower => "flower",
            Self::Letter => "letter",
        }
    }
}

impl fmt::Display for BeadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BeadType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown bead type '{s}'"))
    }
}

/// Base mesh a renderer should use for a bead type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryClass {
    /// Short cylinder with a through hole
    Barrel,
    /// Five-point star
    Star,
    /// Heart
    Heart,
    /// Skull
    Skull,
    /// Five-petal flower
    Flower,
    /// Cube with a printable face
    Cube,
}

/// A single bead in a user-authored pattern.
///
/// A `Letter` bead is expected to carry exactly one letter and other types none.
/// Violations are tolerated by the engine and reported by the design audit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bead {
    /// Bead shape
    #[serde(rename = "type")]
    pub kind: BeadType,
    /// Symbolic color token, resolved through the catalog
    pub color: String,
    /// Letter glyph for `Letter` beads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
}

impl Bead {
    /// Creates a non-letter bead.
    pub fn new(kind: BeadType, color: impl Into<String>) -> Self {
        Self {
            kind,
            color: color.into(),
            letter: None,
        }
    }

    /// Creates a pony bead in the given color.
    pub fn pony(color: impl Into<String>) -> Self {
        Self::new(BeadType::Pony, color)
    }

    /// Creates a neutral letter bead.
    #[must_use]
    pub fn letter(letter: char) -> Self {
        Self {
            kind: BeadType::Letter,
            color: NEUTRAL_COLOR.to_string(),
            letter: Some(letter),
        }
    }

    /// Glyph to print on the bead; empty for a `Letter` bead missing its letter.
    #[must_use]
    pub fn glyph(&self) -> Option<char> {
        match self.kind {
            BeadType::Letter => self.letter,
            _ => None,
        }
    }

    /// Whether the letter field agrees with the bead type.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match self.kind {
            BeadType::Letter => self.letter.is_some(),
            _ => self.letter.is_none(),
        }
    }
}
