//! Bead catalog: color, width and geometry lookup tables.
//!
//! The tables are data, not code. The default catalog is embedded from
//! `data/bead_catalog.json`; a host can load its own file without touching the
//! layout strategies, as long as every bead type keeps a positive width.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::{BeadType, GeometryClass, RgbColor, NEUTRAL_COLOR};

/// Per-type physical properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Lateral width along the ring
    pub width: f32,
    /// Base mesh class
    pub geometry: GeometryClass,
}

/// Per-token display properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Display color
    pub hex: RgbColor,
    /// Neon/glow beads, rendered emissive downstream
    #[serde(default)]
    pub luminous: bool,
}

/// Lookup tables for bead types and color tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeadCatalog {
    /// Display color for unknown tokens
    #[serde(default)]
    pub fallback_color: RgbColor,
    /// Width for types missing from `types`
    pub default_width: f32,
    /// Bead type table
    pub types: BTreeMap<BeadType, TypeEntry>,
    /// Color token table, keyed by lower-case token
    pub colors: BTreeMap<String, ColorEntry>,
}

/// Normalizes a color token for lookup.
fn token_key(token: &str) -> String {
    token.trim().to_lowercase()
}

impl BeadCatalog {
    /// Loads the catalog embedded in the binary.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("../data/bead_catalog.json");
        Self::from_json_str(json_data).context("Failed to parse embedded bead catalog")
    }

    /// Parses and validates a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut catalog: Self = serde_json::from_str(json)?;
        catalog.colors = catalog
            .colors
            .into_iter()
            .map(|(token, entry)| (token_key(&token), entry))
            .collect();
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a host-supplied catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read bead catalog: {}", path.display()))?;
        Self::from_json_str(&content)
            .context(format!("Failed to parse bead catalog: {}", path.display()))
    }

    /// Catalog with no tables, only the fallbacks.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            fallback_color: RgbColor::default(),
            default_width: 1.0,
            types: BTreeMap::new(),
            colors: BTreeMap::new(),
        }
    }

    /// Checks the invariants layout math relies on.
    ///
    /// - every width (including the default) is positive and finite
    /// - the neutral token used for structural beads resolves
    pub fn validate(&self) -> Result<()> {
        if !(self.default_width.is_finite() && self.default_width > 0.0) {
            anyhow::bail!(
                "Bead catalog default width must be positive, got {}",
                self.default_width
            );
        }

        for (kind, entry) in &self.types {
            if !(entry.width.is_finite() && entry.width > 0.0) {
                anyhow::bail!(
                    "Bead catalog width for '{kind}' must be positive, got {}",
                    entry.width
                );
            }
        }

        if !self.has_color(NEUTRAL_COLOR) {
            anyhow::bail!("Bead catalog is missing the neutral color '{NEUTRAL_COLOR}'");
        }

        Ok(())
    }

    /// Lateral width of a bead type.
    #[must_use]
    pub fn width_of(&self, kind: BeadType) -> f32 {
        self.types
            .get(&kind)
            .map_or(self.default_width, |entry| entry.width)
    }

    /// Base mesh class of a bead type.
    #[must_use]
    pub fn geometry_of(&self, kind: BeadType) -> GeometryClass {
        self.types.get(&kind).map_or_else(
            || match kind {
                BeadType::Pony => GeometryClass::Barrel,
                BeadType::Star => GeometryClass::Star,
                BeadType::Heart => GeometryClass::Heart,
                BeadType::Skull => GeometryClass::Skull,
                BeadType::Flower => GeometryClass::Flower,
                BeadType::Letter => GeometryClass::Cube,
            },
            |entry| entry.geometry,
        )
    }

    /// Whether a token has its own entry.
    #[must_use]
    pub fn has_color(&self, token: &str) -> bool {
        self.colors.contains_key(&token_key(token))
    }

    /// Display color of a token, or the fallback gray.
    #[must_use]
    pub fn color_of(&self, token: &str) -> RgbColor {
        self.colors
            .get(&token_key(token))
            .map_or(self.fallback_color, |entry| entry.hex)
    }

    /// Whether a token is a neon/glow color.
    #[must_use]
    pub fn is_luminous(&self, token: &str) -> bool {
        self.colors
            .get(&token_key(token))
            .is_some_and(|entry| entry.luminous)
    }
}

impl Default for BeadCatalog {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self::minimal())
    }
}
