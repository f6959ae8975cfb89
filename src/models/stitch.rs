//! Stitch styles and the adapter from storefront option text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weave topology that decides how beads are arranged around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StitchStyle {
    /// One loose strand repeated per row
    #[serde(rename = "single")]
    Single,
    /// Interlocked rows, each phase-shifted by one bead
    #[default]
    #[serde(rename = "ladder")]
    Ladder,
    /// Brick stitch: ladder with odd rows offset by half a bead
    #[serde(rename = "flat")]
    Flat,
    /// Multi/peyote: odd beads raised by half a row
    #[serde(rename = "peyote")]
    Peyote,
    /// Band of three-column flower units
    #[serde(rename = "flower")]
    Flower,
    /// Center beads framed by four corner beads in an X
    #[serde(rename = "x-base")]
    XBase,
}

/// Keyword table checked in order; the first keyword found in the option text wins.
const OPTION_KEYWORDS: &[(&str, StitchStyle)] = &[
    ("flower", StitchStyle::Flower),
    ("daisy", StitchStyle::Flower),
    ("x-base", StitchStyle::XBase),
    ("xbase", StitchStyle::XBase),
    ("x base", StitchStyle::XBase),
    ("criss", StitchStyle::XBase),
    ("peyote", StitchStyle::Peyote),
    ("multi", StitchStyle::Peyote),
    ("brick", StitchStyle::Flat),
    ("flat", StitchStyle::Flat),
    ("single", StitchStyle::Single),
    ("simple", StitchStyle::Single),
    ("strand", StitchStyle::Single),
    ("ladder", StitchStyle::Ladder),
];

impl StitchStyle {
    /// All stitch styles.
    pub const ALL: [Self; 6] = [
        Self::Single,
        Self::Ladder,
        Self::Flat,
        Self::Peyote,
        Self::Flower,
        Self::XBase,
    ];

    /// Maps free-form product option text onto a stitch style.
    ///
    /// Matching is a case-insensitive substring search, so copy such as
    /// "3D Multi-Row Cuff" or "Brick Stitch (flat)" resolves without a
    /// controlled vocabulary. Text matching no keyword falls back to `Ladder`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kandi_layout::models::StitchStyle;
    ///
    /// assert_eq!(StitchStyle::from_option_text("Multi-Row Cuff"), StitchStyle::Peyote);
    /// assert_eq!(StitchStyle::from_option_text("Brick stitch"), StitchStyle::Flat);
    /// assert_eq!(StitchStyle::from_option_text("mystery"), StitchStyle::Ladder);
    /// ```
    #[must_use]
    pub fn from_option_text(text: &str) -> Self {
        Self::match_option_text(text).unwrap_or(Self::Ladder)
    }

    /// Like [`from_option_text`](Self::from_option_text), but `None` when no
    /// keyword matches.
    #[must_use]
    pub fn match_option_text(text: &str) -> Option<Self> {
        let text = text.to_lowercase();
        OPTION_KEYWORDS
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|(_, style)| *style)
    }

    /// Canonical lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Ladder => "ladder",
            Self::Flat => "flat",
            Self::Peyote => "peyote",
            Self::Flower => "flower",
            Self::XBase => "x-base",
        }
    }
}

impl fmt::Display for StitchStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
