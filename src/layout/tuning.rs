//! Tunable constants for the layout strategies.
//!
//! These values were tuned by eye until bracelets looked balanced; none of them
//! carries meaning beyond that. They live in configuration (`[layout]` in
//! `config.toml`) so they can be adjusted without touching the strategies.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::StitchStyle;

/// Packing multiplier applied to the bead circumference, per stitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchMultipliers {
    /// Single strand
    pub single: f32,
    /// Ladder stitch
    pub ladder: f32,
    /// Flat/brick stitch
    pub flat: f32,
    /// Peyote/multi stitch
    pub peyote: f32,
    /// Flower stitch, for direct `solve_radius` calls; flower layouts size the
    /// ring with `flower_nesting` instead
    pub flower: f32,
    /// X-Base stitch, widest since frames sit around every center bead
    pub x_base: f32,
}

impl Default for StitchMultipliers {
    fn default() -> Self {
        Self {
            single: 1.0,
            ladder: 1.0,
            flat: 1.0,
            peyote: 0.85,
            flower: 0.6,
            x_base: 1.6,
        }
    }
}

impl StitchMultipliers {
    /// Multiplier for a stitch.
    #[must_use]
    pub const fn get(&self, stitch: StitchStyle) -> f32 {
        match stitch {
            StitchStyle::Single => self.single,
            StitchStyle::Ladder => self.ladder,
            StitchStyle::Flat => self.flat,
            StitchStyle::Peyote => self.peyote,
            StitchStyle::Flower => self.flower,
            StitchStyle::XBase => self.x_base,
        }
    }
}

/// Every numeric constant the engine uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTuning {
    /// Shortest normalized sequence
    pub min_sequence_len: usize,
    /// Radius reported for an empty design
    pub empty_radius: f32,
    /// Radius floor
    pub min_radius: f32,
    /// Spacing added to every bead width on the circumference
    pub bead_gap: f32,
    /// Circumference multipliers
    pub multipliers: StitchMultipliers,
    /// Flower circumference factor (flowers interlock tighter than the generic multiplier)
    pub flower_nesting: f32,
    /// Row spacing for ladder, flat and peyote
    pub row_spacing: f32,
    /// Row spacing for single strands
    pub single_row_spacing: f32,
    /// X-Base row height
    pub x_base_row_height: f32,
    /// Angular offset of X-Base frame beads from their center, in radians
    pub x_base_frame_angle: f32,
    /// Vertical offset of X-Base frame beads from their center
    pub x_base_frame_offset_z: f32,
    /// Distance of X-Base rim beads beyond the row edge
    pub x_base_rim_offset_z: f32,
    /// Half-distance between the two beads of a flower petal column
    pub flower_petal_offset_z: f32,
    /// Distance of the outer center-column beads from the flower center
    pub flower_center_offset_z: f32,
    /// Maximum jitter rotation per axis, in radians
    pub jitter_amplitude: f32,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            min_sequence_len: 18,
            empty_radius: 2.8,
            min_radius: 1.0,
            bead_gap: 0.1,
            multipliers: StitchMultipliers::default(),
            flower_nesting: 0.55,
            row_spacing: 1.1,
            single_row_spacing: 1.6,
            x_base_row_height: 2.2,
            x_base_frame_angle: 0.06,
            x_base_frame_offset_z: 0.45,
            x_base_rim_offset_z: 0.45,
            flower_petal_offset_z: 0.4,
            flower_center_offset_z: 0.8,
            jitter_amplitude: 0.12,
        }
    }
}

impl LayoutTuning {
    /// Row spacing of a standard-family stitch.
    #[must_use]
    pub fn row_spacing_for(&self, stitch: StitchStyle) -> f32 {
        if stitch == StitchStyle::Single {
            self.single_row_spacing
        } else {
            self.row_spacing
        }
    }

    /// Rejects values that would collapse or invert the layout.
    pub fn validate(&self) -> Result<()> {
        if self.min_sequence_len == 0 {
            anyhow::bail!("layout.min_sequence_len must be at least 1");
        }

        let positive = [
            ("layout.empty_radius", self.empty_radius),
            ("layout.min_radius", self.min_radius),
            ("layout.flower_nesting", self.flower_nesting),
            ("layout.row_spacing", self.row_spacing),
            ("layout.single_row_spacing", self.single_row_spacing),
            ("layout.x_base_row_height", self.x_base_row_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                anyhow::bail!("{name} must be positive, got {value}");
            }
        }

        for stitch in StitchStyle::ALL {
            let value = self.multipliers.get(stitch);
            if !(value.is_finite() && value > 0.0) {
                anyhow::bail!("layout.multipliers.{stitch} must be positive, got {value}");
            }
        }

        let non_negative = [
            ("layout.bead_gap", self.bead_gap),
            ("layout.x_base_frame_angle", self.x_base_frame_angle),
            ("layout.x_base_frame_offset_z", self.x_base_frame_offset_z),
            ("layout.x_base_rim_offset_z", self.x_base_rim_offset_z),
            ("layout.flower_petal_offset_z", self.flower_petal_offset_z),
            ("layout.flower_center_offset_z", self.flower_center_offset_z),
            ("layout.jitter_amplitude", self.jitter_amplitude),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                anyhow::bail!("{name} must not be negative, got {value}");
            }
        }

        Ok(())
    }
}
