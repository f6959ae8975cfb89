//! Stitch layout strategies, one per stitch family.
//!
//! Each strategy maps the normalized sequence onto placed beads. [`run`] is the
//! single dispatch point from a [`StitchStyle`] to its strategy.

pub mod flower;
pub mod standard;
pub mod xbase;

use super::jitter::JitterSource;
use super::tuning::LayoutTuning;
use crate::models::{
    Bead, BeadCatalog, BeadRole, PlacedBead, StitchStyle, StringGuide, Vec3, NEUTRAL_COLOR,
};

/// What a strategy produces.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyOutput {
    /// Placed beads
    pub beads: Vec<PlacedBead>,
    /// Thread guides
    pub strings: Vec<StringGuide>,
    /// Radius the beads were placed on
    pub radius: f32,
}

/// Shared inputs of every strategy.
#[derive(Debug, Clone, Copy)]
pub struct StrategyInput<'a> {
    /// Normalized, non-empty sequence
    pub sequence: &'a [Bead],
    /// Row count, at least 1
    pub rows: usize,
    /// Ring radius the strategy places beads on
    pub radius: f32,
    /// Bead tables
    pub catalog: &'a BeadCatalog,
    /// Numeric constants
    pub tuning: &'a LayoutTuning,
}

/// Position and orientation of a bead about to be placed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement {
    pub role: BeadRole,
    pub group: usize,
    pub position: Vec3,
    pub rotation_z: f32,
    pub jitter: Vec3,
    pub tilt: f32,
}

impl StrategyInput<'_> {
    /// Resolves a source bead against the catalog at a placement.
    pub(crate) fn place(&self, bead: &Bead, at: Placement) -> PlacedBead {
        PlacedBead {
            kind: bead.kind,
            color: bead.color.clone(),
            letter: bead.glyph(),
            display_color: self.catalog.color_of(&bead.color),
            luminous: self.catalog.is_luminous(&bead.color),
            role: at.role,
            group: at.group,
            position: at.position,
            rotation_z: at.rotation_z,
            jitter: at.jitter,
            tilt: at.tilt,
        }
    }

    /// Places a plain neutral pony bead.
    pub(crate) fn place_neutral(&self, at: Placement) -> PlacedBead {
        self.place(&Bead::pony(NEUTRAL_COLOR), at)
    }
}

/// Runs the strategy for `stitch`.
pub fn run(
    stitch: StitchStyle,
    input: &StrategyInput<'_>,
    jitter: &mut dyn JitterSource,
) -> StrategyOutput {
    match stitch {
        StitchStyle::Single | StitchStyle::Ladder | StitchStyle::Flat | StitchStyle::Peyote => {
            standard::layout(stitch, input, jitter)
        }
        StitchStyle::XBase => xbase::layout(input),
        StitchStyle::Flower => flower::layout(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::jitter::NoJitter;

    #[test]
    fn test_run_dispatches_by_family() {
        let catalog = BeadCatalog::load().unwrap();
        let tuning = LayoutTuning::default();
        let sequence: Vec<Bead> = (0..18).map(|_| Bead::pony("pink")).collect();
        let input = StrategyInput {
            sequence: &sequence,
            rows: 2,
            radius: 3.0,
            catalog: &catalog,
            tuning: &tuning,
        };

        let count = |stitch| run(stitch, &input, &mut NoJitter).beads.len();
        assert_eq!(count(StitchStyle::Ladder), 2 * 18);
        assert_eq!(count(StitchStyle::Peyote), 2 * 18);
        assert_eq!(count(StitchStyle::XBase), 18 * (6 * 2 + 3));
        assert_eq!(count(StitchStyle::Flower), 7 * 18);
        assert_eq!(run(StitchStyle::Single, &input, &mut NoJitter).strings.len(), 2);
    }
}
