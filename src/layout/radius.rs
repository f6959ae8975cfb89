//! Ring radius from bead widths.

use std::f32::consts::TAU;

use super::stitches::flower::COLUMNS_PER_UNIT;
use super::tuning::LayoutTuning;
use crate::models::{Bead, BeadCatalog, BeadType, StitchStyle};

/// Sum of bead widths plus one gap per bead.
#[must_use]
pub fn total_width(sequence: &[Bead], catalog: &BeadCatalog, gap: f32) -> f32 {
    sequence
        .iter()
        .map(|bead| catalog.width_of(bead.kind) + gap)
        .sum()
}

/// Radius of the ring holding `sequence` for a stitch.
///
/// `max(total_width * multiplier / 2π, min_radius)`.
#[must_use]
pub fn solve_radius(
    sequence: &[Bead],
    stitch: StitchStyle,
    catalog: &BeadCatalog,
    tuning: &LayoutTuning,
) -> f32 {
    let circumference = total_width(sequence, catalog, tuning.bead_gap);
    (circumference * tuning.multipliers.get(stitch) / TAU).max(tuning.min_radius)
}

/// Radius of a flower band with `columns` columns.
///
/// Flower columns are pony-wide regardless of the source bead, and the band
/// nests tighter than the generic solver assumes.
#[must_use]
pub fn flower_radius(columns: usize, catalog: &BeadCatalog, tuning: &LayoutTuning) -> f32 {
    let column_width = catalog.width_of(BeadType::Pony) + tuning.bead_gap;
    (columns as f32 * column_width * tuning.flower_nesting / TAU).max(tuning.min_radius)
}

/// Radius a stitch lays `sequence` out on.
///
/// Flower bands are sized by column count; every other stitch uses
/// [`solve_radius`].
#[must_use]
pub fn ring_radius(
    sequence: &[Bead],
    stitch: StitchStyle,
    catalog: &BeadCatalog,
    tuning: &LayoutTuning,
) -> f32 {
    match stitch {
        StitchStyle::Flower => flower_radius(sequence.len() * COLUMNS_PER_UNIT, catalog, tuning),
        _ => solve_radius(sequence, stitch, catalog, tuning),
    }
}
