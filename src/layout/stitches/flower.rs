//! Flower stitch: each pattern bead becomes a three-column flower unit.
//!
//! Petal columns hold two neutral beads, the center column three; only the
//! middle bead of the center column shows the pattern bead. Flowers form a
//! single band, so the row count is ignored. The ring radius comes from the
//! column count (see [`crate::layout::radius::ring_radius`]).

use std::f32::consts::TAU;

use super::{Placement, StrategyInput, StrategyOutput};
use crate::models::{BeadRole, Vec3};

/// Columns per flower unit: left petal, center, right petal.
pub const COLUMNS_PER_UNIT: usize = 3;

/// Beads per flower unit.
pub const BEADS_PER_UNIT: usize = 7;

/// Lays out the flower stitch.
pub fn layout(input: &StrategyInput<'_>) -> StrategyOutput {
    let len = input.sequence.len();
    let tuning = input.tuning;
    let total_columns = len * COLUMNS_PER_UNIT;
    let radius = input.radius;

    let mut beads = Vec::with_capacity(len * BEADS_PER_UNIT);

    for column in 0..total_columns {
        let angle = column as f32 / total_columns as f32 * TAU;
        let unit = column / COLUMNS_PER_UNIT;
        let source = &input.sequence[unit % len];

        let at = |role, z| Placement {
            role,
            group: unit,
            position: Vec3::on_ring(radius, angle, z),
            rotation_z: angle,
            jitter: Vec3::ZERO,
            tilt: 0.0,
        };

        if column % COLUMNS_PER_UNIT == 1 {
            let offset = tuning.flower_center_offset_z;
            beads.push(input.place_neutral(at(BeadRole::Petal, -offset)));
            beads.push(input.place(source, at(BeadRole::Pattern, 0.0)));
            beads.push(input.place_neutral(at(BeadRole::Petal, offset)));
        } else {
            let offset = tuning.flower_petal_offset_z;
            beads.push(input.place_neutral(at(BeadRole::Petal, -offset)));
            beads.push(input.place_neutral(at(BeadRole::Petal, offset)));
        }
    }

    StrategyOutput {
        beads,
        strings: Vec::new(),
        radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::radius::{flower_radius, ring_radius};
    use crate::layout::tuning::LayoutTuning;
    use crate::models::StitchStyle;
    use crate::models::{Bead, BeadCatalog, BeadType, NEUTRAL_COLOR};

    fn run(sequence: &[Bead], rows: usize) -> StrategyOutput {
        let catalog = BeadCatalog::load().unwrap();
        let tuning = LayoutTuning::default();
        let input = StrategyInput {
            sequence,
            rows,
            radius: ring_radius(sequence, StitchStyle::Flower, &catalog, &tuning),
            catalog: &catalog,
            tuning: &tuning,
        };
        layout(&input)
    }

    fn colors(len: usize) -> Vec<Bead> {
        (0..len).map(|i| Bead::new(BeadType::Heart, format!("c{i}"))).collect()
    }

    #[test]
    fn test_seven_beads_per_unit() {
        let output = run(&colors(18), 1);
        assert_eq!(output.beads.len(), 18 * BEADS_PER_UNIT);
        for unit in 0..18 {
            assert_eq!(output.beads.iter().filter(|b| b.group == unit).count(), 7);
        }
    }

    #[test]
    fn test_exactly_one_colored_center_per_unit() {
        let sequence = colors(18);
        let output = run(&sequence, 1);

        for (unit, source) in sequence.iter().enumerate() {
            let members: Vec<_> = output.beads.iter().filter(|b| b.group == unit).collect();
            let showing: Vec<_> = members.iter().filter(|b| b.shows(source)).collect();
            assert_eq!(showing.len(), 1);
            assert_eq!(showing[0].role, BeadRole::Pattern);
            assert!(showing[0].position.z.abs() < f32::EPSILON);

            let neutral = members
                .iter()
                .filter(|b| b.color == NEUTRAL_COLOR && b.kind == BeadType::Pony)
                .count();
            assert_eq!(neutral, 6);
        }
    }

    #[test]
    fn test_letter_center_keeps_glyph() {
        let mut sequence = colors(18);
        sequence[3] = Bead::letter('Z');
        let output = run(&sequence, 1);
        let center = output
            .beads
            .iter()
            .find(|b| b.group == 3 && b.role == BeadRole::Pattern)
            .unwrap();
        assert_eq!(center.letter, Some('Z'));
        assert_eq!(output.beads.iter().filter(|b| b.letter.is_some()).count(), 1);
    }

    #[test]
    fn test_rows_ignored() {
        assert_eq!(run(&colors(18), 1), run(&colors(18), 5));
    }

    #[test]
    fn test_sized_by_columns() {
        let catalog = BeadCatalog::load().unwrap();
        let tuning = LayoutTuning::default();
        let output = run(&colors(18), 1);
        assert!((output.radius - flower_radius(54, &catalog, &tuning)).abs() < f32::EPSILON);
        assert!(output
            .beads
            .iter()
            .all(|b| (b.position.x.hypot(b.position.y) - output.radius).abs() < 1e-4));
    }

    #[test]
    fn test_center_column_angle() {
        let output = run(&colors(18), 1);
        let center = output
            .beads
            .iter()
            .find(|b| b.group == 0 && b.role == BeadRole::Pattern)
            .unwrap();
        assert!((center.rotation_z - 1.0 / 54.0 * TAU).abs() < 1e-6);
    }
}
