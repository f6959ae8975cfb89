//! X-Base stitch: every pattern bead sits in an X of four frame beads.
//!
//! Per row and sequence index the strategy places, in order:
//!
//! 1. the center bead carrying the pattern bead
//! 2. four frame beads (top-left, top-right, bottom-left, bottom-right)
//! 3. a connector bead between this center and the next, at the row top
//! 4. on the bottom-most row, a mirrored connector at the row bottom
//! 5. on the top-most row, a rim bead above the center
//! 6. on the bottom-most row, a rim bead below the center
//!
//! The structure is rigid, so no jitter is applied.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use super::{Placement, StrategyInput, StrategyOutput};
use crate::models::{Bead, BeadRole, BeadType, Vec3, NEUTRAL_COLOR};

/// Corner offsets as (angle sign, height sign, tilt).
const FRAME_CORNERS: [(f32, f32, f32); 4] = [
    (-1.0, 1.0, FRAC_PI_4),
    (1.0, 1.0, -FRAC_PI_4),
    (-1.0, -1.0, -FRAC_PI_4),
    (1.0, -1.0, FRAC_PI_4),
];

/// Number of beads X-Base produces for a sequence length and row count.
#[must_use]
pub const fn bead_count(len: usize, rows: usize) -> usize {
    // centers, frames and top connectors per row; bottom connectors; two rims
    len * (rows * 6 + 3)
}

/// Lays out the X-Base stitch.
pub fn layout(input: &StrategyInput<'_>) -> StrategyOutput {
    let len = input.sequence.len();
    let rows = input.rows;
    let tuning = input.tuning;
    let row_height = tuning.x_base_row_height;
    let radius = input.radius;

    let mut beads = Vec::with_capacity(bead_count(len, rows));

    for row in 0..rows {
        let center_z = -(rows as f32 * row_height) / 2.0 + row as f32 * row_height + row_height / 2.0;
        let top_z = center_z + row_height / 2.0;
        let bottom_z = center_z - row_height / 2.0;

        for i in 0..len {
            let source = &input.sequence[i];
            let group = row * len + i;
            let angle = i as f32 / len as f32 * TAU;
            let mid_angle = (i as f32 + 0.5) / len as f32 * TAU;

            let at = |role, angle, z, tilt| Placement {
                role,
                group,
                position: Vec3::on_ring(radius, angle, z),
                rotation_z: angle,
                jitter: Vec3::ZERO,
                tilt,
            };

            beads.push(input.place(source, at(BeadRole::Pattern, angle, center_z, 0.0)));

            // letters stay legible against plain frames
            let frame = if source.kind == BeadType::Letter {
                Bead::pony(NEUTRAL_COLOR)
            } else {
                Bead::pony(source.color.clone())
            };
            for (angle_sign, height_sign, tilt) in FRAME_CORNERS {
                beads.push(input.place(
                    &frame,
                    at(
                        BeadRole::Frame,
                        angle + angle_sign * tuning.x_base_frame_angle,
                        center_z + height_sign * tuning.x_base_frame_offset_z,
                        tilt,
                    ),
                ));
            }

            beads.push(input.place_neutral(at(BeadRole::Connector, mid_angle, top_z, FRAC_PI_2)));
            if row == 0 {
                beads.push(input.place_neutral(at(
                    BeadRole::Connector,
                    mid_angle,
                    bottom_z,
                    FRAC_PI_2,
                )));
            }

            if row == rows - 1 {
                beads.push(input.place_neutral(at(
                    BeadRole::Rim,
                    angle,
                    top_z + tuning.x_base_rim_offset_z,
                    0.0,
                )));
            }
            if row == 0 {
                beads.push(input.place_neutral(at(
                    BeadRole::Rim,
                    angle,
                    bottom_z - tuning.x_base_rim_offset_z,
                    0.0,
                )));
            }
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
    use crate::layout::tuning::LayoutTuning;
    use crate::models::{BeadCatalog, PlacedBead};

    fn run(sequence: &[Bead], rows: usize) -> StrategyOutput {
        let catalog = BeadCatalog::load().unwrap();
        let tuning = LayoutTuning::default();
        let input = StrategyInput {
            sequence,
            rows,
            radius: 5.0,
            catalog: &catalog,
            tuning: &tuning,
        };
        layout(&input)
    }

    fn with_role(output: &StrategyOutput, role: BeadRole) -> Vec<&PlacedBead> {
        output.beads.iter().filter(|b| b.role == role).collect()
    }

    fn colors(len: usize) -> Vec<Bead> {
        (0..len).map(|i| Bead::pony(format!("c{i}"))).collect()
    }

    #[test]
    fn test_closed_form_count() {
        for rows in 1..=4 {
            let output = run(&colors(20), rows);
            assert_eq!(output.beads.len(), bead_count(20, rows));
            assert_eq!(with_role(&output, BeadRole::Pattern).len(), 20 * rows);
            assert_eq!(with_role(&output, BeadRole::Frame).len(), 80 * rows);
            assert_eq!(with_role(&output, BeadRole::Connector).len(), 20 * rows + 20);
            assert_eq!(with_role(&output, BeadRole::Rim).len(), 40);
        }
    }

    #[test]
    fn test_every_center_has_four_frames() {
        let tuning = LayoutTuning::default();
        let output = run(&colors(18), 2);

        for center in with_role(&output, BeadRole::Pattern) {
            let frames: Vec<&PlacedBead> = output
                .beads
                .iter()
                .filter(|b| b.role == BeadRole::Frame && b.group == center.group)
                .collect();
            assert_eq!(frames.len(), 4);

            for frame in frames {
                let d_angle = (frame.rotation_z - center.rotation_z).abs();
                let d_z = (frame.position.z - center.position.z).abs();
                assert!((d_angle - tuning.x_base_frame_angle).abs() < 1e-5);
                assert!((d_z - tuning.x_base_frame_offset_z).abs() < 1e-5);
                assert!((frame.tilt.abs() - FRAC_PI_4).abs() < 1e-6);
                assert_eq!(frame.color, center.color);
            }
        }
    }

    #[test]
    fn test_letter_centers_get_neutral_frames() {
        let mut sequence = colors(18);
        sequence[0] = Bead::letter('K');
        let output = run(&sequence, 1);

        let frames: Vec<&PlacedBead> = output
            .beads
            .iter()
            .filter(|b| b.role == BeadRole::Frame && b.group == 0)
            .collect();
        assert!(frames.iter().all(|b| b.color == NEUTRAL_COLOR && b.letter.is_none()));
        assert_eq!(output.beads[0].letter, Some('K'));
    }

    #[test]
    fn test_rows_are_centered() {
        let output = run(&colors(18), 2);
        let centers = with_role(&output, BeadRole::Pattern);
        assert!((centers[0].position.z + 1.1).abs() < 1e-5);
        assert!((centers[18].position.z - 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_rims_close_top_and_bottom() {
        let output = run(&colors(18), 3);
        let rims = with_role(&output, BeadRole::Rim);
        let top = rims.iter().filter(|b| b.position.z > 0.0).count();
        let bottom = rims.iter().filter(|b| b.position.z < 0.0).count();
        assert_eq!(top, 18);
        assert_eq!(bottom, 18);

        let max_center = with_role(&output, BeadRole::Pattern)
            .iter()
            .map(|b| b.position.z)
            .fold(f32::MIN, f32::max);
        assert!(rims.iter().filter(|b| b.position.z > 0.0).all(|b| b.position.z > max_center));
    }

    #[test]
    fn test_connectors_sit_between_centers() {
        let output = run(&colors(18), 1);
        let connector = output
            .beads
            .iter()
            .find(|b| b.role == BeadRole::Connector && b.group == 0)
            .unwrap();
        assert!((connector.rotation_z - 0.5 / 18.0 * TAU).abs() < 1e-6);
    }

    #[test]
    fn test_no_jitter() {
        let output = run(&colors(18), 2);
        assert!(output.beads.iter().all(|b| b.jitter == Vec3::ZERO));
        assert!(output.strings.is_empty());
    }
}
