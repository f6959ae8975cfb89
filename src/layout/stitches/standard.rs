//! Single, ladder, flat (brick) and peyote (multi) stitches.
//!
//! All four stack `rows` copies of the sequence around the same ring:
//!
//! - ladder, flat and peyote shift the source index by the row index, which
//!   gives the diagonal brick continuity across rows
//! - flat offsets odd rows by half a bead
//! - peyote raises odd beads by half a row
//! - single is one loose strand per row, with a string guide each

use std::f32::consts::{FRAC_PI_2, TAU};

use super::{Placement, StrategyInput, StrategyOutput};
use crate::layout::jitter::JitterSource;
use crate::models::{BeadRole, StitchStyle, StringGuide, Vec3};

/// Lays out a standard-family stitch.
pub fn layout(
    stitch: StitchStyle,
    input: &StrategyInput<'_>,
    jitter: &mut dyn JitterSource,
) -> StrategyOutput {
    let len = input.sequence.len();
    let rows = input.rows;
    let spacing = input.tuning.row_spacing_for(stitch);
    let tilt = if matches!(stitch, StitchStyle::Ladder | StitchStyle::Flat) {
        FRAC_PI_2
    } else {
        0.0
    };

    let mut beads = Vec::with_capacity(rows * len);
    let mut strings = Vec::new();

    for row in 0..rows {
        let z = -((rows - 1) as f32 * spacing) / 2.0 + row as f32 * spacing;
        let row_shift = if stitch == StitchStyle::Flat && row % 2 == 1 {
            0.5
        } else {
            0.0
        };

        for i in 0..len {
            let source = if stitch == StitchStyle::Single {
                i % len
            } else {
                (i + row) % len
            };
            let angle = (i as f32 + row_shift) / len as f32 * TAU;
            let z_offset = if stitch == StitchStyle::Peyote && i % 2 == 1 {
                spacing / 2.0
            } else {
                0.0
            };

            beads.push(input.place(
                &input.sequence[source],
                Placement {
                    role: BeadRole::Pattern,
                    group: row * len + i,
                    position: Vec3::on_ring(input.radius, angle, z + z_offset),
                    rotation_z: angle,
                    jitter: jitter.sample(input.tuning.jitter_amplitude),
                    tilt,
                },
            ));
        }

        if stitch == StitchStyle::Single {
            strings.push(StringGuide {
                z,
                radius: input.radius,
            });
        }
    }

    StrategyOutput {
        beads,
        strings,
        radius: input.radius,
    }
}
