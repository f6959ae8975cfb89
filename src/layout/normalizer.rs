//! Expands a pattern and optional word into the circular sequence every
//! stitch strategy tiles around the ring.

use crate::models::{Bead, NEUTRAL_COLOR};

/// Builds the normalized sequence.
///
/// The word becomes one neutral letter bead per character, placed ahead of the
/// pattern. A non-empty result shorter than `min_len` is padded with whole
/// copies of the original pattern, or with neutral pony beads when only a word
/// was given. The result is either empty or at least `min_len` long.
#[must_use]
pub fn normalize(pattern: &[Bead], word: Option<&str>, min_len: usize) -> Vec<Bead> {
    let mut sequence: Vec<Bead> = word
        .unwrap_or_default()
        .chars()
        .map(Bead::letter)
        .collect();
    sequence.extend_from_slice(pattern);

    if sequence.is_empty() {
        return sequence;
    }

    if pattern.is_empty() {
        let filler = Bead::pony(NEUTRAL_COLOR);
        while sequence.len() < min_len {
            sequence.push(filler.clone());
        }
    } else {
        while sequence.len() < min_len {
            sequence.extend_from_slice(pattern);
        }
    }

    sequence
}
