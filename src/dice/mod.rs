//! Five six-sided dice with hold and flip marks.
//!
//! Faces are plain `u8` values in `1..=6`. Opposite faces of a physical die
//! always sum to 7, which is what a flip uses.

mod set;

pub use set::{DiceSet, FlipOutcome};

/// Number of dice in play.
pub const DICE_COUNT: usize = 5;

/// Flips allowed per turn.
pub const MAX_FLIPS: u8 = 2;

/// The face on the other side of the die.
#[must_use]
pub const fn opposite_face(face: u8) -> u8 {
    7 - face
}

/// Occurrences of each face, indexed by face (slot 0 unused).
#[must_use]
pub fn face_counts(values: &[u8; DICE_COUNT]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for &v in values {
        counts[v as usize] += 1;
    }
    counts
}

/// Copy of the dice sorted ascending.
#[must_use]
pub fn sorted(values: &[u8; DICE_COUNT]) -> [u8; DICE_COUNT] {
    let mut out = *values;
    out.sort_unstable();
    out
}
