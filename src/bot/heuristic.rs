//! Hand evaluation used by the hard tier.
//!
//! `evaluate_dice_value` ranks a hand on a fixed scale that is independent
//! of the scorecard; `best_flip` searches every way of flipping up to two
//! dice and keeps the strictly best one.

use smallvec::SmallVec;

use crate::dice::{face_counts, opposite_face, DICE_COUNT};

/// Indices of dice to flip, at most two.
pub type FlipSet = SmallVec<[usize; 2]>;

pub const GRANDE_VALUE: u32 = 1000;
pub const POKER_VALUE: u32 = 500;
pub const FULL_VALUE: u32 = 400;
pub const STRAIGHT_VALUE: u32 = 300;
pub const TRIPLE_VALUE: u32 = 150;

/// Fixed heuristic value of a hand.
///
/// Grande 1000, poker 500, full 400, straight 300, three of a kind 150,
/// a pair 50 + 10 × its face (the higher pair when there are two),
/// otherwise the sum of the faces.
#[must_use]
pub fn evaluate_dice_value(dice: &[u8; DICE_COUNT]) -> u32 {
    let counts = face_counts(dice);
    let max_count = counts.iter().copied().max().unwrap_or(0);
    let distinct = counts.iter().filter(|&&c| c > 0).count();

    match max_count {
        5 => GRANDE_VALUE,
        4 => POKER_VALUE,
        3 if distinct == 2 => FULL_VALUE,
        3 => TRIPLE_VALUE,
        _ if is_straight(&counts) => STRAIGHT_VALUE,
        2 => {
            let pair = (1..=6u32).rev().find(|&f| counts[f as usize] >= 2).unwrap_or(0);
            50 + 10 * pair
        }
        _ => dice.iter().map(|&v| u32::from(v)).sum(),
    }
}

fn is_straight(counts: &[u8; 7]) -> bool {
    let low = (1..=5).all(|f| counts[f] == 1);
    let high = (2..=6).all(|f| counts[f] == 1);
    low || high
}

/// Every flip set of size 0, 1 and 2, in search order: no flip, single
/// flips by index, then pairs in lexicographic order. 16 in total.
pub fn flip_subsets() -> impl Iterator<Item = FlipSet> {
    let none = std::iter::once(FlipSet::new());
    let singles = (0..DICE_COUNT).map(|i| FlipSet::from_slice(&[i]));
    let pairs = (0..DICE_COUNT)
        .flat_map(|i| (i + 1..DICE_COUNT).map(move |j| FlipSet::from_slice(&[i, j])));
    none.chain(singles).chain(pairs)
}

/// The hand after flipping the given dice.
#[must_use]
pub fn apply_flips(dice: &[u8; DICE_COUNT], flips: &[usize]) -> [u8; DICE_COUNT] {
    let mut out = *dice;
    for &i in flips {
        out[i] = opposite_face(out[i]);
    }
    out
}

/// Flip set with the strictly highest value; the first one found wins ties.
#[must_use]
pub fn best_flip(dice: &[u8; DICE_COUNT]) -> (FlipSet, u32) {
    let mut best = (FlipSet::new(), evaluate_dice_value(dice));
    for flips in flip_subsets().skip(1) {
        let value = evaluate_dice_value(&apply_flips(dice, &flips));
        if value > best.1 {
            best = (flips, value);
        }
    }
    best
}

/// Best value reachable from `dice` with up to two flips.
#[must_use]
pub fn lookahead_value(dice: &[u8; DICE_COUNT]) -> u32 {
    best_flip(dice).1
}

/// Hold mask for chasing a straight.
///
/// Compares the runs 1-5 and 2-6 and keeps one die per face of the run with
/// more faces already showing; the high run wins a tie. `None` unless at
/// least four faces of the run are present.
#[must_use]
pub fn straight_draw(dice: &[u8; DICE_COUNT]) -> Option<[bool; DICE_COUNT]> {
    let counts = face_counts(dice);
    let matched = |run: std::ops::RangeInclusive<usize>| run.filter(|&f| counts[f] > 0).count();

    let low = matched(1..=5);
    let high = matched(2..=6);
    let (run, found) = if high >= low { (2..=6u8, high) } else { (1..=5u8, low) };
    if found < 4 {
        return None;
    }

    let mut mask = [false; DICE_COUNT];
    for face in run {
        if let Some(i) = dice.iter().position(|&v| v == face) {
            mask[i] = true;
        }
    }
    Some(mask)
}

/// A face worth keeping: already high, or high once flipped.
#[must_use]
pub fn is_high_face(face: u8) -> bool {
    face >= 5 || opposite_face(face) >= 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_table() {
        assert_eq!(evaluate_dice_value(&[2, 2, 2, 2, 2]), 1000);
        assert_eq!(evaluate_dice_value(&[4, 4, 4, 4, 1]), 500);
        assert_eq!(evaluate_dice_value(&[3, 3, 6, 6, 6]), 400);
        assert_eq!(evaluate_dice_value(&[2, 4, 3, 6, 5]), 300);
        assert_eq!(evaluate_dice_value(&[5, 5, 5, 1, 2]), 150);
        assert_eq!(evaluate_dice_value(&[1, 1, 3, 3, 5]), 80);
        assert_eq!(evaluate_dice_value(&[1, 2, 3, 4, 6]), 16);
    }

    #[test]
    fn test_flip_subsets_order() {
        let subsets: Vec<FlipSet> = flip_subsets().collect();
        assert_eq!(subsets.len(), 16);
        assert!(subsets[0].is_empty());
        assert_eq!(subsets[1].as_slice(), &[0]);
        assert_eq!(subsets[5].as_slice(), &[4]);
        assert_eq!(subsets[6].as_slice(), &[0, 1]);
        assert_eq!(subsets[15].as_slice(), &[3, 4]);
    }

    #[test]
    fn test_best_flip_prefers_no_flip_on_ties() {
        // Flipping the 1 only makes another poker, so nothing beats no flip.
        let (flips, value) = best_flip(&[4, 4, 4, 4, 1]);
        assert!(flips.is_empty());
        assert_eq!(value, 500);
    }

    #[test]
    fn test_best_flip_completes_grande() {
        let (flips, value) = best_flip(&[6, 6, 1, 6, 6]);
        assert_eq!(flips.as_slice(), &[2]);
        assert_eq!(value, 1000);

        let (flips, value) = best_flip(&[2, 5, 5, 2, 5]);
        assert_eq!(flips.as_slice(), &[0, 3]);
        assert_eq!(value, 1000);
    }

    #[test]
    fn test_straight_draw() {
        // 1,2,4,5,6: both runs have four faces, the high run is kept.
        let mask = straight_draw(&[1, 2, 4, 5, 6]).unwrap();
        assert_eq!(mask, [false, true, true, true, true]);

        let mask = straight_draw(&[1, 2, 3, 3, 4]).unwrap();
        assert_eq!(mask, [true, true, true, false, true]);

        assert_eq!(straight_draw(&[1, 1, 3, 3, 6]), None);
    }

    #[test]
    fn test_high_faces() {
        let high: Vec<u8> = (1..=6).filter(|&f| is_high_face(f)).collect();
        assert_eq!(high, vec![1, 2, 5, 6]);
    }
}
