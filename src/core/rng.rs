//! Deterministic randomness for dice rolls and bot decisions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls and bot choices
//! - **Context streams**: Dice and bots draw from independent sequences, so
//!   swapping the dice source never perturbs bot behavior
//! - **Injectable**: Die rolls go through the `DiceSource` trait; tests plug
//!   in `ScriptedDice` to force exact outcomes
//!
//! ```
//! use cacho::core::{DiceSource, GameRng, ScriptedDice};
//!
//! let rng = GameRng::new(42);
//! let mut dice = rng.for_context("dice");
//! let face = dice.roll_die();
//! assert!((1..=6).contains(&face));
//!
//! let mut forced = ScriptedDice::new([6, 6, 6, 6, 6]);
//! assert_eq!(forced.roll_die(), 6);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Anything that can produce a die face in `1..=6`.
pub trait DiceSource {
    /// Draw the next face.
    fn roll_die(&mut self) -> u8;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given inclusive range.
    pub fn gen_range_usize(&mut self, range: std::ops::RangeInclusive<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Pick `count` distinct indices out of `0..len`, in random order.
    pub fn sample_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        self.shuffle(&mut indices);
        indices.truncate(count.min(len));
        indices
    }
}

impl DiceSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }
}

/// Replays a fixed sequence of faces, cycling when exhausted.
///
/// Faces outside `1..=6` are clamped into range.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a script. An empty script rolls sixes.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: Vec<u8> = faces.into_iter().map(|f| f.clamp(1, 6)).collect();
        Self {
            faces: if faces.is_empty() { vec![6] } else { faces },
            cursor: 0,
        }
    }

    /// Number of faces drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_rolls_in_range() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];
        for _ in 0..600 {
            let face = rng.roll_die();
            assert!((1..=6).contains(&face));
            seen[face as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s), "every face should appear");
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let mut dice = rng.for_context("dice");
        let mut bots = rng.for_context("bots");

        let seq1: Vec<_> = (0..20).map(|_| dice.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| bots.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let mut ctx1 = GameRng::new(42).for_context("dice");
        let mut ctx2 = GameRng::new(42).for_context("dice");

        for _ in 0..10 {
            assert_eq!(ctx1.roll_die(), ctx2.roll_die());
        }
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut rng = GameRng::new(3);
        for count in 0..=5 {
            let mut picked = rng.sample_indices(5, count);
            assert_eq!(picked.len(), count);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), count);
            assert!(picked.iter().all(|&i| i < 5));
        }
        assert_eq!(rng.sample_indices(5, 9).len(), 5);
    }

    #[test]
    fn test_choose_picks_from_slice() {
        let mut rng = GameRng::new(42);
        let open = ["Balas", "Quinas", "Full"];
        for _ in 0..20 {
            let picked = rng.choose(&open).copied();
            assert!(picked.is_some_and(|name| open.contains(&name)));
        }
        assert_eq!(rng.choose::<&str>(&[]), None);
    }

    #[test]
    fn test_context_keeps_parent_seed_separate() {
        let rng = GameRng::new(42);
        let bots = rng.for_context("bots");
        assert_eq!(rng.seed(), 42);
        assert_ne!(bots.seed(), 42);
    }

    #[test]
    fn test_scripted_dice_cycles() {
        let mut dice = ScriptedDice::new([1, 2, 3]);
        let drawn: Vec<_> = (0..7).map(|_| dice.roll_die()).collect();
        assert_eq!(drawn, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(dice.drawn(), 7);
    }

    #[test]
    fn test_scripted_dice_clamps_and_defaults() {
        let mut dice = ScriptedDice::new([0, 9]);
        assert_eq!(dice.roll_die(), 1);
        assert_eq!(dice.roll_die(), 6);

        let mut empty = ScriptedDice::new(Vec::new());
        assert_eq!(empty.roll_die(), 6);
    }
}
