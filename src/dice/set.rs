use serde::{Deserialize, Serialize};

use super::{opposite_face, sorted, DICE_COUNT, MAX_FLIPS};
use crate::core::{DiceSource, GameError};

/// What a call to `DiceSet::flip` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The die was turned to its opposite face.
    Flipped,
    /// The die was already flipped and has been turned back.
    Unflipped,
}

/// The five dice of the current turn.
///
/// `held` marks dice kept out of the second roll; `flipped` marks dice
/// turned this turn. At most `MAX_FLIPS` dice are flipped at any time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    values: [u8; DICE_COUNT],
    held: [bool; DICE_COUNT],
    flipped: [bool; DICE_COUNT],
    flip_count: u8,
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::from_values([6; DICE_COUNT])
    }
}

impl DiceSet {
    /// Dice showing the given faces, nothing held or flipped.
    ///
    /// Faces outside `1..=6` are clamped.
    #[must_use]
    pub fn from_values(values: [u8; DICE_COUNT]) -> Self {
        Self {
            values: values.map(|v| v.clamp(1, 6)),
            held: [false; DICE_COUNT],
            flipped: [false; DICE_COUNT],
            flip_count: 0,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[u8; DICE_COUNT] {
        &self.values
    }

    #[must_use]
    pub fn sorted(&self) -> [u8; DICE_COUNT] {
        sorted(&self.values)
    }

    #[must_use]
    pub fn held(&self) -> &[bool; DICE_COUNT] {
        &self.held
    }

    #[must_use]
    pub fn flipped(&self) -> &[bool; DICE_COUNT] {
        &self.flipped
    }

    #[must_use]
    pub fn flip_count(&self) -> u8 {
        self.flip_count
    }

    /// Roll all five dice, releasing every hold.
    pub fn roll_all(&mut self, source: &mut dyn DiceSource) {
        self.held = [false; DICE_COUNT];
        for value in &mut self.values {
            *value = source.roll_die();
        }
    }

    /// Roll only the dice that are not held.
    pub fn roll_unheld(&mut self, source: &mut dyn DiceSource) {
        for (value, held) in self.values.iter_mut().zip(self.held) {
            if !held {
                *value = source.roll_die();
            }
        }
    }

    /// Toggle the hold mark on a die. Returns the new mark.
    pub fn toggle_hold(&mut self, index: usize) -> Result<bool, GameError> {
        let held = self
            .held
            .get_mut(index)
            .ok_or(GameError::DieIndexOutOfRange(index))?;
        *held = !*held;
        Ok(*held)
    }

    /// Release every hold.
    pub fn clear_holds(&mut self) {
        self.held = [false; DICE_COUNT];
    }

    /// Flip a die to its opposite face, or undo an earlier flip of it.
    ///
    /// Undoing is always allowed. A new flip is rejected once two dice are
    /// flipped.
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, GameError> {
        if index >= DICE_COUNT {
            return Err(GameError::DieIndexOutOfRange(index));
        }

        if self.flipped[index] {
            self.values[index] = opposite_face(self.values[index]);
            self.flipped[index] = false;
            self.flip_count -= 1;
            return Ok(FlipOutcome::Unflipped);
        }

        if self.flip_count >= MAX_FLIPS {
            return Err(GameError::FlipLimitExceeded);
        }

        self.values[index] = opposite_face(self.values[index]);
        self.flipped[index] = true;
        self.flip_count += 1;
        Ok(FlipOutcome::Flipped)
    }

    /// Forget flip marks and reset the counter. Face values are kept.
    pub fn reset_flips(&mut self) {
        self.flipped = [false; DICE_COUNT];
        self.flip_count = 0;
    }

    /// Whether `flip(index)` would currently succeed.
    #[must_use]
    pub fn can_flip(&self, index: usize) -> bool {
        index < DICE_COUNT && (self.flipped[index] || self.flip_count < MAX_FLIPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;

    #[test]
    fn test_roll_all_clears_holds() {
        let mut dice = DiceSet::default();
        dice.toggle_hold(1).unwrap();
        dice.toggle_hold(3).unwrap();

        dice.roll_all(&mut ScriptedDice::new([1, 2, 3, 4, 5]));

        assert_eq!(dice.values(), &[1, 2, 3, 4, 5]);
        assert_eq!(dice.held(), &[false; 5]);
    }

    #[test]
    fn test_roll_unheld_keeps_held_values() {
        let mut dice = DiceSet::from_values([3, 3, 1, 3, 2]);
        dice.toggle_hold(0).unwrap();
        dice.toggle_hold(1).unwrap();
        dice.toggle_hold(3).unwrap();

        let mut source = ScriptedDice::new([6, 5]);
        dice.roll_unheld(&mut source);

        assert_eq!(dice.values(), &[3, 3, 6, 3, 5]);
        assert_eq!(source.drawn(), 2);
    }

    #[test]
    fn test_toggle_hold_out_of_range() {
        let mut dice = DiceSet::default();
        assert_eq!(dice.toggle_hold(5), Err(GameError::DieIndexOutOfRange(5)));
        assert_eq!(dice.toggle_hold(2), Ok(true));
        assert_eq!(dice.toggle_hold(2), Ok(false));
    }

    #[test]
    fn test_flip_limit_and_reversal() {
        let mut dice = DiceSet::from_values([1, 2, 3, 4, 5]);

        assert_eq!(dice.flip(0), Ok(FlipOutcome::Flipped));
        assert_eq!(dice.flip(1), Ok(FlipOutcome::Flipped));
        assert_eq!(dice.values(), &[6, 5, 3, 4, 5]);
        assert_eq!(dice.flip_count(), 2);

        // A third, new flip is rejected without touching anything.
        assert_eq!(dice.flip(2), Err(GameError::FlipLimitExceeded));
        assert_eq!(dice.values(), &[6, 5, 3, 4, 5]);
        assert!(!dice.can_flip(2));
        assert!(dice.can_flip(0));

        // Re-flipping an already flipped die undoes it.
        assert_eq!(dice.flip(0), Ok(FlipOutcome::Unflipped));
        assert_eq!(dice.values(), &[1, 5, 3, 4, 5]);
        assert_eq!(dice.flip_count(), 1);
        assert_eq!(dice.flipped(), &[false, true, false, false, false]);

        assert_eq!(dice.flip(2), Ok(FlipOutcome::Flipped));
        assert_eq!(dice.values(), &[1, 5, 4, 4, 5]);
    }

    #[test]
    fn test_reset_flips_keeps_values() {
        let mut dice = DiceSet::from_values([1, 1, 1, 1, 1]);
        dice.flip(4).unwrap();
        dice.reset_flips();

        assert_eq!(dice.values(), &[1, 1, 1, 1, 6]);
        assert_eq!(dice.flip_count(), 0);
        assert_eq!(dice.flipped(), &[false; 5]);
    }

    #[test]
    fn test_from_values_clamps() {
        let dice = DiceSet::from_values([0, 7, 3, 3, 3]);
        assert_eq!(dice.values(), &[1, 6, 3, 3, 3]);
        assert_eq!(dice.sorted(), [1, 3, 3, 3, 6]);
    }
}
