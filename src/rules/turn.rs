//! Turn state machine.
//!
//! ```text
//! AwaitingFirstRoll --roll first--> AfterFirstRoll
//! AfterFirstRoll --roll second--> FlipPhase        (loses the hand bonus)
//! AfterFirstRoll --end turn early--> FlipPhase     (keeps the hand bonus)
//! FlipPhase --confirm--> AwaitingSelection
//! ```
//!
//! Recording the selection and moving to the next player is the match's
//! job; it calls `reset` once the turn is complete.

use serde::{Deserialize, Serialize};

use crate::core::{Action, DiceSource, GameError};
use crate::dice::{DiceSet, FlipOutcome};

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    AwaitingFirstRoll,
    AfterFirstRoll,
    /// Entered after the second roll or after ending early.
    FlipPhase,
    AwaitingSelection,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TurnPhase::AwaitingFirstRoll => "awaiting first roll",
            TurnPhase::AfterFirstRoll => "after first roll",
            TurnPhase::FlipPhase => "flip phase",
            TurnPhase::AwaitingSelection => "awaiting selection",
        })
    }
}

/// Dice and counters of the turn in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    phase: TurnPhase,
    dice: DiceSet,
    roll_count: u8,
}

impl TurnState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    #[must_use]
    pub fn roll_count(&self) -> u8 {
        self.roll_count
    }

    #[must_use]
    pub fn flip_count(&self) -> u8 {
        self.dice.flip_count()
    }

    /// One roll and no flips so far: specials score their "de mano" value.
    #[must_use]
    pub fn hand_eligible(&self) -> bool {
        self.roll_count == 1 && self.dice.flip_count() == 0
    }

    /// Reject `action` unless the turn is in `phase`.
    pub fn ensure(&self, action: Action, phase: TurnPhase) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::InvalidTransition {
                action,
                phase: self.phase,
            })
        }
    }

    pub fn roll_first(&mut self, source: &mut dyn DiceSource) -> Result<(), GameError> {
        self.ensure(Action::RollFirst, TurnPhase::AwaitingFirstRoll)?;
        self.dice.reset_flips();
        self.dice.roll_all(source);
        self.roll_count = 1;
        self.phase = TurnPhase::AfterFirstRoll;
        Ok(())
    }

    /// Returns the new hold mark of the die.
    pub fn toggle_hold(&mut self, index: usize) -> Result<bool, GameError> {
        self.ensure(Action::ToggleHold(index), TurnPhase::AfterFirstRoll)?;
        self.dice.toggle_hold(index)
    }

    pub fn roll_second(&mut self, source: &mut dyn DiceSource) -> Result<(), GameError> {
        self.ensure(Action::RollSecond, TurnPhase::AfterFirstRoll)?;
        self.dice.roll_unheld(source);
        self.roll_count = 2;
        self.enter_flip_phase();
        Ok(())
    }

    pub fn end_turn_early(&mut self) -> Result<(), GameError> {
        self.ensure(Action::EndTurnEarly, TurnPhase::AfterFirstRoll)?;
        self.enter_flip_phase();
        Ok(())
    }

    fn enter_flip_phase(&mut self) {
        self.dice.reset_flips();
        self.phase = TurnPhase::FlipPhase;
    }

    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, GameError> {
        self.ensure(Action::Flip(index), TurnPhase::FlipPhase)?;
        self.dice.flip(index)
    }

    pub fn confirm_flips(&mut self) -> Result<(), GameError> {
        self.ensure(Action::ConfirmFlips, TurnPhase::FlipPhase)?;
        self.phase = TurnPhase::AwaitingSelection;
        Ok(())
    }

    /// Ready the table for the next player.
    pub fn reset(&mut self) {
        self.phase = TurnPhase::AwaitingFirstRoll;
        self.roll_count = 0;
        self.dice.clear_holds();
        self.dice.reset_flips();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;

    #[test]
    fn test_two_roll_turn() {
        let mut turn = TurnState::new();
        let mut source = ScriptedDice::new([2, 2, 5, 1, 2, 2, 6]);

        turn.roll_first(&mut source).unwrap();
        assert_eq!(turn.phase(), TurnPhase::AfterFirstRoll);
        assert!(turn.hand_eligible());

        turn.toggle_hold(0).unwrap();
        turn.toggle_hold(1).unwrap();
        turn.toggle_hold(4).unwrap();
        turn.roll_second(&mut source).unwrap();

        assert_eq!(turn.phase(), TurnPhase::FlipPhase);
        assert_eq!(turn.roll_count(), 2);
        assert_eq!(turn.dice().values(), &[2, 2, 2, 6, 2]);
        assert!(!turn.hand_eligible());

        turn.flip(3).unwrap();
        turn.confirm_flips().unwrap();
        assert_eq!(turn.phase(), TurnPhase::AwaitingSelection);
        assert_eq!(turn.dice().values(), &[2, 2, 2, 1, 2]);
    }

    #[test]
    fn test_end_turn_early_keeps_hand_bonus() {
        let mut turn = TurnState::new();
        turn.roll_first(&mut ScriptedDice::new([4])).unwrap();
        turn.end_turn_early().unwrap();

        assert_eq!(turn.phase(), TurnPhase::FlipPhase);
        assert!(turn.hand_eligible());

        // A flip costs the bonus; undoing it restores it.
        turn.flip(0).unwrap();
        assert!(!turn.hand_eligible());
        turn.flip(0).unwrap();
        assert!(turn.hand_eligible());
    }

    #[test]
    fn test_actions_outside_their_phase_are_rejected() {
        let mut turn = TurnState::new();
        let mut source = ScriptedDice::new([3]);

        assert_eq!(
            turn.flip(0),
            Err(GameError::InvalidTransition {
                action: Action::Flip(0),
                phase: TurnPhase::AwaitingFirstRoll
            })
        );
        assert!(turn.roll_second(&mut source).is_err());
        assert!(turn.toggle_hold(1).is_err());

        turn.roll_first(&mut source).unwrap();
        assert!(turn.roll_first(&mut source).is_err());
        assert!(turn.flip(0).is_err(), "flipping needs the flip phase");
        assert!(turn.confirm_flips().is_err());

        turn.end_turn_early().unwrap();
        assert!(turn.toggle_hold(0).is_err(), "holds are over once flipping starts");
        assert_eq!(turn.roll_count(), 1);
    }

    #[test]
    fn test_flip_phase_resets_marks() {
        let mut turn = TurnState::new();
        let mut source = ScriptedDice::new([1, 2, 3, 4, 5]);
        turn.roll_first(&mut source).unwrap();
        turn.roll_second(&mut source).unwrap();
        turn.flip(0).unwrap();
        turn.flip(1).unwrap();
        turn.confirm_flips().unwrap();

        turn.reset();
        assert_eq!(turn.phase(), TurnPhase::AwaitingFirstRoll);
        assert_eq!(turn.flip_count(), 0);
        assert_eq!(turn.roll_count(), 0);
        assert_eq!(turn.dice().flipped(), &[false; 5]);
    }
}
