//! Events emitted while a match is played.
//!
//! Presentation code (sounds, animations, pacing between bot moves) hangs
//! off these. Observers are notified synchronously, right after the state
//! change they describe, and can never feed anything back into the match.

use serde::Serialize;

use super::result::MatchResult;
use crate::core::PlayerId;
use crate::dice::DICE_COUNT;
use crate::scoring::Category;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A player's turn begins.
    TurnStarted { player: PlayerId, turn: u32 },
    /// A finished player was passed over.
    PlayerSkipped { player: PlayerId },
    /// `roll` is 1 or 2.
    Rolled { player: PlayerId, roll: u8, values: [u8; DICE_COUNT] },
    HoldToggled { index: usize, held: bool },
    FlipPhaseStarted { hand_eligible: bool },
    /// `flipped` is false when an earlier flip was undone.
    Flipped { index: usize, value: u8, flipped: bool },
    /// Candidates are ready; `must_kill` when none of them is open.
    SelectionOpened { open: usize, must_kill: bool },
    Scored { player: PlayerId, category: Category, points: u32 },
    Killed { player: PlayerId, category: Category },
    /// Five equal dice on the first roll without flips.
    Sleeping { player: PlayerId, face: u8 },
    MatchOver { result: MatchResult },
}

/// Receives every event of a match.
pub trait MatchObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> MatchObserver for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}
