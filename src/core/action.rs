//! Player intents and the action history.
//!
//! An `Action` is everything a human (through the presentation layer) or a
//! bot can ask the match to do. The match validates it against the current
//! turn phase and either applies it or rejects it unchanged.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::scoring::Category;

/// A single intent accepted by the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll all five dice to open the turn.
    RollFirst,
    /// Keep or release a die before the second roll.
    ToggleHold(usize),
    /// Roll every die that is not held.
    RollSecond,
    /// Skip the second roll and go straight to flipping.
    EndTurnEarly,
    /// Turn a die to its opposite face, or undo that flip.
    Flip(usize),
    /// Done flipping: evaluate the dice.
    ConfirmFlips,
    /// Score (or kill) a category.
    Choose(Category),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::RollFirst => write!(f, "first roll"),
            Action::ToggleHold(i) => write!(f, "hold die {}", i + 1),
            Action::RollSecond => write!(f, "second roll"),
            Action::EndTurnEarly => write!(f, "end turn early"),
            Action::Flip(i) => write!(f, "flip die {}", i + 1),
            Action::ConfirmFlips => write!(f, "confirm flips"),
            Action::Choose(category) => write!(f, "choose {category}"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
