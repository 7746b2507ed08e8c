//! Error taxonomy for rejected actions.
//!
//! Every error leaves the match untouched: the caller can inspect it and
//! try something else. None of them end the match.

use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;
use crate::rules::TurnPhase;
use crate::scoring::Category;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The action is not legal in the current turn phase.
    #[error("{action} is not allowed during {phase}")]
    InvalidTransition { action: Action, phase: TurnPhase },

    /// The target slot is already filled (or grande already has two entries).
    #[error("{0} is not open")]
    CategoryUnavailable(Category),

    /// A third die was flipped in the same turn.
    #[error("flip limit reached: at most two dice per turn")]
    FlipLimitExceeded,

    /// Selection requested with nothing left to score or kill.
    #[error("{0} has no open category left")]
    NoOpenCategory(PlayerId),

    #[error("die index {0} out of range")]
    DieIndexOutOfRange(usize),

    #[error("the match is already over")]
    MatchFinished,

    #[error("player count must be between 1 and 8, got {0}")]
    InvalidPlayerCount(usize),

    /// A stored scorecard with more grande entries than the row holds.
    #[error("grande holds at most 2 entries, got {0}")]
    GrandeOverflow(usize),
}
