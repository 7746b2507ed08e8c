//! Read-only snapshot for rendering.

use serde::Serialize;

use super::result::MatchResult;
use crate::core::PlayerId;
use crate::dice::DICE_COUNT;
use crate::rules::TurnPhase;
use crate::scoring::{Availability, Candidate, Category, Scorecard};

/// A detected candidate and whether the current player may take it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CandidateView {
    pub candidate: Candidate,
    pub availability: Availability,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub is_bot: bool,
    pub scorecard: Scorecard,
    pub total: u32,
    pub finished: bool,
}

/// Everything the presentation layer needs to draw the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchView {
    pub players: Vec<PlayerView>,
    pub current_player: PlayerId,
    pub phase: TurnPhase,
    pub dice: [u8; DICE_COUNT],
    pub held: [bool; DICE_COUNT],
    pub flipped: [bool; DICE_COUNT],
    pub roll_count: u8,
    pub flip_count: u8,
    pub hand_eligible: bool,
    /// Filled once the flips are confirmed.
    pub candidates: Vec<CandidateView>,
    /// Categories that may be killed; only non-empty when no candidate is open.
    pub kill_options: Vec<Category>,
    /// Best combination on the dice, shown during the flip phase.
    pub summary: Option<String>,
    pub result: Option<MatchResult>,
}
