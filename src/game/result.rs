//! How a match ends and who won.

use serde::Serialize;

use crate::core::{PlayerId, PlayerMap};
use super::player::Player;

/// How a match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MatchResult {
    /// Someone rolled sleeping and won on the spot.
    Sleeping { winner: PlayerId },
    /// Every card is complete; the highest total wins.
    ///
    /// On a tie the earliest seat wins; the others sharing the top total
    /// are listed in `tied_with`.
    HighestTotal {
        winner: PlayerId,
        total: u32,
        tied_with: Vec<PlayerId>,
    },
}

impl MatchResult {
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match self {
            MatchResult::Sleeping { winner } | MatchResult::HighestTotal { winner, .. } => *winner,
        }
    }

    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == player
    }

    /// Score every completed card and pick the winner.
    ///
    /// Returns `None` for an empty table.
    #[must_use]
    pub fn by_total(players: &PlayerMap<Player>) -> Option<Self> {
        let mut best: Option<(PlayerId, u32)> = None;
        for (id, player) in players.iter() {
            if best.map_or(true, |(_, total)| player.total() > total) {
                best = Some((id, player.total()));
            }
        }

        let (winner, total) = best?;
        let tied_with = players
            .iter()
            .filter(|(id, p)| *id != winner && p.total() == total)
            .map(|(id, _)| id)
            .collect();

        Some(MatchResult::HighestTotal {
            winner,
            total,
            tied_with,
        })
    }
}
