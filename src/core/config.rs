//! Match configuration.
//!
//! A match is configured once, before the first roll:
//! - `SeatConfig`: who sits at each seat (name, optional bot tier)
//! - `MatchConfig`: the seats in turn order plus the RNG seed
//!
//! Both are serde types so a whole table can be loaded from JSON.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::bot::BotPolicy;

/// Largest table supported.
pub const MAX_PLAYERS: usize = 8;

/// Configuration for a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name.
    pub name: String,

    /// Bot tier playing this seat. `None` for a human.
    #[serde(default)]
    pub bot: Option<BotPolicy>,
}

impl SeatConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bot: None,
        }
    }

    pub fn bot(name: impl Into<String>, policy: BotPolicy) -> Self {
        Self {
            name: name.into(),
            bot: Some(policy),
        }
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.bot.is_some()
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seats in turn order.
    pub seats: Vec<SeatConfig>,

    /// Seed for the dice and bot RNG streams.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    42
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::with_humans(2)
    }
}

impl MatchConfig {
    /// `count` human seats named "Jugador 1", "Jugador 2", ...
    #[must_use]
    pub fn with_humans(count: usize) -> Self {
        Self {
            seats: (1..=count)
                .map(|i| SeatConfig::human(format!("Jugador {i}")))
                .collect(),
            seed: default_seed(),
        }
    }

    /// One human against one bot of the given tier.
    #[must_use]
    pub fn versus_bot(policy: BotPolicy) -> Self {
        Self {
            seats: vec![
                SeatConfig::human("Jugador 1"),
                SeatConfig::bot(format!("Bot ({policy})"), policy),
            ],
            seed: default_seed(),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Check the seat count is playable.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.seats.is_empty() || self.seats.len() > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount(self.seats.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_humans_names() {
        let config = MatchConfig::with_humans(3);
        let names: Vec<_> = config.seats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Jugador 1", "Jugador 2", "Jugador 3"]);
        assert!(config.seats.iter().all(|s| !s.is_bot()));
    }

    #[test]
    fn test_versus_bot() {
        let config = MatchConfig::versus_bot(BotPolicy::Hard);
        assert_eq!(config.player_count(), 2);
        assert!(!config.seats[0].is_bot());
        assert_eq!(config.seats[1].bot, Some(BotPolicy::Hard));
    }

    #[test]
    fn test_validate_player_count() {
        assert!(MatchConfig::with_humans(1).validate().is_ok());
        assert!(MatchConfig::with_humans(8).validate().is_ok());
        assert_eq!(
            MatchConfig::with_humans(0).validate(),
            Err(GameError::InvalidPlayerCount(0))
        );
        assert_eq!(
            MatchConfig::with_humans(9).validate(),
            Err(GameError::InvalidPlayerCount(9))
        );
    }

    #[test]
    fn test_json_round_trip_and_defaults() {
        let config = MatchConfig::versus_bot(BotPolicy::Medium).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);

        let sparse: MatchConfig =
            serde_json::from_str(r#"{"seats":[{"name":"Ana"},{"name":"Bot","bot":"easy"}]}"#)
                .unwrap();
        assert_eq!(sparse.seed, 42);
        assert_eq!(sparse.seats[1].bot, Some(BotPolicy::Easy));
    }
}
