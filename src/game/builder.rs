//! Fluent construction of a `Match`.

use super::controller::Match;
use super::event::MatchObserver;
use crate::bot::BotPolicy;
use crate::core::{DiceSource, GameError, MatchConfig, SeatConfig};

/// Builder for creating a `Match`.
///
/// Seats are added in turn order. Nothing is validated until `build`.
pub struct MatchBuilder {
    config: MatchConfig,
    dice_source: Option<Box<dyn DiceSource>>,
    observer: Option<Box<dyn MatchObserver>>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::from_config(MatchConfig::with_humans(0))
    }
}

impl MatchBuilder {
    /// No seats yet, default seed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: MatchConfig) -> Self {
        Self {
            config,
            dice_source: None,
            observer: None,
        }
    }

    /// Replace the seats with `count` humans.
    pub fn player_count(mut self, count: usize) -> Self {
        self.config.seats = MatchConfig::with_humans(count).seats;
        self
    }

    /// Replace the seats with one human and one bot.
    pub fn versus_bot(mut self, policy: BotPolicy) -> Self {
        self.config.seats = MatchConfig::versus_bot(policy).seats;
        self
    }

    pub fn human(mut self, name: impl Into<String>) -> Self {
        self.config.seats.push(SeatConfig::human(name));
        self
    }

    pub fn bot(mut self, name: impl Into<String>, policy: BotPolicy) -> Self {
        self.config.seats.push(SeatConfig::bot(name, policy));
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Roll from `source` instead of the seeded stream.
    pub fn dice_source(mut self, source: impl DiceSource + 'static) -> Self {
        self.dice_source = Some(Box::new(source));
        self
    }

    pub fn observer(mut self, observer: impl MatchObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn build(self) -> Result<Match, GameError> {
        Match::from_parts(self.config, self.dice_source, self.observer)
    }
}
