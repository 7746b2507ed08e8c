//! A seat at the table with its scorecard.

use serde::Serialize;

use crate::bot::BotPolicy;
use crate::core::SeatConfig;
use crate::scoring::Scorecard;

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub scorecard: Scorecard,
    /// `None` for humans.
    pub bot: Option<BotPolicy>,
}

impl Player {
    #[must_use]
    pub fn from_seat(seat: &SeatConfig) -> Self {
        Self {
            name: seat.name.clone(),
            scorecard: Scorecard::new(),
            bot: seat.bot,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.scorecard.total()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.scorecard.is_finished()
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.bot.is_some()
    }
}
