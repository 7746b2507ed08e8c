//! Core types: seats, actions, errors, RNG, configuration.
//!
//! Everything here is game-state free; the dice, scoring and turn modules
//! build on top of it.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{DiceSource, GameRng, ScriptedDice};
pub use config::{MatchConfig, SeatConfig, MAX_PLAYERS};
pub use action::{Action, ActionRecord};
pub use error::GameError;
