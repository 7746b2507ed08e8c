//! # cacho
//!
//! Rules engine for Cacho, the Bolivian five-dice game.
//!
//! ## Turn
//!
//! A player rolls all five dice, may hold some and roll the rest once more,
//! then may flip up to two dice to their opposite face. The result is
//! written into one row of the player's scorecard: a special (straight,
//! full, poker, grande) or a number row (balas through cenas). When nothing
//! the dice show is still open, a row must be killed for zero.
//!
//! Specials made on the first roll without flips are "de mano" and score
//! more. Five equal dice de mano is "dormida" (sleeping) and wins outright.
//!
//! ## Modules
//!
//! - `core`: player ids, actions, errors, RNG and configuration
//! - `dice`: the five dice with hold and flip marks
//! - `scoring`: categories, the combination detector and scorecards
//! - `rules`: the per-turn state machine
//! - `bot`: the three bot tiers
//! - `game`: the match controller, events and results

pub mod core;
pub mod dice;
pub mod scoring;
pub mod rules;
pub mod bot;
pub mod game;

pub use crate::core::{
    Action, ActionRecord, DiceSource, GameError, GameRng, MatchConfig, PlayerId, PlayerMap,
    ScriptedDice, SeatConfig, MAX_PLAYERS,
};

pub use crate::dice::{DiceSet, FlipOutcome, DICE_COUNT, MAX_FLIPS};

pub use crate::scoring::{
    best_candidate, detect_all, Availability, Candidate, Category, CombinationKind, Points,
    Scorecard, Slot,
};

pub use crate::rules::{TurnPhase, TurnState};

pub use crate::bot::{BotPolicy, DecisionPolicy, Selection};

pub use crate::game::{
    GameEvent, Match, MatchBuilder, MatchObserver, MatchResult, MatchView, Player,
};
