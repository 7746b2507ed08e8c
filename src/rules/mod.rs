//! Turn rules.
//!
//! `TurnState` owns the dice and counters of the turn in progress and only
//! accepts actions that are legal in its current phase. It knows nothing
//! about players or scorecards; the match controller wires those in.

pub mod turn;

pub use turn::{TurnPhase, TurnState};
