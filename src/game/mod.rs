//! Match glue: seats, turn order, events, bots and the end of the game.
//!
//! `Match` is the only place game state changes. Build one with
//! `MatchBuilder` (or `Match::new` from a `MatchConfig`), then feed it
//! actions for human seats and call `run_bots` in between.

pub mod builder;
pub mod controller;
pub mod event;
pub mod player;
pub mod result;
pub mod view;

pub use builder::MatchBuilder;
pub use controller::Match;
pub use event::{GameEvent, MatchObserver};
pub use player::Player;
pub use result::MatchResult;
pub use view::{CandidateView, MatchView, PlayerView};
