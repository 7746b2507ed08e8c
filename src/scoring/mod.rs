//! Combination detection and scorecards.
//!
//! The detector turns five dice into a list of `Candidate`s; the scorecard
//! records whichever one the player picks.

pub mod category;
pub mod combination;
pub mod scorecard;

pub use category::{die_name, Category};
pub use combination::{best_candidate, detect_all, Candidate, Candidates, CombinationKind, Points};
pub use scorecard::{Availability, Scorecard, Slot, GRANDE_SLOTS};
