//! Computer opponents.
//!
//! - `policy`: the `DecisionPolicy` trait and the three `BotPolicy` tiers
//! - `heuristic`: hand valuation and the two-flip search used by the hard tier

pub mod heuristic;
pub mod policy;

pub use heuristic::{best_flip, evaluate_dice_value, flip_subsets, lookahead_value, FlipSet};
pub use policy::{kill_fallback, BotPolicy, DecisionPolicy, Selection};
