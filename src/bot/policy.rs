//! Bot decision policies.
//!
//! A bot turn asks four questions, always in this order:
//! 1. `reroll`: take the second roll, or go straight to flipping?
//! 2. `hold`: if rerolling, which dice to keep
//! 3. `flips`: which dice (at most two) to turn over
//! 4. `select`: which category to write the result into
//!
//! `BotPolicy` answers them for the three difficulty tiers. Randomized
//! tiers draw from the `GameRng` they are handed, so a seeded match replays
//! identically.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::heuristic::{best_flip, is_high_face, lookahead_value, straight_draw, FlipSet};
use crate::core::GameRng;
use crate::dice::{face_counts, opposite_face, DiceSet, DICE_COUNT};
use crate::scoring::{detect_all, Candidate, Category, Scorecard};

/// The category a bot picked and what it is worth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub category: Category,
    /// Zero for a kill.
    pub points: u32,
}

/// Decisions a bot makes during its turn.
pub trait DecisionPolicy {
    /// Hold mask for the second roll.
    fn hold(&self, dice: &DiceSet, card: &Scorecard, rng: &mut GameRng) -> [bool; DICE_COUNT];

    /// Whether to take the second roll.
    fn reroll(&self, dice: &DiceSet, card: &Scorecard, rng: &mut GameRng) -> bool;

    /// Dice to flip, at most two distinct indices.
    fn flips(&self, dice: &DiceSet, card: &Scorecard, rng: &mut GameRng) -> FlipSet;

    /// Category to record. `None` only when the card has nothing open.
    fn select(&self, candidates: &[Candidate], card: &Scorecard, rng: &mut GameRng) -> Option<Selection>;
}

/// Difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotPolicy {
    /// Plays at random.
    Easy,
    /// Greedy on the current dice.
    Medium,
    /// Looks ahead through flips and weighs categories.
    Hard,
}

impl std::fmt::Display for BotPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BotPolicy::Easy => "easy",
            BotPolicy::Medium => "medium",
            BotPolicy::Hard => "hard",
        })
    }
}

impl std::str::FromStr for BotPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(BotPolicy::Easy),
            "medium" => Ok(BotPolicy::Medium),
            "hard" => Ok(BotPolicy::Hard),
            other => Err(format!("unknown bot tier: {other}")),
        }
    }
}

impl DecisionPolicy for BotPolicy {
    fn hold(&self, dice: &DiceSet, _card: &Scorecard, rng: &mut GameRng) -> [bool; DICE_COUNT] {
        match self {
            BotPolicy::Easy => {
                let count = rng.gen_range_usize(0..=3);
                let mut mask = [false; DICE_COUNT];
                for i in rng.sample_indices(DICE_COUNT, count) {
                    mask[i] = true;
                }
                mask
            }
            BotPolicy::Medium => {
                let (face, count) = most_frequent(dice.values());
                if count >= 2 {
                    dice.values().map(|v| v == face)
                } else {
                    [false; DICE_COUNT]
                }
            }
            BotPolicy::Hard => hard_hold(dice.values()),
        }
    }

    fn reroll(&self, dice: &DiceSet, card: &Scorecard, rng: &mut GameRng) -> bool {
        match self {
            BotPolicy::Easy => rng.gen_bool(0.5),
            BotPolicy::Medium => best_open_value(dice, card) < 35,
            BotPolicy::Hard => {
                let lookahead = lookahead_value(dice.values());
                let best = best_open_value(dice, card);
                if lookahead >= 400 || (best >= 35 && lookahead >= 200) {
                    false
                } else if best < 25 {
                    true
                } else {
                    lookahead < 150
                }
            }
        }
    }

    fn flips(&self, dice: &DiceSet, _card: &Scorecard, rng: &mut GameRng) -> FlipSet {
        match self {
            BotPolicy::Easy => {
                if rng.gen_bool(0.5) {
                    return FlipSet::new();
                }
                let count = rng.gen_range_usize(1..=2);
                rng.sample_indices(DICE_COUNT, count).into_iter().collect()
            }
            BotPolicy::Medium => {
                let mut order: SmallVec<[usize; DICE_COUNT]> = (0..DICE_COUNT).collect();
                order.sort_by_key(|&i| (dice.values()[i], i));
                order
                    .into_iter()
                    .take(2)
                    .filter(|&i| dice.values()[i] < 4)
                    .collect()
            }
            BotPolicy::Hard => best_flip(dice.values()).0,
        }
    }

    fn select(&self, candidates: &[Candidate], card: &Scorecard, rng: &mut GameRng) -> Option<Selection> {
        let open: SmallVec<[Selection; 6]> = candidates
            .iter()
            .filter_map(|c| {
                let category = c.category.filter(|&cat| card.is_open(cat))?;
                Some(Selection {
                    category,
                    points: c.score(),
                })
            })
            .collect();

        if open.is_empty() {
            return kill_fallback(card);
        }

        match self {
            BotPolicy::Easy => rng.choose(&open).copied(),
            BotPolicy::Medium => first_max_by_key(&open, |s| s.points),
            BotPolicy::Hard => first_max_by_key(&open, |s| s.points + s.category.bot_priority()),
        }
    }
}

/// First open category in kill order, recorded as zero.
#[must_use]
pub fn kill_fallback(card: &Scorecard) -> Option<Selection> {
    Category::KILL_ORDER
        .into_iter()
        .find(|&c| card.is_open(c))
        .map(|category| Selection {
            category,
            points: 0,
        })
}

/// Highest open candidate value for the dice as they lie after one roll.
fn best_open_value(dice: &DiceSet, card: &Scorecard) -> u32 {
    detect_all(dice.values(), true)
        .iter()
        .filter(|c| c.category.map_or(true, |cat| card.is_open(cat)))
        .map(|c| c.points.value())
        .max()
        .unwrap_or(0)
}

fn first_max_by_key<T: Copy>(items: &[T], key: impl Fn(&T) -> u32) -> Option<T> {
    let mut best: Option<(T, u32)> = None;
    for &item in items {
        let k = key(&item);
        if best.map_or(true, |(_, bk)| k > bk) {
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}

/// Most frequent face and its count; the higher face wins a tie.
fn most_frequent(values: &[u8; DICE_COUNT]) -> (u8, u8) {
    let counts = face_counts(values);
    (1..=6u8)
        .rev()
        .map(|face| (face, counts[face as usize]))
        .fold((6, 0), |best, cur| if cur.1 > best.1 { cur } else { best })
}

fn hard_hold(values: &[u8; DICE_COUNT]) -> [bool; DICE_COUNT] {
    let counts = face_counts(values);
    let distinct = counts.iter().filter(|&&c| c > 0).count();
    let (mode, count) = most_frequent(values);

    // Keep the set, plus any die whose flip would join it.
    let set_and_flippable = values.map(|v| v == mode || opposite_face(v) == mode);

    match count {
        5 => [true; DICE_COUNT],
        4 => set_and_flippable,
        3 if distinct == 2 => [true; DICE_COUNT],
        3 => set_and_flippable,
        2 => {
            let pairs = counts.iter().filter(|&&c| c == 2).count();
            if pairs == 2 {
                values.map(|v| counts[v as usize] == 2)
            } else if !is_high_face(mode) {
                straight_draw(values).unwrap_or(set_and_flippable)
            } else {
                set_and_flippable
            }
        }
        _ => straight_draw(values).unwrap_or_else(|| values.map(|v| v >= 5)),
    }
}
