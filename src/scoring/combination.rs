//! Combination detection.
//!
//! `detect_all` lists every way the five dice can be written down:
//! at most one special combination (sleeping, grande, poker, full or
//! straight) followed by one number candidate per face present, faces
//! ascending. A hand is never scoreless.
//!
//! ## Points
//!
//! | Combination | de mano | otherwise |
//! |---|---|---|
//! | Sleeping (five equal) | instant win | n/a (grande) |
//! | Grande | n/a | 50 |
//! | Poker | 50 | 45 |
//! | Full | 40 | 35 |
//! | Straight | 30 | 25 |
//! | Number `f` | count × f | count × f |

use serde::Serialize;
use smallvec::SmallVec;

use super::category::{die_name, Category};
use crate::dice::{face_counts, sorted, DICE_COUNT};

/// Room for the largest possible list: a straight plus five numbers.
pub type Candidates = SmallVec<[Candidate; 6]>;

/// What a candidate is worth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Points {
    Score(u32),
    /// Sleeping: the match ends in favor of whoever rolled it.
    InstantWin,
}

impl Points {
    /// Score for ordering purposes; an instant win beats everything.
    #[must_use]
    pub fn value(self) -> u32 {
        match self {
            Points::Score(points) => points,
            Points::InstantWin => u32::MAX,
        }
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Points::Score(points) => write!(f, "{points}"),
            Points::InstantWin => f.write_str("WIN"),
        }
    }
}

/// Shape of a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CombinationKind {
    Sleeping,
    Grande,
    Poker,
    FullHouse,
    Straight,
    /// Sum of the dice showing this face.
    Number(u8),
}

/// One way of scoring the current dice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub kind: CombinationKind,
    /// Scorecard row this candidate fills. `None` for sleeping.
    pub category: Option<Category>,
    pub name: &'static str,
    pub description: String,
    pub points: Points,
    /// The dice that make up the combination, ascending.
    pub pattern: SmallVec<[u8; DICE_COUNT]>,
}

impl Candidate {
    #[must_use]
    pub fn is_sleeping(&self) -> bool {
        self.kind == CombinationKind::Sleeping
    }

    /// Points as a plain score (sleeping counts as 0 here).
    #[must_use]
    pub fn score(&self) -> u32 {
        match self.points {
            Points::Score(points) => points,
            Points::InstantWin => 0,
        }
    }

    /// One-line description, e.g. `Full - 3 Trens + 2 Duques (35 puntos)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} - {} ({} puntos)", self.name, self.description, self.points)
    }
}

fn special_points(hand_eligible: bool, de_mano: u32, otherwise: u32) -> Points {
    Points::Score(if hand_eligible { de_mano } else { otherwise })
}

fn face_with_count(counts: &[u8; 7], count: u8) -> Option<u8> {
    (1..=6u8).find(|&face| counts[face as usize] == count)
}

fn repeat(face: u8, times: u8) -> SmallVec<[u8; DICE_COUNT]> {
    std::iter::repeat(face).take(times as usize).collect()
}

/// Every candidate for `dice`, specials first, then numbers by face.
///
/// `hand_eligible` is true only when the turn had one roll and no flips.
#[must_use]
pub fn detect_all(dice: &[u8; DICE_COUNT], hand_eligible: bool) -> Candidates {
    let values = sorted(dice);
    let counts = face_counts(&values);
    let max_count = counts.iter().copied().max().unwrap_or(0);
    let distinct = counts.iter().filter(|&&c| c > 0).count();

    let mut out = Candidates::new();

    if max_count == 5 {
        let face = values[0];
        if hand_eligible {
            out.push(Candidate {
                kind: CombinationKind::Sleeping,
                category: None,
                name: "¡DORMIDA!",
                description: format!("5 {}s de mano", die_name(face)),
                points: Points::InstantWin,
                pattern: values.iter().copied().collect(),
            });
            return out;
        }
        out.push(Candidate {
            kind: CombinationKind::Grande,
            category: Some(Category::Grande),
            name: "Grande",
            description: format!("5 {}s", die_name(face)),
            points: Points::Score(50),
            pattern: values.iter().copied().collect(),
        });
    }

    if max_count == 4 {
        if let Some(face) = face_with_count(&counts, 4) {
            out.push(Candidate {
                kind: CombinationKind::Poker,
                category: Some(Category::Poker),
                name: if hand_eligible { "Póquer de mano" } else { "Póquer" },
                description: format!("4 {}s", die_name(face)),
                points: special_points(hand_eligible, 50, 45),
                pattern: repeat(face, 4),
            });
        }
    }

    if max_count == 3 && distinct == 2 {
        if let (Some(three), Some(two)) = (face_with_count(&counts, 3), face_with_count(&counts, 2)) {
            out.push(Candidate {
                kind: CombinationKind::FullHouse,
                category: Some(Category::FullHouse),
                name: if hand_eligible { "Full de mano" } else { "Full" },
                description: format!("3 {}s + 2 {}s", die_name(three), die_name(two)),
                points: special_points(hand_eligible, 40, 35),
                pattern: values.iter().copied().collect(),
            });
        }
    }

    if values == [1, 2, 3, 4, 5] || values == [2, 3, 4, 5, 6] {
        out.push(Candidate {
            kind: CombinationKind::Straight,
            category: Some(Category::Straight),
            name: if hand_eligible { "Escalera de mano" } else { "Escalera" },
            description: "Secuencia de 5".to_string(),
            points: special_points(hand_eligible, 30, 25),
            pattern: values.iter().copied().collect(),
        });
    }

    for face in 1..=6u8 {
        let count = counts[face as usize];
        if count == 0 {
            continue;
        }
        if let Some(category) = Category::from_face(face) {
            out.push(Candidate {
                kind: CombinationKind::Number(face),
                category: Some(category),
                name: category.name(),
                description: format!("{count} x {face}"),
                points: Points::Score(u32::from(count) * u32::from(face)),
                pattern: repeat(face, count),
            });
        }
    }

    out
}

/// The first candidate for `dice` evaluated without the hand bonus.
///
/// Used for the informational summary after the second roll.
#[must_use]
pub fn best_candidate(dice: &[u8; DICE_COUNT]) -> Option<Candidate> {
    detect_all(dice, false).into_iter().next()
}
