//! Scorecard categories.

use serde::{Deserialize, Serialize};

/// One row of the scorecard.
///
/// The six number rows carry their traditional names (balas, duques,
/// trenes, cuadras, quinas, cenas). Grande is the only row with two slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "balas")]
    Ones,
    #[serde(rename = "duques")]
    Twos,
    #[serde(rename = "trenes")]
    Threes,
    #[serde(rename = "cuadras")]
    Fours,
    #[serde(rename = "quinas")]
    Fives,
    #[serde(rename = "cenas")]
    Sixes,
    #[serde(rename = "escalera")]
    Straight,
    #[serde(rename = "full")]
    FullHouse,
    #[serde(rename = "poker")]
    Poker,
    #[serde(rename = "grande")]
    Grande,
}

impl Category {
    /// Every category in scorecard order.
    pub const ALL: [Category; 10] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Straight,
        Category::FullHouse,
        Category::Poker,
        Category::Grande,
    ];

    /// Categories holding a single slot (everything but grande).
    pub const SINGLES: [Category; 9] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Straight,
        Category::FullHouse,
        Category::Poker,
    ];

    /// Order in which a bot kills a category when nothing scores.
    pub const KILL_ORDER: [Category; 10] = Self::ALL;

    /// Number category for a face in `1..=6`.
    #[must_use]
    pub fn from_face(face: u8) -> Option<Category> {
        match face {
            1 => Some(Category::Ones),
            2 => Some(Category::Twos),
            3 => Some(Category::Threes),
            4 => Some(Category::Fours),
            5 => Some(Category::Fives),
            6 => Some(Category::Sixes),
            _ => None,
        }
    }

    /// Face counted by a number category.
    #[must_use]
    pub fn face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// Position in scorecard order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn is_grande(self) -> bool {
        self == Category::Grande
    }

    /// Name shown on the scorecard.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "Balas",
            Category::Twos => "Duques",
            Category::Threes => "Trenes",
            Category::Fours => "Cuadras",
            Category::Fives => "Quinas",
            Category::Sixes => "Cenas",
            Category::Straight => "Escalera",
            Category::FullHouse => "Full",
            Category::Poker => "Póquer",
            Category::Grande => "Grande",
        }
    }

    /// Fixed weight the hard bot adds to a candidate's points.
    #[must_use]
    pub fn bot_priority(self) -> u32 {
        match self {
            Category::Grande => 1000,
            Category::Poker => 900,
            Category::FullHouse => 800,
            Category::Straight => 700,
            Category::Sixes => 600,
            Category::Fives => 500,
            Category::Fours => 400,
            Category::Threes => 300,
            Category::Twos => 200,
            Category::Ones => 100,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Singular name of a die face ("Bala", "Duque", ...).
#[must_use]
pub fn die_name(face: u8) -> &'static str {
    match face {
        1 => "Bala",
        2 => "Duque",
        3 => "Tren",
        4 => "Cuadra",
        5 => "Quina",
        _ => "Cena",
    }
}
