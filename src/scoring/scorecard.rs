//! Per-player scorecard.
//!
//! Nine single slots and the two-slot grande row. A single slot is open
//! (`None`), killed (`Some(0)`) or scored (`Some(points)`), and never changes
//! once written. Grande takes up to two entries, each killed or scored.
//!
//! ## Finished
//!
//! A player is finished once 10 rows count as filled, where grande only
//! counts after its second entry. A single grande entry is not a completed
//! play on its own.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::category::Category;
use crate::core::GameError;

/// Entries the grande row accepts.
pub const GRANDE_SLOTS: usize = 2;

/// Filled rows needed to finish.
const ROWS_TO_FINISH: usize = 10;

/// State of a single slot as shown on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Open,
    Killed,
    Scored(u32),
}

impl From<Option<u32>> for Slot {
    fn from(value: Option<u32>) -> Self {
        match value {
            None => Slot::Open,
            Some(0) => Slot::Killed,
            Some(points) => Slot::Scored(points),
        }
    }
}

/// Whether a category can still take a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Open,
    /// Single slot already written.
    AlreadyUsed,
    /// Both grande entries used.
    GrandeExhausted,
}

impl Availability {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Availability::Open
    }
}

/// Rows and total. Loading goes through `StoredScorecard` so the grande
/// limit holds and the total always matches the entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredScorecard")]
pub struct Scorecard {
    singles: [Option<u32>; 9],
    grande: SmallVec<[u32; GRANDE_SLOTS]>,
    total: u32,
}

/// Serialized form of a scorecard. A stored `total` is ignored.
#[derive(Deserialize)]
struct StoredScorecard {
    singles: [Option<u32>; 9],
    grande: Vec<u32>,
}

impl TryFrom<StoredScorecard> for Scorecard {
    type Error = GameError;

    fn try_from(stored: StoredScorecard) -> Result<Self, Self::Error> {
        if stored.grande.len() > GRANDE_SLOTS {
            return Err(GameError::GrandeOverflow(stored.grande.len()));
        }
        let mut card = Self {
            singles: stored.singles,
            grande: stored.grande.into_iter().collect(),
            total: 0,
        };
        card.total = card.compute_total();
        Ok(card)
    }
}

impl Scorecard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `points` into `category`. Zero kills the slot.
    pub fn record(&mut self, category: Category, points: u32) -> Result<(), GameError> {
        match self.availability(category) {
            Availability::Open => {}
            _ => return Err(GameError::CategoryUnavailable(category)),
        }

        if category.is_grande() {
            self.grande.push(points);
        } else {
            self.singles[category.index()] = Some(points);
        }
        self.total = self.compute_total();
        Ok(())
    }

    #[must_use]
    pub fn availability(&self, category: Category) -> Availability {
        if category.is_grande() {
            if self.grande.len() < GRANDE_SLOTS {
                Availability::Open
            } else {
                Availability::GrandeExhausted
            }
        } else if self.singles[category.index()].is_none() {
            Availability::Open
        } else {
            Availability::AlreadyUsed
        }
    }

    #[must_use]
    pub fn is_open(&self, category: Category) -> bool {
        self.availability(category).is_open()
    }

    /// Open categories in scorecard order.
    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|&c| self.is_open(c))
    }

    /// Slot state for a single category. Grande reports its latest entry.
    #[must_use]
    pub fn slot(&self, category: Category) -> Slot {
        if category.is_grande() {
            Slot::from(self.grande.last().copied())
        } else {
            Slot::from(self.singles[category.index()])
        }
    }

    #[must_use]
    pub fn grande_entries(&self) -> &[u32] {
        &self.grande
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Rows counted towards finishing.
    #[must_use]
    pub fn filled_rows(&self) -> usize {
        let singles = self.singles.iter().filter(|s| s.is_some()).count();
        singles + usize::from(self.grande.len() >= GRANDE_SLOTS)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.filled_rows() >= ROWS_TO_FINISH
    }

    fn compute_total(&self) -> u32 {
        self.singles.iter().flatten().sum::<u32>() + self.grande.iter().sum::<u32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_total() {
        let mut card = Scorecard::new();
        card.record(Category::Sixes, 18).unwrap();
        card.record(Category::Ones, 0).unwrap();
        card.record(Category::Grande, 50).unwrap();

        assert_eq!(card.total(), 68);
        assert_eq!(card.slot(Category::Sixes), Slot::Scored(18));
        assert_eq!(card.slot(Category::Ones), Slot::Killed);
        assert_eq!(card.slot(Category::Twos), Slot::Open);
        assert_eq!(card.grande_entries(), &[50]);
    }

    #[test]
    fn test_single_slot_is_write_once() {
        let mut card = Scorecard::new();
        card.record(Category::Poker, 45).unwrap();

        assert_eq!(
            card.record(Category::Poker, 50),
            Err(GameError::CategoryUnavailable(Category::Poker))
        );
        assert_eq!(card.slot(Category::Poker), Slot::Scored(45));
        assert_eq!(card.availability(Category::Poker), Availability::AlreadyUsed);

        // Killed slots stay killed too.
        card.record(Category::Straight, 0).unwrap();
        assert!(card.record(Category::Straight, 25).is_err());
        assert_eq!(card.total(), 45);
    }

    #[test]
    fn test_grande_takes_two_entries() {
        let mut card = Scorecard::new();
        card.record(Category::Grande, 0).unwrap();
        assert!(card.is_open(Category::Grande));
        card.record(Category::Grande, 50).unwrap();

        assert_eq!(card.availability(Category::Grande), Availability::GrandeExhausted);
        assert_eq!(
            card.record(Category::Grande, 50),
            Err(GameError::CategoryUnavailable(Category::Grande))
        );
        assert_eq!(card.grande_entries(), &[0, 50]);
        assert_eq!(card.total(), 50);
    }

    #[test]
    fn test_finished_requires_both_grande_entries() {
        let mut card = Scorecard::new();
        for category in Category::SINGLES {
            card.record(category, 1).unwrap();
        }
        assert_eq!(card.filled_rows(), 9);
        assert!(!card.is_finished());

        // One grande entry is not a completed play.
        card.record(Category::Grande, 50).unwrap();
        assert_eq!(card.filled_rows(), 9);
        assert!(!card.is_finished());

        card.record(Category::Grande, 0).unwrap();
        assert_eq!(card.filled_rows(), 10);
        assert!(card.is_finished());
        assert_eq!(card.open_categories().count(), 0);
    }

    #[test]
    fn test_grande_alone_does_not_finish() {
        let mut card = Scorecard::new();
        card.record(Category::Grande, 50).unwrap();
        card.record(Category::Grande, 50).unwrap();
        assert_eq!(card.filled_rows(), 1);
        assert!(!card.is_finished());
        assert_eq!(card.open_categories().count(), 9);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut card = Scorecard::new();
        card.record(Category::Fives, 15).unwrap();
        card.record(Category::Grande, 50).unwrap();

        let json = serde_json::to_string(&card).unwrap();
        let back: Scorecard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }

    #[test]
    fn test_loading_rejects_extra_grande_entries() {
        let json = r#"{"singles":[null,null,null,null,null,null,null,null,null],"grande":[50,50,50],"total":150}"#;
        let err = serde_json::from_str::<Scorecard>(json).unwrap_err();
        assert!(err.to_string().contains("grande holds at most 2 entries, got 3"));
    }

    #[test]
    fn test_loading_recomputes_total() {
        let json = r#"{"singles":[3,null,null,null,0,null,null,null,null],"grande":[50],"total":7}"#;
        let card: Scorecard = serde_json::from_str(json).unwrap();
        assert_eq!(card.total(), 53);
        assert_eq!(card.slot(Category::Fives), Slot::Killed);
        assert!(card.is_open(Category::Grande));
    }
}
