//! Transition outcomes.
//!
//! Every partition operation returns an `Outcome`. Rejections (empty deck,
//! full field, stale card reference) are ordinary values, not errors: the
//! caller renders them the same way it renders a success.

use serde::{Deserialize, Serialize};

use super::pool::Pool;
use crate::cards::CardId;

/// Discriminator shared by every outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    DeckEmpty,
    FieldFull,
    InvalidReference,
}

/// Result of a single partition transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A card moved from the deck to the end of the hand.
    Drew { card: CardId },
    /// A card moved from the hand to the end of the field.
    Played { card: CardId },
    /// A card moved from the field to the end of the hand.
    Returned { card: CardId },
    /// All cards are back in the deck.
    Reset,
    /// Draw with nothing left in the deck. Nothing moved.
    DeckEmpty,
    /// Play while the field is at capacity. Nothing moved.
    FieldFull { card: CardId },
    /// The card was not in the pool the move takes from. Nothing moved.
    InvalidReference {
        card: CardId,
        expected: Pool,
        /// Where the card actually is; `None` if it is not in the catalog.
        found: Option<Pool>,
    },
}

impl Outcome {
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Drew { .. }
            | Outcome::Played { .. }
            | Outcome::Returned { .. }
            | Outcome::Reset => OutcomeKind::Success,
            Outcome::DeckEmpty => OutcomeKind::DeckEmpty,
            Outcome::FieldFull { .. } => OutcomeKind::FieldFull,
            Outcome::InvalidReference { .. } => OutcomeKind::InvalidReference,
        }
    }

    /// Whether the partition changed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.kind(), OutcomeKind::Success)
    }

    /// The card that moved, if any.
    #[must_use]
    pub const fn moved(&self) -> Option<CardId> {
        match *self {
            Outcome::Drew { card } | Outcome::Played { card } | Outcome::Returned { card } => {
                Some(card)
            }
            _ => None,
        }
    }

    /// The card the action concerned, whether or not it moved.
    #[must_use]
    pub const fn card(&self) -> Option<CardId> {
        match *self {
            Outcome::Drew { card }
            | Outcome::Played { card }
            | Outcome::Returned { card }
            | Outcome::FieldFull { card }
            | Outcome::InvalidReference { card, .. } => Some(card),
            Outcome::Reset | Outcome::DeckEmpty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let id = CardId::new(1);
        assert_eq!(Outcome::Drew { card: id }.kind(), OutcomeKind::Success);
        assert_eq!(Outcome::Reset.kind(), OutcomeKind::Success);
        assert_eq!(Outcome::DeckEmpty.kind(), OutcomeKind::DeckEmpty);
        assert_eq!(Outcome::FieldFull { card: id }.kind(), OutcomeKind::FieldFull);

        let invalid = Outcome::InvalidReference {
            card: id,
            expected: Pool::Hand,
            found: Some(Pool::Deck),
        };
        assert_eq!(invalid.kind(), OutcomeKind::InvalidReference);
        assert!(!invalid.is_success());
    }

    #[test]
    fn test_moved_vs_card() {
        let id = CardId::new(5);

        assert_eq!(Outcome::Played { card: id }.moved(), Some(id));
        assert_eq!(Outcome::FieldFull { card: id }.moved(), None);
        assert_eq!(Outcome::FieldFull { card: id }.card(), Some(id));
        assert_eq!(Outcome::DeckEmpty.card(), None);
        assert_eq!(Outcome::Reset.moved(), None);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Outcome::Returned { card: CardId::new(2) }).unwrap();
        assert_eq!(json["outcome"], "returned");
        assert_eq!(json["card"], 2);

        let json = serde_json::to_value(Outcome::InvalidReference {
            card: CardId::new(9),
            expected: Pool::Field,
            found: None,
        })
        .unwrap();
        assert_eq!(json["outcome"], "invalid_reference");
        assert_eq!(json["expected"], "field");
        assert!(json["found"].is_null());
    }
}
