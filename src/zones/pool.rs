//! Pool identifiers and duel moves.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// One of the three disjoint card pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pool {
    /// Undrawn cards. Only the count is ever shown.
    Deck,
    /// Drawn cards, in draw/return order.
    Hand,
    /// Played cards, in play order. Capacity-bounded.
    Field,
}

impl Pool {
    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Pool::Deck => "deck",
            Pool::Hand => "hand",
            Pool::Field => "field",
        }
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A user action against the partition.
///
/// ```
/// use skill_duel::cards::CardId;
/// use skill_duel::zones::{Move, Pool};
///
/// assert_eq!(Move::Play(CardId::new(3)).source(), Some(Pool::Hand));
/// assert_eq!(Move::Reset.source(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "card", rename_all = "snake_case")]
pub enum Move {
    /// Draw a random card from the deck into the hand.
    Draw,
    /// Move a card from the hand onto the field.
    Play(CardId),
    /// Move a card from the field back to the end of the hand.
    Return(CardId),
    /// Put every card back in the deck.
    Reset,
}

impl Move {
    /// Pool the moved card must currently be in, if the move names one.
    #[must_use]
    pub const fn source(self) -> Option<Pool> {
        match self {
            Move::Draw => Some(Pool::Deck),
            Move::Play(_) => Some(Pool::Hand),
            Move::Return(_) => Some(Pool::Field),
            Move::Reset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_names() {
        assert_eq!(Pool::Deck.to_string(), "deck");
        assert_eq!(Pool::Hand.name(), "hand");
        assert_eq!(serde_json::to_string(&Pool::Field).unwrap(), "\"field\"");
    }

    #[test]
    fn test_move_sources() {
        assert_eq!(Move::Draw.source(), Some(Pool::Deck));
        assert_eq!(Move::Return(CardId::new(1)).source(), Some(Pool::Field));
    }

    #[test]
    fn test_move_serde() {
        let json = serde_json::to_string(&Move::Play(CardId::new(4))).unwrap();
        assert_eq!(json, r#"{"action":"play","card":4}"#);

        let parsed: Move = serde_json::from_str(r#"{"action":"draw"}"#).unwrap();
        assert_eq!(parsed, Move::Draw);
    }
}
