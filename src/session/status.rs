//! Status line messages.
//!
//! The session keeps exactly one message: the outcome of the most recent
//! action. Each outcome kind has a fixed template.

use serde::Serialize;

use crate::cards::{CardId, Catalog};
use crate::zones::{Outcome, OutcomeKind};

/// Shown before any action has been taken.
pub const WELCOME: &str =
    "Draw cards from the deck to build your hand, then play them to the field!";

/// Shown when drawing from an empty deck.
pub const DECK_EMPTY: &str = "No more cards in deck!";

/// Shown after a reset.
pub const RESET: &str = "Deck reset. Draw cards from the deck!";

/// The most recent status line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    /// Kind of the outcome that produced this message; `None` for the
    /// welcome line.
    pub kind: Option<OutcomeKind>,
    pub text: String,
}

impl StatusMessage {
    /// Message for a freshly started session.
    #[must_use]
    pub fn welcome() -> Self {
        Self {
            kind: None,
            text: WELCOME.to_string(),
        }
    }

    /// Render the message for an outcome.
    ///
    /// Card names are looked up in `catalog`; ids outside it are shown by id.
    #[must_use]
    pub fn for_outcome(outcome: &Outcome, catalog: &Catalog, field_capacity: usize) -> Self {
        let name = |card: CardId| {
            catalog
                .get(card)
                .map_or_else(|| card.to_string(), |c| c.name.clone())
        };

        let text = match *outcome {
            Outcome::Drew { card } => format!("Drew: {}", name(card)),
            Outcome::Played { card } => format!("{} summoned to the field!", name(card)),
            Outcome::Returned { card } => format!("{} returned to hand.", name(card)),
            Outcome::Reset => RESET.to_string(),
            Outcome::DeckEmpty => DECK_EMPTY.to_string(),
            Outcome::FieldFull { .. } => {
                let plural = if field_capacity == 1 { "" } else { "s" };
                format!("Field is full! Max {field_capacity} card{plural}.")
            }
            Outcome::InvalidReference { card, expected, .. } => {
                format!("{} is not in your {}.", name(card), expected)
            }
        };

        Self {
            kind: Some(outcome.kind()),
            text,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::welcome()
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
