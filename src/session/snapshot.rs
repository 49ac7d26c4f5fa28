//! Read-only view of a session for rendering.

use serde::Serialize;

use crate::cards::{Card, CardId};

/// Everything a presentation layer needs to draw the duel board.
///
/// Deck contents are deliberately absent: only the count is visible.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot<'a> {
    pub deck_count: usize,
    /// Hand cards, in draw/return order.
    pub hand: Vec<&'a Card>,
    /// Field cards, in play order.
    pub field: Vec<&'a Card>,
    pub field_capacity: usize,
    pub last_message: &'a str,
}

impl Snapshot<'_> {
    #[must_use]
    pub fn hand_ids(&self) -> Vec<CardId> {
        self.hand.iter().map(|c| c.id).collect()
    }

    #[must_use]
    pub fn field_ids(&self) -> Vec<CardId> {
        self.field.iter().map(|c| c.id).collect()
    }

    /// Field header, e.g. `"FIELD (2/4)"`.
    #[must_use]
    pub fn field_label(&self) -> String {
        format!("FIELD ({}/{})", self.field.len(), self.field_capacity)
    }

    /// Hand header, e.g. `"YOUR HAND (3)"`.
    #[must_use]
    pub fn hand_label(&self) -> String {
        format!("YOUR HAND ({})", self.hand.len())
    }

    /// Draw button label, e.g. `"DRAW (11)"`.
    #[must_use]
    pub fn draw_label(&self) -> String {
        format!("DRAW ({})", self.deck_count)
    }
}
