//! Duel session controller.
//!
//! `DuelSession` is the single entry point for user actions. It forwards
//! each action to the [`Partition`], records a status message for the
//! outcome, and exposes read-only views for rendering.
//!
//! One session owns one partition. Sessions may share a catalog through
//! `Arc`, but never a partition.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::snapshot::Snapshot;
use super::status::StatusMessage;
use crate::cards::{Card, CardId, Catalog};
use crate::core::{ConfigError, DrawSource, DuelConfig, GameRng};
use crate::view::{filter_by_pillar, PillarFilter};
use crate::zones::{Move, Outcome, OutcomeKind, Partition, Pool};

/// An interactive duel over a fixed catalog.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use skill_duel::cards::compendium;
/// use skill_duel::core::DuelConfig;
/// use skill_duel::session::DuelSession;
/// use skill_duel::zones::OutcomeKind;
///
/// let catalog = Arc::new(compendium());
/// let mut session = DuelSession::new(catalog, &DuelConfig::new().with_seed(7)).unwrap();
///
/// let drawn = session.draw();
/// assert_eq!(drawn.kind(), OutcomeKind::Success);
/// assert_eq!(session.deck_count(), 13);
/// assert!(session.last_message().starts_with("Drew: "));
/// ```
#[derive(Clone, Debug)]
pub struct DuelSession<R = GameRng> {
    catalog: Arc<Catalog>,
    partition: Partition,
    rng: R,
    message: StatusMessage,
}

impl DuelSession<GameRng> {
    /// Start a session using the configured seed (or OS entropy).
    pub fn new(catalog: Arc<Catalog>, config: &DuelConfig) -> Result<Self, ConfigError> {
        let rng = config.rng();
        info!(seed = rng.seed(), "seeded draw rng");
        Self::with_source(catalog, config, rng)
    }
}

impl<R: DrawSource> DuelSession<R> {
    /// Start a session with an explicit draw source.
    pub fn with_source(
        catalog: Arc<Catalog>,
        config: &DuelConfig,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let partition = Partition::new(&catalog, config.field_capacity);
        info!(
            cards = catalog.len(),
            field_capacity = config.field_capacity,
            "duel session started"
        );

        Ok(Self {
            catalog,
            partition,
            rng,
            message: StatusMessage::welcome(),
        })
    }

    // === Actions ===

    /// Draw a random card from the deck into the hand.
    pub fn draw(&mut self) -> Outcome {
        self.apply(Move::Draw)
    }

    /// Play a hand card onto the field.
    pub fn play(&mut self, card: CardId) -> Outcome {
        self.apply(Move::Play(card))
    }

    /// Return a field card to the end of the hand.
    pub fn return_to_hand(&mut self, card: CardId) -> Outcome {
        self.apply(Move::Return(card))
    }

    /// Put every card back in the deck.
    pub fn reset(&mut self) {
        self.apply(Move::Reset);
    }

    /// Apply any move and update the status line.
    pub fn apply(&mut self, mv: Move) -> Outcome {
        let outcome = self.partition.apply(mv, &mut self.rng);
        self.log_outcome(mv, &outcome);
        self.message =
            StatusMessage::for_outcome(&outcome, &self.catalog, self.partition.field_capacity());
        outcome
    }

    fn log_outcome(&self, mv: Move, outcome: &Outcome) {
        let deck = self.partition.deck_len();
        let hand = self.partition.hand_len();
        let field = self.partition.field_len();

        match outcome.kind() {
            OutcomeKind::Success => {
                debug!(?mv, ?outcome, deck, hand, field, "move applied");
            }
            OutcomeKind::DeckEmpty | OutcomeKind::FieldFull => {
                debug!(?mv, ?outcome, deck, hand, field, "move rejected");
            }
            OutcomeKind::InvalidReference => {
                warn!(
                    ?mv,
                    source = ?mv.source(),
                    ?outcome,
                    "move references a card outside its source pool"
                );
            }
        }
    }

    // === Views ===

    /// Number of cards left in the deck.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.partition.deck_len()
    }

    /// Hand cards in draw/return order.
    #[must_use]
    pub fn hand(&self) -> Vec<&Card> {
        self.resolve(self.partition.hand())
    }

    /// Field cards in play order.
    #[must_use]
    pub fn field(&self) -> Vec<&Card> {
        self.resolve(self.partition.field().iter().copied())
    }

    #[must_use]
    pub fn last_message(&self) -> &str {
        self.message.as_str()
    }

    #[must_use]
    pub fn status(&self) -> &StatusMessage {
        &self.message
    }

    /// Everything needed to render the board.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            deck_count: self.deck_count(),
            hand: self.hand(),
            field: self.field(),
            field_capacity: self.partition.field_capacity(),
            last_message: self.last_message(),
        }
    }

    /// Gallery cards for a selector. Independent of the duel state.
    #[must_use]
    pub fn filtered_catalog(&self, selector: PillarFilter) -> Vec<&Card> {
        filter_by_pillar(&self.catalog, selector)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.catalog.get(id)
    }

    /// Which pool currently holds a card.
    #[must_use]
    pub fn location(&self, id: CardId) -> Option<Pool> {
        self.partition.location(id)
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    fn resolve(&self, ids: impl IntoIterator<Item = CardId>) -> Vec<&Card> {
        ids.into_iter().filter_map(|id| self.catalog.get(id)).collect()
    }
}
