//! Deck/Hand/Field partition engine.
//!
//! The `Partition` splits every catalog id across three pools and moves
//! ids between them. It maintains, after every operation:
//! - every catalog id is in exactly one pool
//! - no pool holds an id outside the catalog
//! - the field holds at most `field_capacity` ids
//!
//! Each operation checks its preconditions before touching any pool, so a
//! rejected move leaves the partition exactly as it was.
//!
//! ## Ordering
//!
//! - Deck: catalog order minus drawn ids. Never exposed beyond its length.
//! - Hand: append order. Drawn and returned cards go to the end.
//! - Field: play order.

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::outcome::Outcome;
use super::pool::{Move, Pool};
use crate::cards::{CardId, Catalog};
use crate::core::{DrawSource, FIELD_CAPACITY};

/// Invariant violations found by [`Partition::check_invariants`].
///
/// These only arise from a bug in the engine; no sequence of public
/// operations should produce one.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PartitionError {
    #[error("{0} is in no pool")]
    Missing(CardId),

    #[error("{0} is in more than one pool")]
    Duplicated(CardId),

    #[error("{0} is not in the catalog")]
    Unknown(CardId),

    #[error("field holds {len} cards, capacity is {capacity}")]
    FieldOverCapacity { len: usize, capacity: usize },

    #[error("{card} is recorded in the {recorded} but held by the {actual}")]
    LocationMismatch {
        card: CardId,
        recorded: Pool,
        actual: Pool,
    },
}

/// Three-way partition of catalog ids.
///
/// ## Usage
///
/// ```
/// use skill_duel::cards::compendium;
/// use skill_duel::core::ScriptedDraws;
/// use skill_duel::zones::{Outcome, Partition};
///
/// let catalog = compendium();
/// let mut partition = Partition::new(&catalog, 4);
/// let mut draws = ScriptedDraws::new([0]);
///
/// let outcome = partition.draw(&mut draws);
/// let card = outcome.moved().unwrap();
///
/// assert_eq!(partition.deck_len(), 13);
/// assert_eq!(partition.hand(), &[card]);
/// assert_eq!(partition.play(card), Outcome::Played { card });
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    /// All ids, in catalog order.
    universe: Vector<CardId>,

    /// Pool membership: card -> pool
    locations: FxHashMap<CardId, Pool>,

    deck: Vector<CardId>,
    hand: Vector<CardId>,
    field: SmallVec<[CardId; FIELD_CAPACITY]>,

    field_capacity: usize,
}

impl Partition {
    /// Create a partition in its initial state: every card in the deck.
    #[must_use]
    pub fn new(catalog: &Catalog, field_capacity: usize) -> Self {
        let universe: Vector<CardId> = catalog.ids().collect();
        let locations = universe.iter().map(|&id| (id, Pool::Deck)).collect();

        Self {
            deck: universe.clone(),
            universe,
            locations,
            hand: Vector::new(),
            field: SmallVec::new(),
            field_capacity,
        }
    }

    // === Transitions ===

    /// Apply a move.
    pub fn apply<R: DrawSource + ?Sized>(&mut self, mv: Move, rng: &mut R) -> Outcome {
        match mv {
            Move::Draw => self.draw(rng),
            Move::Play(card) => self.play(card),
            Move::Return(card) => self.return_to_hand(card),
            Move::Reset => self.reset(),
        }
    }

    /// Apply a move to a copy, leaving `self` untouched.
    #[must_use]
    pub fn applied<R: DrawSource + ?Sized>(&self, mv: Move, rng: &mut R) -> (Self, Outcome) {
        let mut next = self.clone();
        let outcome = next.apply(mv, rng);
        (next, outcome)
    }

    /// Move a uniformly chosen deck card to the end of the hand.
    pub fn draw<R: DrawSource + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        let len = self.deck.len();
        if len == 0 {
            return Outcome::DeckEmpty;
        }

        let index = rng.pick(len) % len;
        let card = self.deck.remove(index);
        self.hand.push_back(card);
        self.locations.insert(card, Pool::Hand);

        self.debug_verify();
        Outcome::Drew { card }
    }

    /// Move a hand card to the end of the field.
    pub fn play(&mut self, card: CardId) -> Outcome {
        let Some(index) = self.hand_index(card) else {
            return self.invalid(card, Pool::Hand);
        };
        if self.is_field_full() {
            return Outcome::FieldFull { card };
        }

        self.hand.remove(index);
        self.field.push(card);
        self.locations.insert(card, Pool::Field);

        self.debug_verify();
        Outcome::Played { card }
    }

    /// Move a field card to the end of the hand.
    pub fn return_to_hand(&mut self, card: CardId) -> Outcome {
        let Some(index) = self.field.iter().position(|&c| c == card) else {
            return self.invalid(card, Pool::Field);
        };

        self.field.remove(index);
        self.hand.push_back(card);
        self.locations.insert(card, Pool::Hand);

        self.debug_verify();
        Outcome::Returned { card }
    }

    /// Put every card back in the deck in catalog order.
    pub fn reset(&mut self) -> Outcome {
        self.deck = self.universe.clone();
        self.hand.clear();
        self.field.clear();
        for pool in self.locations.values_mut() {
            *pool = Pool::Deck;
        }

        self.debug_verify();
        Outcome::Reset
    }

    // === Queries ===

    /// Number of cards in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Hand ids in hand order.
    #[must_use]
    pub fn hand(&self) -> Vec<CardId> {
        self.hand.iter().copied().collect()
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Field ids in play order.
    #[must_use]
    pub fn field(&self) -> &[CardId] {
        &self.field
    }

    #[must_use]
    pub fn field_len(&self) -> usize {
        self.field.len()
    }

    #[must_use]
    pub fn field_capacity(&self) -> usize {
        self.field_capacity
    }

    #[must_use]
    pub fn is_field_full(&self) -> bool {
        self.field.len() >= self.field_capacity
    }

    /// Total number of cards across all pools.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.universe.len()
    }

    /// Number of cards in a pool.
    #[must_use]
    pub fn pool_len(&self, pool: Pool) -> usize {
        match pool {
            Pool::Deck => self.deck_len(),
            Pool::Hand => self.hand_len(),
            Pool::Field => self.field_len(),
        }
    }

    /// The pool holding a card, or `None` for ids outside the catalog.
    #[must_use]
    pub fn location(&self, card: CardId) -> Option<Pool> {
        self.locations.get(&card).copied()
    }

    /// Whether the partition is in its initial state.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.hand.is_empty() && self.field.is_empty() && self.deck == self.universe
    }

    /// Verify the partition invariants.
    pub fn check_invariants(&self) -> Result<(), PartitionError> {
        if self.field.len() > self.field_capacity {
            return Err(PartitionError::FieldOverCapacity {
                len: self.field.len(),
                capacity: self.field_capacity,
            });
        }

        let known: FxHashSet<CardId> = self.universe.iter().copied().collect();
        let mut held: FxHashMap<CardId, Pool> = FxHashMap::default();

        let pools = [
            (Pool::Deck, self.deck.iter().copied().collect::<Vec<_>>()),
            (Pool::Hand, self.hand.iter().copied().collect()),
            (Pool::Field, self.field.to_vec()),
        ];

        for (pool, ids) in pools {
            for card in ids {
                if !known.contains(&card) {
                    return Err(PartitionError::Unknown(card));
                }
                if held.insert(card, pool).is_some() {
                    return Err(PartitionError::Duplicated(card));
                }
            }
        }

        for &card in &self.universe {
            let Some(&actual) = held.get(&card) else {
                return Err(PartitionError::Missing(card));
            };
            match self.locations.get(&card) {
                Some(&recorded) if recorded != actual => {
                    return Err(PartitionError::LocationMismatch {
                        card,
                        recorded,
                        actual,
                    });
                }
                None => return Err(PartitionError::Missing(card)),
                _ => {}
            }
        }

        Ok(())
    }

    fn hand_index(&self, card: CardId) -> Option<usize> {
        if self.location(card) != Some(Pool::Hand) {
            return None;
        }
        self.hand.iter().position(|&c| c == card)
    }

    fn invalid(&self, card: CardId, expected: Pool) -> Outcome {
        Outcome::InvalidReference {
            card,
            expected,
            found: self.location(card),
        }
    }

    fn debug_verify(&self) {
        if cfg!(debug_assertions) {
            if let Err(e) = self.check_invariants() {
                panic!("partition invariant violated: {e}");
            }
        }
    }
}
