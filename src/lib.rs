//! # skill-duel
//!
//! A skill card compendium with a small duel simulation.
//!
//! The catalog is browsed as a gallery (optionally filtered by pillar) or
//! played in duel mode: draw cards from a deck into a hand, play them onto
//! a capacity-bounded field, return them, and reset.
//!
//! ## Design Principles
//!
//! 1. **Catalog is data**: Cards are immutable records. The engine reads
//!    only their ids (and pillars, for the gallery).
//!
//! 2. **One partition, three pools**: Every card is in exactly one of
//!    Deck, Hand, or Field. Moves check before they mutate.
//!
//! 3. **Rejections are outcomes**: An empty deck, a full field, or a stale
//!    card reference comes back as an `Outcome`, never a panic or `Err`.
//!
//! 4. **Injected randomness**: Draws go through `DrawSource`, so sessions
//!    replay from a seed and tests script exact draw order.
//!
//! ## Modules
//!
//! - `core`: Draw sources and configuration
//! - `cards`: Card records, attributes, catalog, built-in compendium
//! - `zones`: Pools, moves, outcomes, and the partition engine
//! - `view`: Gallery filtering
//! - `session`: The user-facing duel controller

pub mod cards;
pub mod core;
pub mod session;
pub mod view;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{ConfigError, DrawSource, DuelConfig, GameRng, GameRngState, ScriptedDraws};

pub use crate::cards::{
    compendium, Attribute, Card, CardId, CardKind, Catalog, CatalogError, Pillar, Rarity, Stats,
};

pub use crate::zones::{Move, Outcome, OutcomeKind, Partition, PartitionError, Pool};

pub use crate::view::{filter_by_pillar, FilterError, PillarFilter};

pub use crate::session::{DuelSession, Snapshot, StatusMessage};
