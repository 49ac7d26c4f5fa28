//! Deck/Hand/Field pools.
//!
//! Every catalog card lives in exactly one of three pools. The
//! [`Partition`] owns the pools and is the only thing that moves cards
//! between them.
//!
//! ## Key Types
//!
//! - `Pool`: Deck, Hand, or Field
//! - `Move`: Draw, Play, Return, Reset
//! - `Outcome`: What a move did (or why it did nothing)
//! - `Partition`: The pools and their transitions

pub mod outcome;
pub mod partition;
pub mod pool;

pub use outcome::{Outcome, OutcomeKind};
pub use partition::{Partition, PartitionError};
pub use pool::{Move, Pool};
