//! Core engine types: draw sources and configuration.
//!
//! Everything here is independent of the card catalog. Sessions combine a
//! `DuelConfig` with a `DrawSource` to drive the partition engine.

pub mod config;
pub mod rng;

pub use config::{ConfigError, DuelConfig, FIELD_CAPACITY};
pub use rng::{DrawSource, GameRng, GameRngState, ScriptedDraws};
