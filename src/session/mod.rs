//! Duel sessions: user actions, status line, and board snapshots.
//!
//! ## Key Types
//!
//! - `DuelSession`: Runs draw/play/return/reset against one partition
//! - `StatusMessage`: The single most recent status line
//! - `Snapshot`: Read-only board view for rendering

pub mod controller;
pub mod snapshot;
pub mod status;

pub use controller::DuelSession;
pub use snapshot::Snapshot;
pub use status::StatusMessage;
