//! Card system: records, typed attributes, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Unique card identifier within a catalog
//! - `Card`: Immutable card record
//! - `Pillar`, `CardKind`, `Attribute`, `Rarity`, `Stats`: display attributes
//! - `Catalog`: Ordered, id-unique card universe for a session
//!
//! The built-in compendium is available through [`compendium()`].

pub mod attributes;
pub mod catalog;
pub mod compendium;
pub mod definition;

pub use attributes::{Attribute, CardKind, Pillar, Rarity, Stats};
pub use catalog::{Catalog, CatalogError};
pub use compendium::{compendium, compendium_cards};
pub use definition::{Card, CardId};
