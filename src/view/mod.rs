//! Read-only catalog views for the gallery.

pub mod filter;

pub use filter::{filter_by_pillar, gallery_caption, pillar_counts, FilterError, PillarFilter};
