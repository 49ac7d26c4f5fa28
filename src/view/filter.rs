//! Gallery filtering by pillar.
//!
//! Filtering is a pure view over the catalog. It never looks at, or
//! changes, the duel partition.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Catalog, Pillar};

/// Errors from strict selector parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown pillar {0:?}")]
    UnknownPillar(String),
}

/// Gallery selector: every card, or one pillar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PillarFilter {
    #[default]
    All,
    Pillar(Pillar),
}

impl PillarFilter {
    /// Selector buttons in display order.
    pub const ALL_SELECTORS: [PillarFilter; 6] = [
        PillarFilter::All,
        PillarFilter::Pillar(Pillar::Deliver),
        PillarFilter::Pillar(Pillar::Build),
        PillarFilter::Pillar(Pillar::Operate),
        PillarFilter::Pillar(Pillar::Govern),
        PillarFilter::Pillar(Pillar::CrossCutting),
    ];

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PillarFilter::All => "ALL",
            PillarFilter::Pillar(p) => p.label(),
        }
    }

    /// Whether a card passes this selector.
    #[must_use]
    pub fn matches(self, card: &Card) -> bool {
        match self {
            PillarFilter::All => true,
            PillarFilter::Pillar(p) => card.pillar == p,
        }
    }

    /// Parse a selector, treating anything unrecognized as `All`.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(PillarFilter::All)
    }
}

impl FromStr for PillarFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            return Ok(PillarFilter::All);
        }
        Pillar::from_label(s)
            .map(PillarFilter::Pillar)
            .ok_or_else(|| FilterError::UnknownPillar(s.to_string()))
    }
}

impl std::fmt::Display for PillarFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Pillar> for PillarFilter {
    fn from(pillar: Pillar) -> Self {
        PillarFilter::Pillar(pillar)
    }
}

impl From<PillarFilter> for String {
    fn from(filter: PillarFilter) -> Self {
        filter.label().to_string()
    }
}

impl TryFrom<String> for PillarFilter {
    type Error = FilterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Cards passing `selector`, in catalog order.
#[must_use]
pub fn filter_by_pillar(catalog: &Catalog, selector: PillarFilter) -> Vec<&Card> {
    catalog.iter().filter(|c| selector.matches(c)).collect()
}

/// Card count per pillar, in pillar display order. Pillars with no cards
/// are reported as 0.
#[must_use]
pub fn pillar_counts(catalog: &Catalog) -> Vec<(Pillar, usize)> {
    Pillar::ALL
        .into_iter()
        .map(|p| (p, catalog.iter().filter(|c| c.pillar == p).count()))
        .collect()
}

/// Caption shown above the gallery grid.
#[must_use]
pub fn gallery_caption(count: usize) -> String {
    let plural = if count == 1 { "" } else { "S" };
    format!("{count} CARD{plural} · CLICK TO INSPECT")
}
