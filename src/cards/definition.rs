//! Card records - static card data.
//!
//! A `Card` is immutable for the lifetime of a session. The duel engine
//! only reads `id` and `pillar`; everything else is display data.

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, CardKind, Pillar, Rarity, Stats};

/// Unique identifier for a card in a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A skill card.
///
/// ## Example
///
/// ```
/// use skill_duel::cards::{Card, CardId, CardKind, Pillar, Rarity};
///
/// let oracle = Card::new(CardId::new(2), "Technical Oracle", Pillar::Deliver)
///     .with_kind(CardKind::EffectMonster)
///     .with_stats(2100, 1600, 6)
///     .with_rarity(Rarity::SuperRare);
///
/// assert!(oracle.kind.is_monster());
/// assert_eq!(oracle.stats.atk, 2100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,

    pub name: String,

    /// Slug of the skill this card represents.
    #[serde(default)]
    pub skill: String,

    pub pillar: Pillar,

    #[serde(rename = "type")]
    pub kind: CardKind,

    pub attribute: Attribute,

    #[serde(flatten)]
    pub stats: Stats,

    pub rarity: Rarity,

    /// Single-glyph artwork.
    #[serde(default)]
    pub art: String,

    #[serde(default)]
    pub flavor_text: String,

    #[serde(default)]
    pub effect: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Card {
    /// Create a card with blank display data.
    ///
    /// Defaults to a Common LIGHT spell with zero stats.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, pillar: Pillar) -> Self {
        Self {
            id,
            name: name.into(),
            skill: String::new(),
            pillar,
            kind: CardKind::Spell,
            attribute: Attribute::Light,
            stats: Stats::default(),
            rarity: Rarity::Common,
            art: String::new(),
            flavor_text: String::new(),
            effect: String::new(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = skill.into();
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: CardKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = attribute;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, atk: u32, def: u32, level: u8) -> Self {
        self.stats = Stats::new(atk, def, level);
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = art.into();
        self
    }

    #[must_use]
    pub fn with_flavor_text(mut self, text: impl Into<String>) -> Self {
        self.flavor_text = text.into();
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = effect.into();
        self
    }

    /// Replace the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether the card carries a tag (case-insensitive).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
