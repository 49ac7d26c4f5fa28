//! Card catalog.
//!
//! The `Catalog` is the fixed, ordered universe of cards for a session.
//! Order is significant: the gallery shows cards in catalog order and the
//! deck starts out in catalog order. Ids are validated unique on
//! construction, so every other component can treat an id as a key.

use std::path::Path;

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId};

/// Errors raised while building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate card id {0}")]
    DuplicateId(CardId),

    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered, id-unique sequence of cards.
///
/// ## Example
///
/// ```
/// use skill_duel::cards::{Card, CardId, Catalog, Pillar};
///
/// let catalog = Catalog::new(vec![
///     Card::new(CardId::new(1), "The Stakeholder Whisperer", Pillar::Deliver),
///     Card::new(CardId::new(4), "Architecture Archfiend", Pillar::Build),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(CardId::new(4)).unwrap().name, "Architecture Archfiend");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(cards: Vec<Card>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        index.reserve(cards.len());

        for (position, card) in cards.iter().enumerate() {
            if index.insert(card.id, position).is_some() {
                return Err(CatalogError::DuplicateId(card.id));
            }
        }

        Ok(Self { cards, index })
    }

    /// Parse a catalog from a JSON array of card records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Read a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Position of a card in catalog order.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over cards in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Iterate over ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Find cards matching a predicate, in catalog order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Pillar;

    fn card(id: u32, name: &str, pillar: Pillar) -> Card {
        Card::new(CardId::new(id), name, pillar)
    }

    #[test]
    fn test_new_and_get() {
        let catalog = Catalog::new(vec![
            card(1, "A", Pillar::Deliver),
            card(2, "B", Pillar::Build),
        ])
        .unwrap();

        assert_eq!(catalog.get(CardId::new(2)).unwrap().name, "B");
        assert!(catalog.get(CardId::new(99)).is_none());
        assert!(catalog.contains(CardId::new(1)));
        assert!(!catalog.contains(CardId::new(3)));
    }

    #[test]
    fn test_order_preserved() {
        let catalog = Catalog::new(vec![
            card(30, "C", Pillar::Govern),
            card(10, "A", Pillar::Deliver),
            card(20, "B", Pillar::Build),
        ])
        .unwrap();

        let ids: Vec<_> = catalog.ids().map(CardId::raw).collect();
        assert_eq!(ids, vec![30, 10, 20]);
        assert_eq!(catalog.position(CardId::new(10)), Some(1));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::new(vec![
            card(1, "A", Pillar::Deliver),
            card(1, "B", Pillar::Build),
        ])
        .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId(id) if id == CardId::new(1)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }

    #[test]
    fn test_find_with_predicate() {
        let catalog = Catalog::new(vec![
            card(1, "A", Pillar::Deliver).with_stats(800, 2800, 3),
            card(2, "B", Pillar::Build).with_stats(3200, 2400, 9),
        ])
        .unwrap();

        let strong: Vec<_> = catalog.find(|c| c.stats.atk >= 3000).collect();
        assert_eq!(strong.len(), 1);
        assert_eq!(strong[0].name, "B");
    }

    #[test]
    fn test_from_json() {
        let json = r##"[
            {"id": 1, "name": "A", "pillar": "DELIVER", "type": "Spell Card",
             "attribute": "LIGHT", "atk": 800, "def": 2800, "level": 3, "rarity": "Rare"},
            {"id": 2, "name": "B", "pillar": "GOVERN", "type": "Trap Card",
             "attribute": "DARK", "atk": 0, "def": 0, "level": 1, "rarity": "Common",
             "pillarColor": "#7A3A1A"}
        ]"##;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(CardId::new(2)).unwrap().pillar, Pillar::Govern);
    }

    #[test]
    fn test_from_json_duplicate() {
        let json = r#"[
            {"id": 5, "name": "A", "pillar": "BUILD", "type": "Spell Card",
             "attribute": "FIRE", "atk": 1, "def": 1, "level": 1, "rarity": "Common"},
            {"id": 5, "name": "B", "pillar": "BUILD", "type": "Spell Card",
             "attribute": "FIRE", "atk": 1, "def": 1, "level": 1, "rarity": "Common"}
        ]"#;

        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
