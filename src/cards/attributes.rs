//! Typed card attributes.
//!
//! Every card carries the same fixed set of display attributes. The duel
//! engine only ever reads `Pillar` (for gallery filtering); the rest is
//! passed through to the presentation layer untouched.
//!
//! ## Attribute Types
//!
//! - `Pillar`: skill taxonomy pillar (DELIVER, BUILD, ...)
//! - `CardKind`: spell/trap/monster frame
//! - `Attribute`: elemental attribute (LIGHT, DARK, ...)
//! - `Rarity`: Common through Secret Rare
//! - `Stats`: ATK/DEF/level
//!
//! Serde names match the display labels, so catalog JSON reads naturally
//! (`"pillar": "CROSS-CUTTING"`, `"rarity": "Super Rare"`).

use serde::{Deserialize, Serialize};

/// Skill taxonomy pillar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pillar {
    #[serde(rename = "DELIVER")]
    Deliver,
    #[serde(rename = "BUILD")]
    Build,
    #[serde(rename = "OPERATE")]
    Operate,
    #[serde(rename = "GOVERN")]
    Govern,
    #[serde(rename = "CROSS-CUTTING")]
    CrossCutting,
}

impl Pillar {
    /// All pillars in display order.
    pub const ALL: [Pillar; 5] = [
        Pillar::Deliver,
        Pillar::Build,
        Pillar::Operate,
        Pillar::Govern,
        Pillar::CrossCutting,
    ];

    /// Display label, e.g. `"CROSS-CUTTING"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Pillar::Deliver => "DELIVER",
            Pillar::Build => "BUILD",
            Pillar::Operate => "OPERATE",
            Pillar::Govern => "GOVERN",
            Pillar::CrossCutting => "CROSS-CUTTING",
        }
    }

    /// Look up a pillar by label. Case-insensitive; `_` is accepted for `-`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(&normalized))
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card frame type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    #[serde(rename = "Spell Card")]
    Spell,
    #[serde(rename = "Trap Card")]
    Trap,
    #[serde(rename = "Continuous Spell")]
    ContinuousSpell,
    #[serde(rename = "Continuous Trap")]
    ContinuousTrap,
    #[serde(rename = "Effect Monster")]
    EffectMonster,
    #[serde(rename = "Fusion Monster")]
    FusionMonster,
    #[serde(rename = "Ritual Monster")]
    RitualMonster,
    #[serde(rename = "XYZ Monster")]
    XyzMonster,
}

impl CardKind {
    /// Display label, e.g. `"Effect Monster"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CardKind::Spell => "Spell Card",
            CardKind::Trap => "Trap Card",
            CardKind::ContinuousSpell => "Continuous Spell",
            CardKind::ContinuousTrap => "Continuous Trap",
            CardKind::EffectMonster => "Effect Monster",
            CardKind::FusionMonster => "Fusion Monster",
            CardKind::RitualMonster => "Ritual Monster",
            CardKind::XyzMonster => "XYZ Monster",
        }
    }

    /// Frame glyph shown next to the type line.
    #[must_use]
    pub const fn icon(self) -> char {
        match self {
            CardKind::Spell => '✦',
            CardKind::Trap => '▲',
            CardKind::ContinuousSpell | CardKind::ContinuousTrap => '∞',
            CardKind::EffectMonster => '★',
            CardKind::FusionMonster => '◈',
            CardKind::RitualMonster => '◉',
            CardKind::XyzMonster => '⬟',
        }
    }

    /// Monsters show ATK/DEF and level stars; spells and traps do not.
    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(
            self,
            CardKind::EffectMonster
                | CardKind::FusionMonster
                | CardKind::RitualMonster
                | CardKind::XyzMonster
        )
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Elemental attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Attribute {
    Light,
    Dark,
    Fire,
    Wind,
    Earth,
}

impl Attribute {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Attribute::Light => "LIGHT",
            Attribute::Dark => "DARK",
            Attribute::Fire => "FIRE",
            Attribute::Wind => "WIND",
            Attribute::Earth => "EARTH",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card rarity, ordered from most to least common.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    #[serde(rename = "Super Rare")]
    SuperRare,
    #[serde(rename = "Ultra Rare")]
    UltraRare,
    #[serde(rename = "Secret Rare")]
    SecretRare,
}

impl Rarity {
    /// Full name, e.g. `"Super Rare"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::SuperRare => "Super Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::SecretRare => "Secret Rare",
        }
    }

    /// Short badge label (N, R, SR, UR, ScR).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rarity::Common => "N",
            Rarity::Rare => "R",
            Rarity::SuperRare => "SR",
            Rarity::UltraRare => "UR",
            Rarity::SecretRare => "ScR",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric ratings printed on the card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub atk: u32,
    pub def: u32,
    pub level: u8,
}

impl Stats {
    #[must_use]
    pub const fn new(atk: u32, def: u32, level: u8) -> Self {
        Self { atk, def, level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pillar_labels_roundtrip() {
        for pillar in Pillar::ALL {
            assert_eq!(Pillar::from_label(pillar.label()), Some(pillar));
        }
    }

    #[test]
    fn test_pillar_from_label_is_lenient_on_case() {
        assert_eq!(Pillar::from_label("deliver"), Some(Pillar::Deliver));
        assert_eq!(Pillar::from_label("cross_cutting"), Some(Pillar::CrossCutting));
        assert_eq!(Pillar::from_label(" Govern "), Some(Pillar::Govern));
        assert_eq!(Pillar::from_label("TRAIN"), None);
    }

    #[test]
    fn test_pillar_serde_uses_labels() {
        let json = serde_json::to_string(&Pillar::CrossCutting).unwrap();
        assert_eq!(json, "\"CROSS-CUTTING\"");

        let parsed: Pillar = serde_json::from_str("\"OPERATE\"").unwrap();
        assert_eq!(parsed, Pillar::Operate);
    }

    #[test]
    fn test_card_kind_monsters() {
        assert!(CardKind::EffectMonster.is_monster());
        assert!(CardKind::XyzMonster.is_monster());
        assert!(!CardKind::Spell.is_monster());
        assert!(!CardKind::ContinuousTrap.is_monster());
    }

    #[test]
    fn test_card_kind_serde() {
        let json = serde_json::to_string(&CardKind::ContinuousSpell).unwrap();
        assert_eq!(json, "\"Continuous Spell\"");
        assert_eq!(CardKind::ContinuousSpell.icon(), CardKind::ContinuousTrap.icon());
    }

    #[test]
    fn test_attribute_serde() {
        let json = serde_json::to_string(&Attribute::Earth).unwrap();
        assert_eq!(json, "\"EARTH\"");
        assert_eq!(Attribute::Earth.to_string(), "EARTH");
    }

    #[test]
    fn test_rarity_labels() {
        assert_eq!(Rarity::SecretRare.label(), "ScR");
        assert_eq!(Rarity::SuperRare.to_string(), "Super Rare");
        assert!(Rarity::Common < Rarity::SecretRare);

        let parsed: Rarity = serde_json::from_str("\"Ultra Rare\"").unwrap();
        assert_eq!(parsed, Rarity::UltraRare);
    }
}
