//! Duel configuration.
//!
//! Sessions are configured at startup with a `DuelConfig`:
//! - `seed`: fixes the draw sequence (`None` seeds from OS entropy)
//! - `field_capacity`: maximum cards on the field
//!
//! Values come from the builder, from `SKILL_DUEL_*` environment
//! variables, or from any serde format.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Default maximum number of cards on the field.
pub const FIELD_CAPACITY: usize = 4;

/// Environment variable holding a fixed draw seed.
pub const SEED_ENV: &str = "SKILL_DUEL_SEED";

/// Environment variable overriding the field capacity.
pub const FIELD_CAPACITY_ENV: &str = "SKILL_DUEL_FIELD_CAPACITY";

/// Errors raised while building a configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("field capacity must be at least 1 (got {0})")]
    InvalidFieldCapacity(usize),

    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
}

/// Configuration for a duel session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Draw seed. `None` picks one from OS entropy per session.
    pub seed: Option<u64>,

    /// Maximum number of cards on the field.
    pub field_capacity: usize,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            seed: None,
            field_capacity: FIELD_CAPACITY,
        }
    }
}

impl DuelConfig {
    /// Create the default configuration (random seed, capacity 4).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the draw seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the field capacity.
    #[must_use]
    pub fn with_field_capacity(mut self, capacity: usize) -> Self {
        self.field_capacity = capacity;
        self
    }

    /// Load overrides from `SKILL_DUEL_SEED` and
    /// `SKILL_DUEL_FIELD_CAPACITY`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: SEED_ENV,
                value: raw.clone(),
            })?;
            config.seed = Some(seed);
        }

        if let Some(raw) = lookup(FIELD_CAPACITY_ENV) {
            let capacity = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: FIELD_CAPACITY_ENV,
                value: raw.clone(),
            })?;
            config.field_capacity = capacity;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_capacity == 0 {
            return Err(ConfigError::InvalidFieldCapacity(self.field_capacity));
        }
        Ok(())
    }

    /// Build the RNG for a new session.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DrawSource;

    #[test]
    fn test_defaults() {
        let config = DuelConfig::new();
        assert_eq!(config.seed, None);
        assert_eq!(config.field_capacity, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DuelConfig::new().with_seed(9).with_field_capacity(2);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.field_capacity, 2);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = DuelConfig::new().with_field_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidFieldCapacity(0)));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = DuelConfig::new().with_seed(42);
        let mut a = config.rng();
        let mut b = config.rng();
        assert_eq!(a.pick(100), b.pick(100));
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_from_lookup() {
        let config = DuelConfig::from_lookup(|var| match var {
            SEED_ENV => Some("17".to_string()),
            FIELD_CAPACITY_ENV => Some(" 3 ".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.seed, Some(17));
        assert_eq!(config.field_capacity, 3);
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = DuelConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DuelConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = DuelConfig::from_lookup(|var| {
            (var == SEED_ENV).then(|| "forty-two".to_string())
        })
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: SEED_ENV,
                value: "forty-two".to_string(),
            }
        );
    }

    #[test]
    fn test_from_lookup_rejects_zero_capacity() {
        let err = DuelConfig::from_lookup(|var| {
            (var == FIELD_CAPACITY_ENV).then(|| "0".to_string())
        })
        .unwrap_err();

        assert_eq!(err, ConfigError::InvalidFieldCapacity(0));
    }

    #[test]
    fn test_serde_defaults_missing_fields() {
        let config: DuelConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.field_capacity, FIELD_CAPACITY);
    }
}
