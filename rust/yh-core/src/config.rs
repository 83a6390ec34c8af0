//! Rule-set configuration (YAML).
//!
//! Every field is optional in the file; missing fields take the standard
//! Yahtzee values. Load with [`RulesConfig::load`] and check with
//! [`RulesConfig::validate`] before building a [`RuleSet`](crate::RuleSet).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Payouts and thresholds for the lower-section rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Minimum repetitions for "three of a kind".
    #[serde(default = "default_three_of_kind")]
    pub three_of_kind: u8,
    /// Minimum repetitions for "four of a kind".
    #[serde(default = "default_four_of_kind")]
    pub four_of_kind: u8,
    /// Flat payout for a full house.
    #[serde(default = "default_full_house")]
    pub full_house: u32,
    /// Flat payout for four consecutive faces.
    #[serde(default = "default_small_straight")]
    pub small_straight: u32,
    /// Flat payout for five consecutive faces.
    #[serde(default = "default_large_straight")]
    pub large_straight: u32,
    /// Flat payout for five of a kind.
    #[serde(default = "default_yahtzee")]
    pub yahtzee: u32,
}

fn default_three_of_kind() -> u8 {
    3
}

fn default_four_of_kind() -> u8 {
    4
}

fn default_full_house() -> u32 {
    25
}

fn default_small_straight() -> u32 {
    30
}

fn default_large_straight() -> u32 {
    40
}

fn default_yahtzee() -> u32 {
    50
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            three_of_kind: default_three_of_kind(),
            four_of_kind: default_four_of_kind(),
            full_house: default_full_house(),
            small_straight: default_small_straight(),
            large_straight: default_large_straight(),
            yahtzee: default_yahtzee(),
        }
    }
}

impl RulesConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: RulesConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, n) in [
            ("three_of_kind", self.three_of_kind),
            ("four_of_kind", self.four_of_kind),
        ] {
            if !(1..=5).contains(&n) {
                return Err(ConfigError::Invalid(format!("{name} must be in 1..=5")));
            }
        }
        for (name, score) in [
            ("full_house", self.full_house),
            ("small_straight", self.small_straight),
            ("large_straight", self.large_straight),
            ("yahtzee", self.yahtzee),
        ] {
            if score == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be > 0")));
            }
        }
        Ok(())
    }
}
