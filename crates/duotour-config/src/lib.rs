//! Configuration system for duotour.
//!
//! Load search configuration from TOML or YAML to pick the local search,
//! its assertion level and its seed without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use duotour_config::{EnvironmentMode, SearchConfig, SearchType};
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     search_type = "cached_steepest"
//!     environment_mode = "fast_assert"
//!     stale_move_limit = 64
//!     split_ratio = 0.5
//! "#).unwrap();
//!
//! assert_eq!(config.search_type, SearchType::CachedSteepest);
//! assert_eq!(config.environment_mode, EnvironmentMode::FastAssert);
//! assert_eq!(config.stale_move_limit, Some(64));
//! assert!(config.confirm_local_optimum);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use duotour_config::SearchConfig;
//!
//! let config = SearchConfig::load("duotour.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Which local search to run.
    #[serde(default)]
    pub search_type: SearchType,

    /// Environment mode affecting reproducibility and assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for searches that shuffle their neighbourhood.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Re-enumerate the full neighbourhood before declaring convergence.
    #[serde(default = "default_true")]
    pub confirm_local_optimum: bool,

    /// Drop a cached move once it has been skipped as possibly applicable
    /// more than this many times.
    #[serde(default)]
    pub stale_move_limit: Option<u32>,

    /// Expected share of nodes in tour A, checked before the search starts.
    #[serde(default)]
    pub split_ratio: Option<f64>,
}

fn default_true() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_type: SearchType::default(),
            environment_mode: EnvironmentMode::default(),
            random_seed: None,
            confirm_local_optimum: true,
            stale_move_limit: None,
            split_ratio: None,
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ratio) = self.split_ratio {
            if !(ratio > 0.0 && ratio < 1.0) {
                return Err(ConfigError::Invalid(format!(
                    "split_ratio must be in (0, 1), got {}",
                    ratio
                )));
            }
        }
        if self.stale_move_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "stale_move_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the search type.
    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_confirm_local_optimum(mut self, confirm: bool) -> Self {
        self.confirm_local_optimum = confirm;
        self
    }

    pub fn with_stale_move_limit(mut self, limit: u32) -> Self {
        self.stale_move_limit = Some(limit);
        self
    }

    pub fn with_split_ratio(mut self, ratio: f64) -> Self {
        self.split_ratio = Some(ratio);
        self
    }

    /// Expected size of tour A for `node_count` nodes, if a split is set.
    ///
    /// ```
    /// use duotour_config::SearchConfig;
    ///
    /// let config = SearchConfig::new().with_split_ratio(0.5);
    /// assert_eq!(config.expected_split(101), Some(50));
    /// assert_eq!(SearchConfig::new().expected_split(101), None);
    /// ```
    pub fn expected_split(&self, node_count: usize) -> Option<usize> {
        self.split_ratio
            .map(|ratio| (node_count as f64 * ratio) as usize)
    }
}

/// Local search selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Steepest descent over an incrementally maintained move cache.
    #[default]
    CachedSteepest,

    /// Steepest descent that re-enumerates every move each step.
    Steepest,

    /// First-improvement descent over a shuffled neighbourhood.
    Greedy,
}

/// Environment mode affecting search behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Non-reproducible mode with minimal overhead.
    #[default]
    NonReproducible,

    /// Reproducible mode with deterministic behavior.
    Reproducible,

    /// Checks move cache ordering after every update.
    FastAssert,

    /// Also recomputes tour lengths and the partition after every move.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true if cache ordering should be asserted.
    pub fn is_asserted(self) -> bool {
        matches!(self, Self::FastAssert | Self::FullAssert)
    }

    /// Returns true if every applied move should be re-verified from scratch.
    pub fn is_fully_asserted(self) -> bool {
        matches!(self, Self::FullAssert)
    }

    /// Returns true if runs must not depend on entropy.
    pub fn is_reproducible(self) -> bool {
        !matches!(self, Self::NonReproducible)
    }
}

#[cfg(test)]
mod tests;
