//! Shuffle configuration and validation
//!
//! # Example
//!
//! ```rust
//! use fd_shuffle::domain::{ShuffleConfigBuilder, ShuffleVariant};
//!
//! let config = ShuffleConfigBuilder::new()
//!     .deck_size(52)
//!     .variant(ShuffleVariant::InsideOut)
//!     .seed(42)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.seed, Some(42));
//! ```

use serde::{Deserialize, Serialize};

use super::deck::{MAX_DECK_SIZE, STANDARD_DECK_SIZE};
use super::fisher_yates::ShuffleVariant;
use super::uniformity::MAX_ANALYSIS_ITEMS;
use crate::error::ConfigError;

/// Shuffle configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShuffleConfig {
    /// Cards in a dealt deck (default 52)
    pub deck_size: usize,
    /// Fisher-Yates form
    pub variant: ShuffleVariant,
    /// Fixed seed for reproducible output; entropy when absent
    pub seed: Option<u64>,
    /// Uniformity analysis settings
    pub analysis: AnalysisConfig,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            deck_size: STANDARD_DECK_SIZE,
            variant: ShuffleVariant::Durstenfeld,
            seed: None,
            analysis: AnalysisConfig::default(),
        }
    }
}

impl ShuffleConfig {
    /// Validate deck size and analysis bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_size > MAX_DECK_SIZE {
            return Err(ConfigError::InvalidDeckSize {
                size: self.deck_size,
                max: MAX_DECK_SIZE,
            });
        }
        self.analysis.validate()
    }
}

/// Settings for the statistical uniformity check
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Sequence length to shuffle (1..=8)
    pub items: usize,
    /// Number of shuffles
    pub trials: u64,
    /// Independent parallel chunks; fixed so results don't depend on thread count
    pub chunks: usize,
    /// Allowed relative deviation from `trials / items!`
    pub tolerance: f64,
    /// Base seed for the per-chunk sources
    pub seed: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            items: 3,
            trials: 100_000,
            chunks: 16,
            tolerance: 0.05,
            seed: 0x5EED,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items == 0 || self.items > MAX_ANALYSIS_ITEMS {
            return Err(ConfigError::InvalidAnalysis(format!(
                "items must be between 1 and {MAX_ANALYSIS_ITEMS}, got {}",
                self.items
            )));
        }
        if self.trials == 0 {
            return Err(ConfigError::InvalidAnalysis(
                "trials must be at least 1".to_string(),
            ));
        }
        if self.chunks == 0 {
            return Err(ConfigError::InvalidAnalysis(
                "chunks must be at least 1".to_string(),
            ));
        }
        if !(self.tolerance > 0.0 && self.tolerance < 1.0) {
            return Err(ConfigError::InvalidAnalysis(format!(
                "tolerance must be in (0, 1), got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Builder for ShuffleConfig with validation
#[derive(Default)]
pub struct ShuffleConfigBuilder {
    deck_size: Option<usize>,
    variant: Option<ShuffleVariant>,
    seed: Option<u64>,
    analysis: Option<AnalysisConfig>,
}

impl ShuffleConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config, e.g. one loaded from a file.
    pub fn from_config(config: ShuffleConfig) -> Self {
        Self {
            deck_size: Some(config.deck_size),
            variant: Some(config.variant),
            seed: config.seed,
            analysis: Some(config.analysis),
        }
    }

    pub fn deck_size(mut self, size: usize) -> Self {
        self.deck_size = Some(size);
        self
    }

    pub fn variant(mut self, variant: ShuffleVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = Some(analysis);
        self
    }

    /// Build the ShuffleConfig, validating all parameters
    pub fn build(self) -> Result<ShuffleConfig, ConfigError> {
        let defaults = ShuffleConfig::default();

        let config = ShuffleConfig {
            deck_size: self.deck_size.unwrap_or(defaults.deck_size),
            variant: self.variant.unwrap_or(defaults.variant),
            seed: self.seed.or(defaults.seed),
            analysis: self.analysis.unwrap_or(defaults.analysis),
        };

        config.validate()?;
        Ok(config)
    }
}
