//! Configuration Provider Adapters
//!
//! - `StaticConfigProvider` - In-memory config (tests, embedding)
//! - `TomlConfigProvider` - Config file loading (requires "toml-config" feature)

use crate::domain::ShuffleConfig;
use crate::ports::ConfigProvider;

/// Static configuration provider with fixed values.
///
/// Useful for testing and embedding. For config files, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: ShuffleConfig,
}

impl StaticConfigProvider {
    /// Create with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specified config.
    #[must_use]
    pub fn with_config(mut self, config: ShuffleConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn shuffle_config(&self) -> ShuffleConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - Config File Loading (requires "toml-config" feature)
// ============================================================================

#[cfg(feature = "toml-config")]
mod toml_config {
    use super::*;
    use crate::domain::{AnalysisConfig, ShuffleVariant};
    use crate::error::ConfigError;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    /// Configuration file structure.
    #[derive(Debug, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    struct ConfigFile {
        #[serde(default)]
        shuffle: ShuffleSection,
        #[serde(default)]
        analysis: AnalysisSection,
    }

    #[derive(Debug, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    struct ShuffleSection {
        deck_size: Option<usize>,
        variant: Option<String>,
        seed: Option<u64>,
    }

    #[derive(Debug, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    struct AnalysisSection {
        items: Option<usize>,
        trials: Option<u64>,
        chunks: Option<usize>,
        tolerance: Option<f64>,
        seed: Option<u64>,
    }

    /// Configuration provider backed by a TOML file.
    ///
    /// Missing keys fall back to `ShuffleConfig::default()`.
    ///
    /// # File Format
    ///
    /// ```toml
    /// [shuffle]
    /// deck_size = 52
    /// variant = "durstenfeld"   # or "inside-out"
    /// seed = 42                 # omit for entropy
    ///
    /// [analysis]
    /// items = 3
    /// trials = 100000
    /// chunks = 16
    /// tolerance = 0.05
    /// seed = 24301
    /// ```
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        config: ShuffleConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read, parsed, or validated.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let defaults = ShuffleConfig::default();
            let variant = match file.shuffle.variant {
                Some(name) => name.parse::<ShuffleVariant>()?,
                None => defaults.variant,
            };

            let a = file.analysis;
            let analysis_defaults = AnalysisConfig::default();
            let analysis = AnalysisConfig {
                items: a.items.unwrap_or(analysis_defaults.items),
                trials: a.trials.unwrap_or(analysis_defaults.trials),
                chunks: a.chunks.unwrap_or(analysis_defaults.chunks),
                tolerance: a.tolerance.unwrap_or(analysis_defaults.tolerance),
                seed: a.seed.unwrap_or(analysis_defaults.seed),
            };

            let config = ShuffleConfig {
                deck_size: file.shuffle.deck_size.unwrap_or(defaults.deck_size),
                variant,
                seed: file.shuffle.seed,
                analysis,
            };
            config.validate()?;

            Ok(Self { config })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn shuffle_config(&self) -> ShuffleConfig {
            self.config.clone()
        }
    }
}

#[cfg(feature = "toml-config")]
pub use toml_config::TomlConfigProvider;
