//! Config resolution: defaults < TOML file < command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use fd_shuffle::{
    AnalysisConfig, ConfigProvider, ShuffleConfig, ShuffleConfigBuilder, StaticConfigProvider,
    TomlConfigProvider,
};

use crate::cli::{AnalyzeArgs, ShuffleArgs};

/// Load the base config from a file, or defaults when no file is given.
pub fn load_base(path: Option<&Path>) -> Result<ShuffleConfig> {
    let config = match path {
        Some(path) => TomlConfigProvider::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?
            .shuffle_config(),
        None => StaticConfigProvider::new().shuffle_config(),
    };
    Ok(config)
}

/// Apply `shuffle` flags on top of the base config.
pub fn resolve_shuffle(base: ShuffleConfig, args: &ShuffleArgs) -> Result<ShuffleConfig> {
    let mut builder = ShuffleConfigBuilder::from_config(base);
    if let Some(size) = args.size {
        builder = builder.deck_size(size);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if let Some(variant) = args.variant {
        builder = builder.variant(variant.into());
    }
    builder.build().context("invalid shuffle settings")
}

/// Apply `analyze` flags on top of the base config.
pub fn resolve_analysis(base: ShuffleConfig, args: &AnalyzeArgs) -> Result<ShuffleConfig> {
    let file = base.analysis.clone();
    let analysis = AnalysisConfig {
        items: args.items.unwrap_or(file.items),
        trials: args.trials.unwrap_or(file.trials),
        chunks: args.chunks.unwrap_or(file.chunks),
        tolerance: args.tolerance.unwrap_or(file.tolerance),
        seed: args.seed.unwrap_or(file.seed),
    };

    let mut builder = ShuffleConfigBuilder::from_config(base).analysis(analysis);
    if let Some(variant) = args.variant {
        builder = builder.variant(variant.into());
    }
    builder.build().context("invalid analysis settings")
}
