//! # Configuration Flows
//!
//! TOML file on disk, then CLI flag overrides, then a dealt deck.
//! Checks that the CLI layer and a direct library call agree on the
//! same resolved config.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use fd_cli::cli::{AnalyzeArgs, ShuffleArgs, VariantArg};
    use fd_cli::commands::{run_analyze, run_shuffle};
    use fd_cli::settings::{load_base, resolve_analysis, resolve_shuffle};
    use fd_shuffle::{
        ConfigError, ConfigProvider, Deck, SeededRandomSource, ShuffleApi, ShuffleService,
        ShuffleVariant, TomlConfigProvider,
    };
    use tempfile::NamedTempFile;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const SEEDED_CONFIG: &str = r#"
        [shuffle]
        deck_size = 16
        variant = "inside-out"
        seed = 77

        [analysis]
        items = 3
        trials = 30000
        chunks = 4
        tolerance = 0.08
        seed = 5
    "#;

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_file_values_reach_the_service() {
        let file = write_config(SEEDED_CONFIG);
        let provider = TomlConfigProvider::load(file.path()).unwrap();
        let config = provider.shuffle_config();

        assert_eq!(config.deck_size, 16);
        assert_eq!(config.variant, ShuffleVariant::InsideOut);
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.analysis.chunks, 4);

        let service = ShuffleService::with_config(Arc::new(SeededRandomSource::new(77)), config);
        let (deck, outcome) = service.deal().unwrap();
        assert_eq!(deck.len(), 16);
        assert_eq!(outcome.variant, ShuffleVariant::InsideOut);
        assert_eq!(outcome.draws, 15);
    }

    #[test]
    fn test_cli_output_matches_library_call() {
        let file = write_config(SEEDED_CONFIG);
        let base = load_base(Some(file.path())).unwrap();
        let config = resolve_shuffle(base, &ShuffleArgs::default()).unwrap();
        let printed = run_shuffle(config.clone(), true).unwrap();

        let service = ShuffleService::with_config(Arc::new(SeededRandomSource::new(77)), config);
        let (expected, _) = service.deal().unwrap();

        let deck: Deck = serde_json::from_str(&printed).unwrap();
        assert_eq!(deck, expected);
    }

    #[test]
    fn test_flags_override_file() {
        let file = write_config(SEEDED_CONFIG);
        let base = load_base(Some(file.path())).unwrap();
        let args = ShuffleArgs {
            size: Some(5),
            variant: Some(VariantArg::Durstenfeld),
            ..Default::default()
        };

        let config = resolve_shuffle(base, &args).unwrap();
        assert_eq!(config.deck_size, 5);
        assert_eq!(config.variant, ShuffleVariant::Durstenfeld);
        assert_eq!(config.seed, Some(77));

        let printed = run_shuffle(config, false).unwrap();
        assert_eq!(printed.split(", ").count(), 5);
    }

    #[test]
    fn test_analysis_settings_from_file() {
        let file = write_config(SEEDED_CONFIG);
        let base = load_base(Some(file.path())).unwrap();
        let config = resolve_analysis(base, &AnalyzeArgs::default()).unwrap();

        assert_eq!(config.analysis.trials, 30_000);
        assert_eq!(config.analysis.tolerance, 0.08);

        let output = run_analyze(config).unwrap();
        assert!(output.passed, "{}", output.text);
        assert!(output.text.starts_with("inside-out: 3 items, 30000 trials"));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let file = write_config("[shuffle]\nseed = 3\n");
        let config = load_base(Some(file.path())).unwrap();
        assert_eq!(config.deck_size, 52);
        assert_eq!(config.variant, ShuffleVariant::Durstenfeld);
        assert_eq!(config.analysis.items, 3);
    }

    #[test]
    fn test_bad_files_are_rejected() {
        let unknown_key = write_config("[shuffle]\ndecksize = 10\n");
        assert!(matches!(
            TomlConfigProvider::load(unknown_key.path()),
            Err(ConfigError::Parse(_))
        ));

        let bad_variant = write_config("[shuffle]\nvariant = \"riffle\"\n");
        assert!(matches!(
            TomlConfigProvider::load(bad_variant.path()),
            Err(ConfigError::InvalidVariant(_))
        ));

        let too_many_items = write_config("[analysis]\nitems = 12\n");
        assert!(matches!(
            TomlConfigProvider::load(too_many_items.path()),
            Err(ConfigError::InvalidAnalysis(_))
        ));

        let oversized = write_config("[shuffle]\ndeck_size = 70000\n");
        assert!(matches!(
            TomlConfigProvider::load(oversized.path()),
            Err(ConfigError::InvalidDeckSize { size: 70_000, .. })
        ));
    }
}
