//! Shuffle Service
//!
//! Wires the domain algorithms to the injected random source, and records
//! metrics and logs around each call.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::adapters::SeededRandomSource;
use crate::domain::{analyze, shuffle_with, AnalysisConfig, Deck, ShuffleConfig, UniformityReport};
use crate::error::ShuffleError;
use crate::metrics::Metrics;
use crate::ports::{RandomSource, ShuffleApi, ShuffleOutcome};

/// Shuffle Service implementation
///
/// Implements the `ShuffleApi` port using an injected random source.
pub struct ShuffleService<R: RandomSource> {
    /// Random source (driven port)
    rng: Arc<R>,
    config: ShuffleConfig,
    metrics: Arc<Metrics>,
}

impl<R: RandomSource> ShuffleService<R> {
    /// Create a new service with the default configuration
    pub fn new(rng: Arc<R>) -> Self {
        Self::with_config(rng, ShuffleConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(rng: Arc<R>, config: ShuffleConfig) -> Self {
        Self {
            rng,
            config,
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Share a metrics collector with other components
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &ShuffleConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    fn shuffle_cards(&self, deck: &mut Deck) -> Result<ShuffleOutcome, ShuffleError> {
        let variant = self.config.variant;
        let items = deck.len();
        let start = Instant::now();

        match shuffle_with(variant, deck.cards_mut(), self.rng.as_ref()) {
            Ok(draws) => {
                self.metrics.record_shuffle(items, draws, start.elapsed());
                debug!(items, draws, %variant, "deck shuffled");
                Ok(ShuffleOutcome {
                    variant,
                    items,
                    draws,
                })
            }
            Err(e) => {
                if matches!(e, ShuffleError::DrawOutOfRange { .. }) {
                    self.metrics.record_contract_violation();
                }
                warn!(items, %variant, error = %e, "shuffle aborted");
                Err(e)
            }
        }
    }
}

impl<R: RandomSource> ShuffleApi for ShuffleService<R> {
    fn shuffle_deck(&self, deck: &mut Deck) -> Result<ShuffleOutcome, ShuffleError> {
        self.shuffle_cards(deck)
    }

    fn shuffled(&self, deck: &Deck) -> Result<(Deck, ShuffleOutcome), ShuffleError> {
        let mut copy = deck.clone();
        let outcome = self.shuffle_cards(&mut copy)?;
        Ok((copy, outcome))
    }

    fn deal(&self) -> Result<(Deck, ShuffleOutcome), ShuffleError> {
        let mut deck = Deck::with_size(self.config.deck_size)?;
        let outcome = self.shuffle_cards(&mut deck)?;
        Ok((deck, outcome))
    }

    fn analyze_uniformity(
        &self,
        analysis: &AnalysisConfig,
    ) -> Result<UniformityReport, ShuffleError> {
        analysis.validate()?;
        let report = analyze(
            self.config.variant,
            analysis.items,
            analysis.trials,
            analysis.chunks,
            analysis.seed,
            SeededRandomSource::new,
        )?;
        self.metrics.record_analysis();

        info!(
            items = report.items,
            trials = report.trials,
            chi_square = report.chi_square,
            max_relative_deviation = report.max_relative_deviation,
            within_tolerance = report.is_within(analysis.tolerance),
            "uniformity analysis finished"
        );
        Ok(report)
    }
}
