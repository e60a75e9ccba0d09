//! Subcommand implementations. Each returns the text to print on stdout.

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use fd_shuffle::domain::permutation_from_rank;
use fd_shuffle::{
    Deck, FixedRandomSource, OsRandomSource, RandomSource, SeededRandomSource, ShuffleApi,
    ShuffleConfig, ShuffleService, UniformityReport,
};
use tracing::info;

/// Deal one shuffled deck.
///
/// Seeded configs use `SeededRandomSource` so the output is reproducible;
/// otherwise the deck is shuffled from OS entropy.
pub fn run_shuffle(config: ShuffleConfig, json: bool) -> Result<String> {
    let deck = match config.seed {
        Some(seed) => deal(SeededRandomSource::new(seed), config)?,
        None => deal(OsRandomSource::new(), config)?,
    };

    if json {
        serde_json::to_string(&deck).context("serializing deck")
    } else {
        Ok(deck.to_string())
    }
}

fn deal<R: RandomSource>(rng: R, config: ShuffleConfig) -> Result<Deck> {
    let seeded = config.seed.is_some();
    let service = ShuffleService::with_config(Arc::new(rng), config);
    let (deck, outcome) = service.deal().context("shuffling deck")?;
    info!(
        cards = outcome.items,
        draws = outcome.draws,
        variant = %outcome.variant,
        seeded,
        "dealt deck"
    );
    Ok(deck)
}

/// Result of the `analyze` command
#[derive(Debug)]
pub struct AnalysisOutput {
    pub text: String,
    pub passed: bool,
}

/// Run the uniformity check and render the frequency table.
///
/// The analysis seeds its own per-chunk sources, so the service's source is
/// never drawn from.
pub fn run_analyze(config: ShuffleConfig) -> Result<AnalysisOutput> {
    let analysis = config.analysis.clone();
    let variant = config.variant;
    let service = ShuffleService::with_config(Arc::new(FixedRandomSource::first()), config);
    let report = service
        .analyze_uniformity(&analysis)
        .context("running uniformity analysis")?;

    let passed = report.is_within(analysis.tolerance);
    let text = render_report(&report, variant.as_str(), analysis.tolerance, passed);
    Ok(AnalysisOutput { text, passed })
}

/// Render a report as a fixed-width table.
pub fn render_report(
    report: &UniformityReport,
    variant: &str,
    tolerance: f64,
    passed: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{variant}: {} items, {} trials, {} permutations, expected {:.1} each",
        report.items, report.trials, report.permutations, report.expected
    );
    for (rank, &count) in report.counts.iter().enumerate() {
        let perm = permutation_from_rank(report.items, rank);
        let deviation = if report.expected > 0.0 {
            (count as f64 - report.expected) / report.expected * 100.0
        } else {
            0.0
        };
        let label = format!("{perm:?}");
        let _ = writeln!(
            out,
            "  {label:<width$} {count:>10} {:>8.4} {deviation:>+7.2}%",
            report.frequency(rank),
            width = report.items * 3 + 2,
        );
    }
    let _ = writeln!(
        out,
        "chi-square {:.3} ({} dof), max deviation {:.2}% (tolerance {:.2}%)",
        report.chi_square,
        report.degrees_of_freedom,
        report.max_relative_deviation * 100.0,
        tolerance * 100.0
    );
    let _ = write!(out, "{}", if passed { "UNIFORM" } else { "BIASED" });
    out
}
