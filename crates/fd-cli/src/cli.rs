//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fd_shuffle::ShuffleVariant;

/// Fair-Deck: unbiased Fisher-Yates shuffling
#[derive(Parser, Debug)]
#[command(name = "fair-deck", version)]
#[command(about = "Deal uniformly shuffled decks and check shuffle uniformity")]
pub struct Cli {
    /// TOML config file; flags override its values
    #[arg(short, long, global = true, env = "FD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level or filter directive (overrides FD_LOG_LEVEL; RUST_LOG still wins)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shuffle a sorted deck and print it
    Shuffle(ShuffleArgs),
    /// Shuffle a small sequence many times and compare permutation counts
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Default)]
pub struct ShuffleArgs {
    /// Number of cards
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fisher-Yates form
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,

    /// Print a JSON array instead of a bracketed list
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Sequence length (1-8)
    #[arg(short, long)]
    pub items: Option<usize>,

    /// Number of shuffles
    #[arg(short, long)]
    pub trials: Option<u64>,

    /// Base seed for the per-chunk random sources
    #[arg(long)]
    pub seed: Option<u64>,

    /// Parallel chunks
    #[arg(long)]
    pub chunks: Option<usize>,

    /// Allowed relative deviation per permutation
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Fisher-Yates form
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Durstenfeld,
    InsideOut,
}

impl From<VariantArg> for ShuffleVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Durstenfeld => ShuffleVariant::Durstenfeld,
            VariantArg::InsideOut => ShuffleVariant::InsideOut,
        }
    }
}
