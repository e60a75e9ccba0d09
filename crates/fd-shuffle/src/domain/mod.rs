//! Domain Layer - Pure shuffle logic
//!
//! This layer contains:
//! - Deck of distinct card ids
//! - Fisher-Yates in Durstenfeld and inside-out forms
//! - Statistical uniformity analysis
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Randomness only through the `RandomSource` port

pub mod config;
pub mod deck;
pub mod fisher_yates;
pub mod uniformity;

pub use config::{AnalysisConfig, ShuffleConfig, ShuffleConfigBuilder};
pub use deck::{CardId, Deck, MAX_DECK_SIZE, STANDARD_DECK_SIZE};
pub use fisher_yates::{shuffle_in_place, shuffle_inside_out, shuffle_with, ShuffleVariant};
pub use uniformity::{
    analyze, factorial, permutation_from_rank, permutation_rank, PermutationHistogram,
    UniformityReport, MAX_ANALYSIS_ITEMS,
};
