//! # FD Shuffle
//!
//! Unbiased Fisher-Yates shuffling of card decks (and any slice) with an
//! injected source of randomness.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `Deck`: Ordered sequence of distinct card ids
//!   - `shuffle_in_place` / `shuffle_inside_out`: Fisher-Yates forms
//!   - `analyze`: Statistical uniformity check over all `n!` permutations
//!   - `ShuffleConfig`: Configuration with validation and builder
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `ShuffleApi`: Driving port (inbound API)
//!   - `RandomSource`: Driven port for uniform integers
//!   - `ConfigProvider`: Driven port for configuration
//!
//! - **Service Layer** (`service/`): `ShuffleService` implements `ShuffleApi`
//!
//! - **Adapters Layer** (`adapters/`): Random sources and config providers
//!
//! ## Invariants
//!
//! - **Permutation**: a shuffle never adds, drops or duplicates an element
//! - **Uniformity**: each draw comes from the shrinking range `[0, i]`, so all
//!   `n!` orderings are equally likely given a uniform source
//! - **Draw count**: exactly `n - 1` draws for `n >= 1`
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use fd_shuffle::{Deck, SeededRandomSource, ShuffleApi, ShuffleService};
//!
//! let service = ShuffleService::new(Arc::new(SeededRandomSource::new(42)));
//! let (deck, outcome) = service.deal().unwrap();
//!
//! assert!(deck.is_permutation_of(&Deck::standard()));
//! assert_eq!(outcome.draws, 51);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{
    FixedRandomSource, OsRandomSource, ScriptedRandomSource, SeededRandomSource,
    StaticConfigProvider,
};
#[cfg(feature = "toml-config")]
pub use adapters::TomlConfigProvider;
pub use domain::{
    AnalysisConfig, CardId, Deck, ShuffleConfig, ShuffleConfigBuilder, ShuffleVariant,
    UniformityReport, STANDARD_DECK_SIZE,
};
pub use error::{ConfigError, DeckError, ShuffleError};
pub use metrics::{Metrics, MetricsSnapshot};
pub use ports::{ConfigProvider, RandomSource, ShuffleApi, ShuffleOutcome};
pub use service::ShuffleService;
