//! Error types for the shuffle library

use thiserror::Error;

/// Errors that can occur while shuffling or analysing shuffles
#[derive(Debug, Error)]
pub enum ShuffleError {
    /// The injected random source broke its contract.
    #[error("Random source returned {drawn}, expected a value below {bound}")]
    DrawOutOfRange { drawn: usize, bound: usize },

    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("Invalid analysis parameters: {0}")]
    InvalidAnalysis(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from deck construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("Card {id} is out of range for a deck of {size}")]
    CardOutOfRange { id: usize, size: usize },

    #[error("Card {id} appears more than once")]
    DuplicateCard { id: usize },

    #[error("Deck size exceeds maximum: {size} > {max}")]
    TooLarge { size: usize, max: usize },
}

/// Errors from configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid deck size: {size} (maximum {max})")]
    InvalidDeckSize { size: usize, max: usize },

    #[error("Invalid analysis config: {0}")]
    InvalidAnalysis(String),

    #[error("Unknown shuffle variant: {0}")]
    InvalidVariant(String),

    #[error("Failed to read {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config file: {0}")]
    Parse(String),
}
