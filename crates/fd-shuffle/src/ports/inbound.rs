//! Inbound Ports (Driving Ports)
//!
//! These traits define the API that callers use to shuffle decks.

use crate::domain::{AnalysisConfig, Deck, ShuffleVariant, UniformityReport};
use crate::error::ShuffleError;

/// What a single shuffle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShuffleOutcome {
    /// Algorithm form that was used
    pub variant: ShuffleVariant,
    /// Number of items in the shuffled sequence
    pub items: usize,
    /// Draws consumed from the random source (always `items - 1`, or 0)
    pub draws: usize,
}

/// Primary shuffle API (Driving Port)
pub trait ShuffleApi: Send + Sync {
    /// Shuffle a deck in place using the configured variant.
    ///
    /// On error the deck still holds a permutation of its original cards.
    fn shuffle_deck(&self, deck: &mut Deck) -> Result<ShuffleOutcome, ShuffleError>;

    /// Return a shuffled copy, leaving `deck` untouched.
    fn shuffled(&self, deck: &Deck) -> Result<(Deck, ShuffleOutcome), ShuffleError>;

    /// Build a fresh sorted deck of the configured size and shuffle it.
    fn deal(&self) -> Result<(Deck, ShuffleOutcome), ShuffleError>;

    /// Run the seeded statistical uniformity check.
    fn analyze_uniformity(&self, analysis: &AnalysisConfig)
        -> Result<UniformityReport, ShuffleError>;
}
