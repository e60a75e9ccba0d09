//! Deck of distinct card identifiers
//!
//! INVARIANTS:
//! - A deck of size `n` holds each id in `0..n` exactly once
//! - Shuffling changes order only, never the multiset of ids

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DeckError;

/// Size of a standard playing-card deck
pub const STANDARD_DECK_SIZE: usize = 52;

/// Largest deck representable with `u16` card ids
pub const MAX_DECK_SIZE: usize = u16::MAX as usize + 1;

/// Identifier of a single card, in `[0, deck size)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u16);

impl CardId {
    /// Create a card id.
    pub fn new(id: u16) -> Self {
        Self(id)
    }

    /// The id as an index into a sorted deck.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl From<CardId> for usize {
    fn from(card: CardId) -> Self {
        card.index()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered sequence of distinct card ids
///
/// The caller owns the deck; a shuffle borrows it mutably for one call and
/// never retains it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<CardId>,
}

impl Deck {
    /// The sorted 52-card deck.
    pub fn standard() -> Self {
        Self::sorted(STANDARD_DECK_SIZE)
    }

    /// A sorted deck of `size` cards.
    pub fn with_size(size: usize) -> Result<Self, DeckError> {
        if size > MAX_DECK_SIZE {
            return Err(DeckError::TooLarge {
                size,
                max: MAX_DECK_SIZE,
            });
        }
        Ok(Self::sorted(size))
    }

    /// Build a deck from explicit ids.
    ///
    /// `ids` must be a permutation of `0..ids.len()`.
    pub fn from_ids<I>(ids: I) -> Result<Self, DeckError>
    where
        I: IntoIterator,
        I::Item: Into<usize>,
    {
        let ids: Vec<usize> = ids.into_iter().map(Into::into).collect();
        let size = ids.len();
        if size > MAX_DECK_SIZE {
            return Err(DeckError::TooLarge {
                size,
                max: MAX_DECK_SIZE,
            });
        }

        let mut seen = vec![false; size];
        let mut cards = Vec::with_capacity(size);
        for id in ids {
            if id >= size {
                return Err(DeckError::CardOutOfRange { id, size });
            }
            if std::mem::replace(&mut seen[id], true) {
                return Err(DeckError::DuplicateCard { id });
            }
            // id < size <= MAX_DECK_SIZE, so it fits in u16
            cards.push(CardId(id as u16));
        }
        Ok(Self { cards })
    }

    fn sorted(size: usize) -> Self {
        let cards = (0..size).map(|id| CardId(id as u16)).collect();
        Self { cards }
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True for the empty deck.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in current order.
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Card ids as plain integers, in current order.
    pub fn ids(&self) -> Vec<usize> {
        self.iter().copied().map(usize::from).collect()
    }

    /// Iterate over the cards in order.
    pub fn iter(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter()
    }

    /// True if the cards are in ascending order.
    pub fn is_sorted(&self) -> bool {
        self.cards.windows(2).all(|w| w[0] <= w[1])
    }

    /// True if both decks hold the same multiset of cards.
    pub fn is_permutation_of(&self, other: &Deck) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut a = self.cards.clone();
        let mut b = other.cards.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    /// Mutable access for in-place shuffling. Only reorders are allowed.
    pub(crate) fn cards_mut(&mut self) -> &mut [CardId] {
        &mut self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

impl<'de> Deserialize<'de> for Deck {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ids: Vec<u16> = Deserialize::deserialize(deserializer)?;
        Deck::from_ids(ids.into_iter().map(usize::from)).map_err(serde::de::Error::custom)
    }
}
