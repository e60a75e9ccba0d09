//! Fisher-Yates shuffle
//!
//! Both forms draw `j` from the shrinking range `[0, i]`, which is what makes
//! every one of the `n!` orderings equally likely. Drawing from the full
//! range `[0, n)` on every step is the classic biased shuffle and is not
//! offered here.
//!
//! INVARIANTS:
//! - Output is a permutation of the input (same multiset, same length)
//! - Exactly `n - 1` draws for `n >= 1`, none for `n == 0`

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ShuffleError};
use crate::ports::RandomSource;

/// Which form of Fisher-Yates to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShuffleVariant {
    /// In place, iterating from the last index down to 1
    #[default]
    Durstenfeld,
    /// Builds a new sequence front to back
    InsideOut,
}

impl ShuffleVariant {
    /// Stable name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ShuffleVariant::Durstenfeld => "durstenfeld",
            ShuffleVariant::InsideOut => "inside-out",
        }
    }
}

impl std::fmt::Display for ShuffleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShuffleVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "durstenfeld" => Ok(ShuffleVariant::Durstenfeld),
            "inside-out" | "inside_out" | "insideout" => Ok(ShuffleVariant::InsideOut),
            other => Err(ConfigError::InvalidVariant(other.to_string())),
        }
    }
}

/// Draw from `[0, bound)` and check the source kept its contract.
fn draw<R: RandomSource + ?Sized>(rng: &R, bound: usize) -> Result<usize, ShuffleError> {
    let drawn = rng.random_usize(bound);
    if drawn >= bound {
        return Err(ShuffleError::DrawOutOfRange { drawn, bound });
    }
    Ok(drawn)
}

/// Shuffle `items` in place (Durstenfeld form).
///
/// For `i` from `n - 1` down to 1, draws `j` uniformly from `[0, i]` and
/// swaps positions `i` and `j`. Returns the number of draws consumed.
///
/// A draw outside its range aborts before the swap at that step, so the
/// slice is still a permutation of its input when an error is returned.
///
/// # Example
///
/// ```rust
/// use fd_shuffle::adapters::ScriptedRandomSource;
/// use fd_shuffle::domain::shuffle_in_place;
///
/// let mut items = [0, 1, 2, 3];
/// let rng = ScriptedRandomSource::new(vec![0, 0, 0]);
/// let draws = shuffle_in_place(&mut items, &rng).unwrap();
///
/// assert_eq!(items, [1, 2, 3, 0]);
/// assert_eq!(draws, 3);
/// ```
pub fn shuffle_in_place<T, R>(items: &mut [T], rng: &R) -> Result<usize, ShuffleError>
where
    R: RandomSource + ?Sized,
{
    let mut draws = 0;
    for i in (1..items.len()).rev() {
        let j = draw(rng, i + 1)?;
        draws += 1;
        items.swap(i, j);
    }
    Ok(draws)
}

/// Shuffle into a new vector (inside-out form).
///
/// The first item is placed as-is; for each later item `i`, draws `j`
/// uniformly from `[0, i]`, appends the item and swaps it into position `j`.
/// Returns the shuffled items and the number of draws consumed.
pub fn shuffle_inside_out<T, I, R>(items: I, rng: &R) -> Result<(Vec<T>, usize), ShuffleError>
where
    I: IntoIterator<Item = T>,
    R: RandomSource + ?Sized,
{
    let iter = items.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0);
    let mut draws = 0;
    for (i, item) in iter.enumerate() {
        if i == 0 {
            out.push(item);
            continue;
        }
        let j = draw(rng, i + 1)?;
        draws += 1;
        out.push(item);
        out.swap(i, j);
    }
    Ok((out, draws))
}

/// Shuffle `items` in place with the requested variant.
///
/// The inside-out form needs owned items, so it works on a clone and writes
/// the result back only on success.
pub fn shuffle_with<T, R>(
    variant: ShuffleVariant,
    items: &mut [T],
    rng: &R,
) -> Result<usize, ShuffleError>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    match variant {
        ShuffleVariant::Durstenfeld => shuffle_in_place(items, rng),
        ShuffleVariant::InsideOut => {
            let (out, draws) = shuffle_inside_out(items.iter().cloned(), rng)?;
            items.clone_from_slice(&out);
            Ok(draws)
        }
    }
}
