//! Statistical uniformity check for shuffles
//!
//! Shuffles `0..items` many times, counts how often each of the `items!`
//! permutations appears, and compares the counts against the uniform
//! expectation `trials / items!`. A biased shuffle (for example one that
//! draws from the full range on every step) shows up as permutations that
//! are consistently over- or under-represented.
//!
//! Trials are split into a fixed number of chunks that run in parallel.
//! Each chunk gets its own random source seeded from `(seed, chunk)`, so a
//! report depends only on its inputs and never on thread scheduling.

use rayon::prelude::*;
use tracing::debug;

use super::fisher_yates::{shuffle_with, ShuffleVariant};
use crate::error::ShuffleError;
use crate::ports::RandomSource;

/// Largest sequence the analysis accepts (8! = 40 320 buckets)
pub const MAX_ANALYSIS_ITEMS: usize = 8;

/// `n!` for the small `n` used in analysis.
pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}

/// Lexicographic rank of a permutation of `0..perm.len()` (Lehmer code).
///
/// The identity ranks 0 and the reversed sequence ranks `n! - 1`.
pub fn permutation_rank(perm: &[usize]) -> usize {
    let n = perm.len();
    let mut rank = 0;
    for i in 0..n {
        let smaller_after = perm[i + 1..].iter().filter(|&&v| v < perm[i]).count();
        rank += smaller_after * factorial(n - 1 - i);
    }
    rank
}

/// Per-permutation counts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationHistogram {
    items: usize,
    counts: Vec<u64>,
    trials: u64,
}

impl PermutationHistogram {
    /// Create an empty histogram for permutations of `items` elements.
    pub fn new(items: usize) -> Result<Self, ShuffleError> {
        validate_items(items)?;
        Ok(Self::empty(items))
    }

    fn empty(items: usize) -> Self {
        Self {
            items,
            counts: vec![0; factorial(items)],
            trials: 0,
        }
    }

    /// Count one observed permutation of `0..items`.
    pub fn record(&mut self, perm: &[usize]) {
        debug_assert_eq!(perm.len(), self.items);
        self.counts[permutation_rank(perm)] += 1;
        self.trials += 1;
    }

    /// Add another histogram's counts into this one.
    pub fn merge(&mut self, other: &PermutationHistogram) {
        debug_assert_eq!(self.items, other.items);
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
        }
        self.trials += other.trials;
    }

    /// Count for the permutation with the given rank.
    pub fn count(&self, rank: usize) -> u64 {
        self.counts.get(rank).copied().unwrap_or(0)
    }

    /// All counts, indexed by permutation rank.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total permutations recorded.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Summarize the histogram against the uniform expectation.
    pub fn report(&self) -> UniformityReport {
        let permutations = self.counts.len();
        let expected = self.trials as f64 / permutations as f64;

        let mut chi_square = 0.0;
        let mut max_relative_deviation: f64 = 0.0;
        for &count in &self.counts {
            let diff = count as f64 - expected;
            if expected > 0.0 {
                chi_square += diff * diff / expected;
                max_relative_deviation = max_relative_deviation.max(diff.abs() / expected);
            }
        }

        UniformityReport {
            items: self.items,
            trials: self.trials,
            permutations,
            expected,
            min_count: self.counts.iter().copied().min().unwrap_or(0),
            max_count: self.counts.iter().copied().max().unwrap_or(0),
            max_relative_deviation,
            chi_square,
            degrees_of_freedom: permutations.saturating_sub(1),
            counts: self.counts.clone(),
        }
    }
}

/// Result of a uniformity run
#[derive(Clone, Debug, PartialEq)]
pub struct UniformityReport {
    pub items: usize,
    pub trials: u64,
    /// `items!`
    pub permutations: usize,
    /// Expected count per permutation under a uniform shuffle
    pub expected: f64,
    pub min_count: u64,
    pub max_count: u64,
    /// Largest `|count - expected| / expected` over all permutations
    pub max_relative_deviation: f64,
    /// Pearson chi-square statistic
    pub chi_square: f64,
    pub degrees_of_freedom: usize,
    /// Counts indexed by permutation rank
    pub counts: Vec<u64>,
}

impl UniformityReport {
    /// True if every permutation is within `tolerance` (relative) of the
    /// expected count.
    pub fn is_within(&self, tolerance: f64) -> bool {
        self.trials > 0 && self.max_relative_deviation <= tolerance
    }

    /// Observed frequency of the permutation with the given rank.
    pub fn frequency(&self, rank: usize) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.counts.get(rank).copied().unwrap_or(0) as f64 / self.trials as f64
    }
}

/// Inverse of [`permutation_rank`].
pub fn permutation_from_rank(items: usize, mut rank: usize) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..items).collect();
    let mut perm = Vec::with_capacity(items);
    for i in (0..items).rev() {
        let f = factorial(i);
        let idx = rank / f;
        rank %= f;
        perm.push(pool.remove(idx.min(pool.len().saturating_sub(1))));
    }
    perm
}

fn validate_items(items: usize) -> Result<(), ShuffleError> {
    if items == 0 || items > MAX_ANALYSIS_ITEMS {
        return Err(ShuffleError::InvalidAnalysis(format!(
            "items must be between 1 and {MAX_ANALYSIS_ITEMS}, got {items}"
        )));
    }
    Ok(())
}

/// SplitMix64 finalizer, used to spread chunk seeds apart.
fn mix_seed(seed: u64, chunk: u64) -> u64 {
    let mut z = seed.wrapping_add(chunk.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Shuffle `0..items` `trials` times and report how uniform the results are.
///
/// `make_source` builds one random source per chunk from a derived seed.
pub fn analyze<R, F>(
    variant: ShuffleVariant,
    items: usize,
    trials: u64,
    chunks: usize,
    seed: u64,
    make_source: F,
) -> Result<UniformityReport, ShuffleError>
where
    R: RandomSource,
    F: Fn(u64) -> R + Sync,
{
    validate_items(items)?;
    if trials == 0 {
        return Err(ShuffleError::InvalidAnalysis(
            "trials must be at least 1".to_string(),
        ));
    }
    if chunks == 0 {
        return Err(ShuffleError::InvalidAnalysis(
            "chunks must be at least 1".to_string(),
        ));
    }

    let chunks = (chunks as u64).min(trials);
    let per_chunk = trials / chunks;
    let remainder = trials % chunks;

    let histogram = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let chunk_trials = per_chunk + u64::from(chunk < remainder);
            let rng = make_source(mix_seed(seed, chunk));
            let mut hist = PermutationHistogram::empty(items);
            let mut perm = Vec::with_capacity(items);
            for _ in 0..chunk_trials {
                perm.clear();
                perm.extend(0..items);
                shuffle_with(variant, &mut perm, &rng)?;
                hist.record(&perm);
            }
            Ok::<_, ShuffleError>(hist)
        })
        .try_reduce(
            || PermutationHistogram::empty(items),
            |mut acc, hist| {
                acc.merge(&hist);
                Ok(acc)
            },
        )?;

    let report = histogram.report();
    debug!(
        items,
        trials,
        chunks,
        %variant,
        chi_square = report.chi_square,
        max_relative_deviation = report.max_relative_deviation,
        "uniformity analysis complete"
    );
    Ok(report)
}
