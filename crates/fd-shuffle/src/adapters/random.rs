//! Random Source Adapters

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Fixed random source for deterministic testing.
///
/// Always returns the same value (reduced modulo the bound).
///
/// # Example
///
/// ```rust
/// use fd_shuffle::adapters::FixedRandomSource;
/// use fd_shuffle::RandomSource;
///
/// let rng = FixedRandomSource::new(42);
/// assert_eq!(rng.random_usize(100), 42);
/// assert_eq!(rng.random_usize(100), 42); // Always same value
/// ```
#[derive(Debug, Clone)]
pub struct FixedRandomSource {
    value: usize,
}

impl FixedRandomSource {
    /// Create a fixed random source that always returns the given value.
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    /// Create a random source that returns 0.
    pub fn first() -> Self {
        Self::new(0)
    }
}

impl RandomSource for FixedRandomSource {
    fn random_usize(&self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.value % bound
        }
    }
}

/// Replays a known sequence of draws, for golden-output tests.
///
/// Draws are returned exactly as scripted (not reduced), so a script that
/// exceeds a bound exercises the contract-violation path. After the script
/// runs out it starts again from the beginning; an empty script returns 0.
///
/// Every requested bound is kept for `bounds_seen`, so memory grows with the
/// number of draws. Meant for tests, not long-lived use.
#[derive(Debug)]
pub struct ScriptedRandomSource {
    script: Vec<usize>,
    state: Mutex<ScriptState>,
}

#[derive(Debug, Default)]
struct ScriptState {
    consumed: usize,
    bounds: Vec<usize>,
}

impl ScriptedRandomSource {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            state: Mutex::new(ScriptState::default()),
        }
    }

    /// Number of draws taken so far.
    pub fn draws_consumed(&self) -> usize {
        lock(&self.state).consumed
    }

    /// Bounds requested by each draw, in order.
    pub fn bounds_seen(&self) -> Vec<usize> {
        lock(&self.state).bounds.clone()
    }
}

impl RandomSource for ScriptedRandomSource {
    fn random_usize(&self, bound: usize) -> usize {
        let mut state = lock(&self.state);
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[state.consumed % self.script.len()]
        };
        state.consumed += 1;
        state.bounds.push(bound);
        value
    }
}

/// Seeded source backed by `StdRng`.
///
/// The same seed always yields the same draw sequence, which makes shuffles
/// reproducible without a hand-written script.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn random_usize(&self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        lock(&self.rng).gen_range(0..bound)
    }
}

/// Production random source seeded from OS entropy.
#[derive(Debug)]
pub struct OsRandomSource {
    rng: Mutex<StdRng>,
}

impl OsRandomSource {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl Default for OsRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsRandomSource {
    fn random_usize(&self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        lock(&self.rng).gen_range(0..bound)
    }
}
