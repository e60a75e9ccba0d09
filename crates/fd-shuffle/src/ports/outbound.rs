//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces the shuffler **requires** the host application
//! to implement. Concrete implementations live in `adapters/`.

use crate::domain::ShuffleConfig;

/// Abstract interface for uniform random integers.
///
/// Injected into every shuffle so tests can substitute a deterministic
/// source without touching process-wide random state.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. A source shared across concurrent
/// shuffles is responsible for serializing access to its own state.
///
/// # Example Implementation
///
/// ```rust
/// use fd_shuffle::RandomSource;
///
/// struct AlwaysLast;
///
/// impl RandomSource for AlwaysLast {
///     fn random_usize(&self, bound: usize) -> usize {
///         bound.saturating_sub(1)
///     }
/// }
///
/// assert_eq!(AlwaysLast.random_usize(10), 9);
/// ```
pub trait RandomSource: Send + Sync {
    /// Return an integer drawn uniformly from `[0, bound)`.
    ///
    /// Callers in this crate never pass `bound == 0`. Returning a value
    /// `>= bound` is a contract violation and is reported as
    /// [`ShuffleError::DrawOutOfRange`](crate::ShuffleError::DrawOutOfRange).
    fn random_usize(&self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn random_usize(&self, bound: usize) -> usize {
        (**self).random_usize(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for std::sync::Arc<R> {
    fn random_usize(&self, bound: usize) -> usize {
        (**self).random_usize(bound)
    }
}

/// Abstract interface for configuration loading.
///
/// Allows different configuration sources (static values, TOML file).
pub trait ConfigProvider: Send + Sync {
    /// Get the shuffle configuration.
    fn shuffle_config(&self) -> ShuffleConfig;
}
