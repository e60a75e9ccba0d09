//! Metrics for shuffle operations
//!
//! ## Usage
//!
//! ```rust
//! use fd_shuffle::metrics::Metrics;
//! use std::time::Duration;
//!
//! let metrics = Metrics::new();
//! metrics.record_shuffle(52, 51, Duration::from_micros(3));
//!
//! let snapshot = metrics.snapshot();
//! assert_eq!(snapshot.shuffles_performed, 1);
//! assert_eq!(snapshot.draws_consumed, 51);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Thread-safe counters for shuffle activity
#[derive(Debug, Default)]
pub struct Metrics {
    /// Completed shuffles
    pub shuffles_performed: AtomicU64,
    /// Items across all completed shuffles
    pub items_shuffled: AtomicU64,
    /// Draws taken from random sources
    pub draws_consumed: AtomicU64,
    /// Draws that came back outside their range
    pub contract_violations: AtomicU64,
    /// Uniformity analyses run
    pub analyses_run: AtomicU64,
    /// Cumulative shuffle time in nanoseconds
    pub shuffle_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed shuffle.
    pub fn record_shuffle(&self, items: usize, draws: usize, duration: Duration) {
        self.shuffles_performed.fetch_add(1, Ordering::Relaxed);
        self.items_shuffled.fetch_add(items as u64, Ordering::Relaxed);
        self.draws_consumed.fetch_add(draws as u64, Ordering::Relaxed);
        self.shuffle_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    pub fn record_contract_violation(&self) {
        self.contract_violations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_analysis(&self) {
        self.analyses_run.fetch_add(1, Ordering::Relaxed);
    }

    /// Average shuffle time in nanoseconds
    pub fn avg_shuffle_time_ns(&self) -> u64 {
        let total = self.shuffle_time_ns.load(Ordering::Relaxed);
        let count = self.shuffles_performed.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            shuffles_performed: self.shuffles_performed.load(Ordering::Relaxed),
            items_shuffled: self.items_shuffled.load(Ordering::Relaxed),
            draws_consumed: self.draws_consumed.load(Ordering::Relaxed),
            contract_violations: self.contract_violations.load(Ordering::Relaxed),
            analyses_run: self.analyses_run.load(Ordering::Relaxed),
            avg_shuffle_ns: self.avg_shuffle_time_ns(),
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub shuffles_performed: u64,
    pub items_shuffled: u64,
    pub draws_consumed: u64,
    pub contract_violations: u64,
    pub analyses_run: u64,
    pub avg_shuffle_ns: u64,
}
