//! # Fair-Deck Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks
//! │   └── shuffle_benchmarks.rs
//! └── src/integration/  # cross-crate flows
//!     ├── deck_flows.rs
//!     ├── config_flows.rs
//!     └── uniformity_flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p fd-tests
//!
//! # By category
//! cargo test -p fd-tests integration::uniformity_flows
//!
//! # Benchmarks
//! cargo bench -p fd-tests
//! ```

pub mod integration;
