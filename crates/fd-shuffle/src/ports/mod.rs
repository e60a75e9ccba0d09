//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for callers
//! - Driven Ports (outbound) - randomness and configuration the shuffler needs

pub mod inbound;
pub mod outbound;

pub use inbound::{ShuffleApi, ShuffleOutcome};
pub use outbound::{ConfigProvider, RandomSource};
