//! Cross-crate integration flows.

pub mod config_flows;
pub mod deck_flows;
pub mod uniformity_flows;
