//! Service Layer
//!
//! Orchestrates domain logic with the injected random source.

pub mod shuffle_service;

pub use shuffle_service::ShuffleService;
