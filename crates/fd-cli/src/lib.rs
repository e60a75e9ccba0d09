//! Fair-Deck command line.
//!
//! `main.rs` only parses arguments, sets up logging and prints; the command
//! logic lives here so it can be tested without spawning the binary.

pub mod cli;
pub mod commands;
pub mod settings;
