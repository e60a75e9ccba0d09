//! # FD Telemetry
//!
//! Structured logging for the Fair-Deck binaries, built on `tracing` and
//! `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fd_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FD_LOG_LEVEL` | `info` | Log level filter; a valid `RUST_LOG` overrides it |
//! | `FD_JSON_LOGS` | `false` | JSON log lines |
//! | `FD_CONSOLE_OUTPUT` | `true` | Disable to silence logs |
//! | `FD_SERVICE_NAME` | `fair-deck` | Service name in the startup line |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}
