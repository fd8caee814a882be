//! # Oracle Telemetry
//!
//! Structured logging for the price oracle, built on `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use oracle_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_tracing(&config).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ORACLE_SERVICE_NAME` | `price-oracle` | Service name on every log line |
//! | `ORACLE_LOG_LEVEL` | `info` | Log filter (falls back to `RUST_LOG`) |
//! | `ORACLE_JSON_LOGS` | `false` | JSON output (defaults to true in containers) |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}
