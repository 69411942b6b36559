//! # Greeter Telemetry
//!
//! Structured logging for Closure-Greeter binaries.
//!
//! Logs are written to stderr so stdout carries greetings only.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use greeter_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GREETER_SERVICE_NAME` | `closure-greeter` | Service name logged at startup |
//! | `GREETER_LOG_LEVEL` | `info` | Log filter (falls back to `RUST_LOG`) |
//! | `GREETER_JSON_LOGS` | `false` | JSON formatted logs |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter directive could not be parsed.
    #[error("Invalid log filter '{directive}': {reason}")]
    Filter {
        /// Offending directive
        directive: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}
