//! # Domain Errors
//!
//! Greeting inputs are never validated, so nothing here concerns names or
//! ages. These errors cover configuration and scheduling only.

use thiserror::Error;

/// Greeter error types.
#[derive(Debug, Error)]
pub enum GreeterError {
    /// An environment value could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A delayed greeting was requested outside a tokio runtime.
    #[error("No tokio runtime available to schedule a delayed greeting")]
    NoRuntime,
}
