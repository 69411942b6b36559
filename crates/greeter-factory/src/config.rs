//! Greeter configuration from environment variables.

use crate::domain::GreeterError;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default delay before `slow_greet` emits.
pub const DEFAULT_SLOW_GREET_DELAY_MS: u64 = 1000;

/// Console rendering of greetings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain lines; delayed greetings carry a `slowgreet: ` label.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = GreeterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(GreeterError::Config(format!(
                "unknown output format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Configuration applied to every bundle a factory creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreeterConfig {
    /// Delay between `slow_greet` returning and the greeting being emitted.
    pub slow_greet_delay: Duration,

    /// Console output format.
    pub output: OutputFormat,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            slow_greet_delay: Duration::from_millis(DEFAULT_SLOW_GREET_DELAY_MS),
            output: OutputFormat::Text,
        }
    }
}

impl GreeterConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GREETER_SLOW_DELAY_MS`: `slow_greet` delay in ms (default: 1000)
    /// - `GREETER_OUTPUT`: `text` or `json` (default: text)
    pub fn from_env() -> Result<Self, GreeterError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GreeterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let slow_greet_delay = match lookup("GREETER_SLOW_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| {
                    GreeterError::Config(format!("GREETER_SLOW_DELAY_MS='{}': {}", raw, e))
                })?,
            None => defaults.slow_greet_delay,
        };

        let output = match lookup("GREETER_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => defaults.output,
        };

        Ok(Self {
            slow_greet_delay,
            output,
        })
    }

    /// Override the `slow_greet` delay.
    pub fn with_slow_greet_delay(mut self, delay: Duration) -> Self {
        self.slow_greet_delay = delay;
        self
    }
}
