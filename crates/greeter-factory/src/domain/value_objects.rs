//! # Domain Value Objects
//!
//! Immutable values handed to a [`GreetingSink`](crate::ports::GreetingSink).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which operation produced a greeting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreetingKind {
    /// Emitted synchronously by `greet`.
    Immediate,
    /// Emitted by `slow_greet` once its delay elapsed.
    Delayed,
}

impl GreetingKind {
    /// Label printed in front of the message in text output, if any.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Immediate => None,
            Self::Delayed => Some("slowgreet"),
        }
    }
}

/// One emitted greeting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    /// Producing operation.
    pub kind: GreetingKind,
    /// The composed message, unchanged since construction.
    pub message: String,
}

impl Greeting {
    /// Create an immediate greeting.
    pub fn immediate(message: impl Into<String>) -> Self {
        Self {
            kind: GreetingKind::Immediate,
            message: message.into(),
        }
    }

    /// Create a delayed greeting.
    pub fn delayed(message: impl Into<String>) -> Self {
        Self {
            kind: GreetingKind::Delayed,
            message: message.into(),
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.label() {
            Some(label) => write!(f, "{}: {}", label, self.message),
            None => f.write_str(&self.message),
        }
    }
}
