//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the `GreetingSink` port.

mod console;
mod recording;

pub use console::ConsoleSink;
pub use recording::RecordingSink;
