//! # Ports Layer
//!
//! Dependency traits the factory's operations emit through.

pub mod outbound;

pub use outbound::GreetingSink;
