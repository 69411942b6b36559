//! # Outbound Ports
//!
//! Where greetings go once an operation fires.

use crate::domain::Greeting;
use std::sync::Arc;

/// Destination for emitted greetings.
///
/// Shared by every operation of every bundle a factory creates, and called
/// from spawned tasks, hence `Send + Sync`.
pub trait GreetingSink: Send + Sync {
    /// Deliver one greeting. Must not panic on I/O failure.
    fn emit(&self, greeting: Greeting);
}

impl<T: GreetingSink + ?Sized> GreetingSink for Arc<T> {
    fn emit(&self, greeting: Greeting) {
        (**self).emit(greeting)
    }
}
