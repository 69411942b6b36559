//! Recording Sink Adapter
//!
//! Keeps greetings in memory in emission order.

use crate::domain::{Greeting, GreetingKind};
use crate::ports::outbound::GreetingSink;
use parking_lot::Mutex;
use tracing::debug;

/// In-memory sink.
#[derive(Default)]
pub struct RecordingSink {
    greetings: Mutex<Vec<Greeting>>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn greetings(&self) -> Vec<Greeting> {
        self.greetings.lock().clone()
    }

    /// Messages of the given kind, in emission order.
    pub fn messages(&self, kind: GreetingKind) -> Vec<String> {
        self.greetings
            .lock()
            .iter()
            .filter(|g| g.kind == kind)
            .map(|g| g.message.clone())
            .collect()
    }

    /// Number of greetings emitted so far.
    pub fn len(&self) -> usize {
        self.greetings.lock().len()
    }

    /// True if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.greetings.lock().is_empty()
    }
}

impl GreetingSink for RecordingSink {
    fn emit(&self, greeting: Greeting) {
        debug!(kind = ?greeting.kind, "Greeting recorded");
        self.greetings.lock().push(greeting);
    }
}
