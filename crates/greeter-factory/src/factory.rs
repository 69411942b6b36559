//! # Greeting Factory
//!
//! Three stages of the same greeting, from passing state around by hand to
//! hiding it inside closures:
//!
//! 1. [`compose_message`] returns the message and the caller carries it.
//! 2. [`GreeterFactory::greeter`] captures the message in a single closure.
//! 3. [`GreeterFactory::person`] captures it in a bundle of operations, one
//!    synchronous and one with asynchronous internals.
//!
//! Every closure binds its state when it is built. There is no receiver to
//! re-bind before a detached call.

use crate::adapters::ConsoleSink;
use crate::config::GreeterConfig;
use crate::domain::{GreeterError, Greeting};
use crate::ports::outbound::GreetingSink;
use crate::scheduler::schedule_once;
use std::fmt::{self, Display};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

/// Synchronous greeting operation.
pub type Greet = Arc<dyn Fn() + Send + Sync>;

/// Greeting operation that emits after the configured delay.
///
/// Returns the handle of the scheduled task, or [`GreeterError::NoRuntime`]
/// when called outside a tokio runtime.
pub type SlowGreet = Arc<dyn Fn() -> Result<JoinHandle<()>, GreeterError> + Send + Sync>;

/// Compose the greeting message. Inputs are not validated.
pub fn compose_message(name: &str, age: impl Display) -> String {
    format!("{}, who is {} years old, says Hi!", name, age)
}

/// Build a bundle with the default configuration, writing to stdout.
pub fn person(name: &str, age: impl Display) -> PersonBundle {
    GreeterFactory::default().person(name, age)
}

/// Operations sharing one captured message.
///
/// Fields are public so each operation can be cloned out and called on its
/// own, after the bundle itself is gone.
#[derive(Clone)]
pub struct PersonBundle {
    /// Emit the message now.
    pub greet: Greet,
    /// Emit the message after the configured delay.
    pub slow_greet: SlowGreet,
    id: Uuid,
}

impl PersonBundle {
    /// Correlation id used in log fields.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Debug for PersonBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonBundle")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Creates greeters and bundles sharing one sink and configuration.
pub struct GreeterFactory {
    sink: Arc<dyn GreetingSink>,
    config: GreeterConfig,
}

impl GreeterFactory {
    /// Create a factory emitting through `sink`.
    pub fn new(config: GreeterConfig, sink: Arc<dyn GreetingSink>) -> Self {
        Self { sink, config }
    }

    /// Create a factory from environment configuration, writing to stdout.
    pub fn from_env() -> Result<Self, GreeterError> {
        let config = GreeterConfig::from_env()?;
        let sink = Arc::new(ConsoleSink::stdout(config.output));
        Ok(Self::new(config, sink))
    }

    /// Configuration applied to new bundles.
    pub fn config(&self) -> &GreeterConfig {
        &self.config
    }

    /// A single closure emitting the captured message.
    pub fn greeter(&self, name: &str, age: impl Display) -> Greet {
        let message: Arc<str> = compose_message(name, age).into();
        let sink = Arc::clone(&self.sink);

        Arc::new(move || {
            debug!("greet (single closure)");
            sink.emit(Greeting::immediate(&*message));
        })
    }

    /// A bundle of `greet` and `slow_greet` over one captured message.
    pub fn person(&self, name: &str, age: impl Display) -> PersonBundle {
        let id = Uuid::new_v4();
        let message: Arc<str> = compose_message(name, age).into();
        let delay = self.config.slow_greet_delay;

        debug!(bundle_id = %id, delay_ms = delay.as_millis() as u64, "Bundle created");

        let greet: Greet = {
            let message = Arc::clone(&message);
            let sink = Arc::clone(&self.sink);
            Arc::new(move || {
                debug!(bundle_id = %id, "greet");
                sink.emit(Greeting::immediate(&*message));
            })
        };

        let slow_greet: SlowGreet = {
            let sink = Arc::clone(&self.sink);
            Arc::new(move || {
                debug!(bundle_id = %id, delay_ms = delay.as_millis() as u64, "slow_greet");
                let message = Arc::clone(&message);
                let sink = Arc::clone(&sink);
                schedule_once(delay, move || {
                    debug!(bundle_id = %id, "slow_greet firing");
                    sink.emit(Greeting::delayed(&*message));
                })
            })
        };

        PersonBundle {
            greet,
            slow_greet,
            id,
        }
    }
}

impl Default for GreeterFactory {
    fn default() -> Self {
        let config = GreeterConfig::default();
        let sink = Arc::new(ConsoleSink::stdout(config.output));
        Self::new(config, sink)
    }
}
