//! # Greeter Factory
//!
//! Closures as a substitute for object-based encapsulation.
//!
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Purpose
//!
//! A factory takes a name and an age, composes a greeting message once, and
//! returns a bundle of operations that capture that message:
//! - `greet` emits the message immediately
//! - `slow_greet` schedules the message on a tokio timer and returns at once
//!
//! The message has no accessor. The operations can be cloned out of the
//! bundle and called anywhere, and they still emit the message they captured.
//!
//! ## Module Structure
//!
//! ```text
//! greeter-factory/
//! ├── domain/          # Greeting, GreetingKind, GreeterError
//! ├── ports/           # GreetingSink outbound trait
//! ├── adapters/        # ConsoleSink, RecordingSink
//! ├── config.rs        # GreeterConfig (environment driven)
//! ├── factory.rs       # compose_message, GreeterFactory, PersonBundle
//! └── scheduler.rs     # One-shot delayed tasks on tokio
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! let tim = greeter_factory::person("Tim", 28);
//! let greet = tim.greet.clone();
//! drop(tim);
//! greet(); // Tim, who is 28 years old, says Hi!
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod factory;
pub mod ports;
pub mod scheduler;

// Re-exports
pub use adapters::{ConsoleSink, RecordingSink};
pub use config::{GreeterConfig, OutputFormat, DEFAULT_SLOW_GREET_DELAY_MS};
pub use domain::{GreeterError, Greeting, GreetingKind};
pub use factory::{compose_message, person, Greet, GreeterFactory, PersonBundle, SlowGreet};
pub use ports::GreetingSink;
pub use scheduler::schedule_once;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
