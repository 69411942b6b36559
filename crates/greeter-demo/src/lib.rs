//! # Closure-Greeter Demo
//!
//! Replays the closure walkthrough against any [`GreeterFactory`]:
//!
//! 1. Compose bob's message and pass it around by hand
//! 2. Greet through Pamela's single-closure greeter
//! 3. Build Tim and Pamela bundles and greet both
//! 4. Hand Tim's `greet` to a 100ms timer, detached from its bundle
//! 5. Start Tim's `slow_greet`
//!
//! The walkthrough returns once every scheduled greeting has fired.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use greeter_factory::{compose_message, schedule_once, GreeterFactory};
use tracing::info;

/// Delay before the detached `greet` is invoked.
pub const DETACHED_GREET_DELAY: Duration = Duration::from_millis(100);

/// Run the walkthrough, emitting through the factory's sink.
pub async fn run_walkthrough(factory: &GreeterFactory) -> Result<()> {
    let message = compose_message("bob", 47);
    info!(%message, "Message composed and passed around explicitly");

    let pamela_greeter = factory.greeter("Pamela", 27);
    pamela_greeter();

    let tim = factory.person("Tim", 28);
    let pamela = factory.person("Pamela", 27);
    info!(tim = %tim.id(), pamela = %pamela.id(), "Bundles created");

    (tim.greet)();
    (pamela.greet)();

    let mut pending = Vec::with_capacity(2);

    // Only the operation travels to the timer, not the bundle.
    let detached = Arc::clone(&tim.greet);
    pending.push(
        schedule_once(DETACHED_GREET_DELAY, move || detached())
            .context("Failed to schedule detached greet")?,
    );
    pending.push((tim.slow_greet)().context("Failed to start slow_greet")?);

    drop(tim);
    drop(pamela);

    for handle in pending {
        handle.await.context("Scheduled greeting task failed")?;
    }

    Ok(())
}
