//! # One-shot Scheduler
//!
//! Runs an owned closure once, after a delay, on the ambient tokio runtime.

use crate::domain::GreeterError;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Schedule `task` to run once after `delay`.
///
/// Returns immediately. The task never runs on the caller's stack, even with
/// a zero delay. Fails with [`GreeterError::NoRuntime`] when called outside
/// a tokio runtime.
pub fn schedule_once<F>(delay: Duration, task: F) -> Result<JoinHandle<()>, GreeterError>
where
    F: FnOnce() + Send + 'static,
{
    let handle = Handle::try_current().map_err(|_| GreeterError::NoRuntime)?;

    debug!(delay_ms = delay.as_millis() as u64, "Scheduling one-shot task");

    Ok(handle.spawn(async move {
        tokio::time::sleep(delay).await;
        trace!(delay_ms = delay.as_millis() as u64, "One-shot task firing");
        task();
    }))
}
