//! # Closure-Greeter Demo Binary
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (stderr)
//! 2. Load factory configuration from the environment
//! 3. Run the walkthrough, greetings on stdout
//! 4. Exit once every scheduled greeting has fired

use anyhow::{Context, Result};
use greeter_demo::run_walkthrough;
use greeter_factory::GreeterFactory;
use greeter_telemetry::{init_logging, TelemetryConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    init_logging(&telemetry).context("Failed to initialize logging")?;

    let factory = GreeterFactory::from_env().context("Invalid greeter configuration")?;
    info!(
        slow_greet_delay_ms = factory.config().slow_greet_delay.as_millis() as u64,
        output = %factory.config().output,
        "Starting walkthrough"
    );

    run_walkthrough(&factory).await?;

    info!("Walkthrough complete");
    Ok(())
}
