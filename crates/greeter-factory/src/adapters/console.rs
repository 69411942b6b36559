//! Console Sink Adapter
//!
//! Writes greetings to stdout (or any writer) as text or JSON lines.

use crate::config::OutputFormat;
use crate::domain::Greeting;
use crate::ports::outbound::GreetingSink;
use parking_lot::Mutex;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Line-oriented console output.
pub struct ConsoleSink {
    format: OutputFormat,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    /// Sink writing to stdout.
    pub fn stdout(format: OutputFormat) -> Self {
        Self::with_writer(format, io::stdout())
    }

    /// Sink writing to an arbitrary writer.
    pub fn with_writer(format: OutputFormat, writer: impl Write + Send + 'static) -> Self {
        Self {
            format,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Output format in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render a greeting as a single line, without the trailing newline.
    pub fn render(&self, greeting: &Greeting) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Text => Ok(greeting.to_string()),
            OutputFormat::Json => serde_json::to_string(greeting),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout(OutputFormat::default())
    }
}

impl GreetingSink for ConsoleSink {
    fn emit(&self, greeting: Greeting) {
        let line = match self.render(&greeting) {
            Ok(line) => line,
            Err(e) => {
                warn!(kind = ?greeting.kind, error = %e, "Failed to render greeting");
                return;
            }
        };

        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!(kind = ?greeting.kind, error = %e, "Failed to write greeting");
            return;
        }

        debug!(kind = ?greeting.kind, format = ?self.format, "Greeting written");
    }
}
