//! Serial telemetry adapter.
//!
//! Implements [`TelemetrySink`] on the process stdout. On ESP-IDF, stdout is
//! the UART0 / USB-CDC console the serial monitor and plotter attach to; on
//! the host it is the terminal.

use std::io::Write;

use log::warn;

use crate::app::ports::TelemetrySink;

#[derive(Default)]
pub struct SerialTelemetry {
    failed: bool,
}

impl SerialTelemetry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TelemetrySink for SerialTelemetry {
    fn write_line(&mut self, line: &str) {
        let mut out = std::io::stdout().lock();
        match writeln!(out, "{line}").and_then(|()| out.flush()) {
            Ok(()) => self.failed = false,
            Err(e) => {
                // Warn once per outage, not once per line.
                if !self.failed {
                    warn!("serial write failed: {}", e);
                }
                self.failed = true;
            }
        }
    }
}
