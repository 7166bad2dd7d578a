//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, clock, serial, chip info) implement
//! these traits. The [`Controller`](super::service::Controller) consumes them
//! via generics, so the domain core never touches hardware directly.
//!
//! Every port is infallible from the domain's point of view: adapters
//! absorb driver errors (NaN for a failed humidity read, a `warn!` for a
//! failed GPIO write) so the control loop never stops.

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Analog inputs sampled by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalogChannel {
    /// Light-dependent resistor standing in for the pH probe.
    PhProxy,
}

/// Digital inputs sampled by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitalChannel {
    Phosphorus,
    Potassium,
}

/// Read-side port: raw sensor values, no interpretation.
pub trait SensorPort {
    /// Relative humidity in percent, or `f32::NAN` when the read failed.
    fn read_humidity(&mut self) -> f32;

    /// Raw 12-bit ADC value (0 – 4095).
    fn read_analog(&mut self, channel: AnalogChannel) -> u16;

    /// Raw logic level of a digital input (`true` = HIGH).
    fn read_digital(&mut self, channel: DigitalChannel) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Energise or release the pump relay.
    fn set_pump(&mut self, on: bool);

    /// Light or clear the pump indicator.
    fn set_indicator(&mut self, on: bool);

    /// Last commanded pump state.
    fn pump_commanded(&self) -> bool;

    /// Drive pump and indicator together as one actuator write.
    fn apply_pump(&mut self, on: bool) {
        self.set_pump(on);
        self.set_indicator(on);
    }
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.
///
/// The counter wraps at `u32::MAX` (~49.7 days); consumers compare with
/// `wrapping_sub`, never with absolute values.
pub trait ClockPort {
    fn now_millis(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Telemetry sink (domain → serial port)
// ───────────────────────────────────────────────────────────────

/// Append-only, order-preserving line output. Fire-and-forget.
pub trait TelemetrySink {
    fn write_line(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// System information (diagnostics only)
// ───────────────────────────────────────────────────────────────

/// Chip-level figures quoted in the diagnostic stream.
pub trait SystemInfoPort {
    /// Free heap in bytes.
    fn free_heap_bytes(&self) -> u32;

    /// Current CPU clock in MHz.
    fn cpu_freq_mhz(&self) -> u32;
}
