//! Mock adapters for integration tests.
//!
//! [`MockField`] serves scripted sensor values and records every actuator
//! call; [`MockClock`] is advanced by hand; [`RecordingSink`] keeps every
//! telemetry line in order.

use std::cell::Cell;

use farmtech::app::ports::{
    ActuatorPort, AnalogChannel, ClockPort, DigitalChannel, SensorPort, SystemInfoPort,
    TelemetrySink,
};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Pump(bool),
    Indicator(bool),
}

// ── MockField ─────────────────────────────────────────────────

/// Sensor inputs held constant until a test changes them.
pub struct MockField {
    pub humidity: f32,
    pub ph_raw: u16,
    /// Raw pin levels; HIGH means absent.
    pub phosphorus_level: bool,
    pub potassium_level: bool,
    pub calls: Vec<ActuatorCall>,
    pub(crate) pump: bool,
}

#[allow(dead_code)]
impl MockField {
    /// Healthy soil: 45 %, pH 7.0, both nutrients present.
    pub fn healthy() -> Self {
        Self {
            humidity: 45.0,
            ph_raw: 2048,
            phosphorus_level: false,
            potassium_level: false,
            calls: Vec::new(),
            pump: false,
        }
    }

    pub fn pump_writes(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::Pump(on) => Some(*on),
                ActuatorCall::Indicator(_) => None,
            })
            .collect()
    }

    pub fn indicator_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::Indicator(on) => Some(*on),
                ActuatorCall::Pump(_) => None,
            })
            .unwrap_or(false)
    }
}

impl SensorPort for MockField {
    fn read_humidity(&mut self) -> f32 {
        self.humidity
    }

    fn read_analog(&mut self, _channel: AnalogChannel) -> u16 {
        self.ph_raw
    }

    fn read_digital(&mut self, channel: DigitalChannel) -> bool {
        match channel {
            DigitalChannel::Phosphorus => self.phosphorus_level,
            DigitalChannel::Potassium => self.potassium_level,
        }
    }
}

impl ActuatorPort for MockField {
    fn set_pump(&mut self, on: bool) {
        self.pump = on;
        self.calls.push(ActuatorCall::Pump(on));
    }

    fn set_indicator(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Indicator(on));
    }

    fn pump_commanded(&self) -> bool {
        self.pump
    }
}

// ── MockClock ─────────────────────────────────────────────────

#[derive(Default)]
pub struct MockClock {
    now: Cell<u32>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn at(ms: u32) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn now(&self) -> u32 {
        self.now.get()
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl ClockPort for MockClock {
    fn now_millis(&self) -> u32 {
        self.now.get()
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub lines: Vec<String>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn count_starting_with(&self, prefix: &str) -> usize {
        self.lines.iter().filter(|l| l.starts_with(prefix)).count()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl TelemetrySink for RecordingSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}

// ── FixedChip ─────────────────────────────────────────────────

pub struct FixedChip;

impl SystemInfoPort for FixedChip {
    fn free_heap_bytes(&self) -> u32 {
        200_000
    }

    fn cpu_freq_mhz(&self) -> u32 {
        240
    }
}
