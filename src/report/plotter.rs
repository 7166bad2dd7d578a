//! Serial-plotter stream: one `Label:value` line per tick, fixed field
//! order, every signal scaled onto its own band of a shared chart.

use core::fmt::Write;

use crate::config::PlotterScale;
use crate::control::PumpState;
use crate::sensors::SensorReading;

use super::Line;

/// Render one plotter line.
pub fn line(reading: &SensorReading, pump: PumpState, scale: &PlotterScale) -> Line {
    let mut out = Line::new();
    let written = write!(
        out,
        "Humidity:{:.1},pH:{:.1},Pump:{},Phosphorus:{},Potassium:{}",
        reading.humidity,
        reading.ph * scale.ph_gain,
        level(pump.is_on(), scale.pump_level),
        level(reading.phosphorus_present, scale.phosphorus_level),
        level(reading.potassium_present, scale.potassium_level),
    );
    if written.is_err() {
        log::warn!("plotter line truncated");
    }
    out
}

fn level(on: bool, value: u16) -> u16 {
    if on { value } else { 0 }
}
