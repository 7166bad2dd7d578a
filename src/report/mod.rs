//! Reporting engine: renders the current reading and pump state onto the
//! telemetry sink.
//!
//! Two streams share the sink:
//!
//! - **plotter**: one compact numeric line per tick for live charting;
//! - **diagnostic**: a multi-line human-readable block plus a CSV summary,
//!   with a system-statistics digest at most once per `stats_interval_ms`.
//!
//! Whether they share one alternating timer or run on two independent
//! timers is decided by [`ReportCadence`](crate::config::ReportCadence) and
//! wired up by the [`Scheduler`](crate::scheduler::Scheduler). The engine
//! only reads state; it never mutates the reading or the pump.

pub mod diagnostic;
pub mod plotter;

use core::fmt::Write;

use crate::app::ports::{SystemInfoPort, TelemetrySink};
use crate::config::{PlotterScale, SystemConfig};
use crate::control::{PumpState, TriggerSet};
use crate::diagnostics::{Counters, SystemStats};
use crate::scheduler::IntervalGate;
use crate::sensors::SensorReading;

/// Longest telemetry line the engine renders.
pub const LINE_CAPACITY: usize = 96;

/// Fixed-capacity telemetry line.
pub type Line = heapless::String<LINE_CAPACITY>;

/// Everything a report needs, captured at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub reading: SensorReading,
    pub pump: PumpState,
    pub now_ms: u32,
    pub counters: Counters,
}

pub struct ReportingEngine {
    scale: PlotterScale,
    sample_interval_ms: u32,
    /// Next shared-timer tick renders the diagnostic block.
    detailed_next: bool,
    stats_gate: IntervalGate,
}

impl ReportingEngine {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            scale: config.plotter,
            sample_interval_ms: config.sample_interval_ms,
            detailed_next: false,
            stats_gate: IntervalGate::new(config.stats_interval_ms),
        }
    }

    /// Boot banner with the plotter legend.
    pub fn banner(&self, sink: &mut impl TelemetrySink) {
        let s = &self.scale;
        sink.write_line(concat!("=== FARMTECH SOLUTIONS v", env!("CARGO_PKG_VERSION"), " ==="));
        sink.write_line("Threshold irrigation controller");
        sink.write_line("================================");
        sink.write_line("");
        sink.write_line("Serial plotter legend:");
        sink.write_line("- Humidity: soil humidity (%)");
        emit(sink, format_args!("- pH: pH x {}", s.ph_gain));
        emit(
            sink,
            format_args!("- Pump: pump status (0=OFF, {}=ON)", s.pump_level),
        );
        emit(
            sink,
            format_args!("- Phosphorus: 0=absent, {}=present", s.phosphorus_level),
        );
        emit(
            sink,
            format_args!("- Potassium: 0=absent, {}=present", s.potassium_level),
        );
        sink.write_line("================================");
        emit(
            sink,
            format_args!(
                "System started! Sampling every {} s...",
                self.sample_interval_ms / 1_000
            ),
        );
    }

    /// Shared timer tick: plotter and diagnostic output take turns,
    /// starting with the plotter.
    pub fn alternate(
        &mut self,
        snap: &Snapshot,
        system: &impl SystemInfoPort,
        sink: &mut impl TelemetrySink,
    ) {
        if self.detailed_next {
            self.diagnostic(snap, system, sink);
        } else {
            self.plotter(snap, sink);
        }
        self.detailed_next = !self.detailed_next;
    }

    pub fn plotter(&self, snap: &Snapshot, sink: &mut impl TelemetrySink) {
        sink.write_line(&plotter::line(&snap.reading, snap.pump, &self.scale));
    }

    /// Diagnostic block, plus the statistics digest when its interval has
    /// elapsed.
    pub fn diagnostic(
        &mut self,
        snap: &Snapshot,
        system: &impl SystemInfoPort,
        sink: &mut impl TelemetrySink,
    ) {
        diagnostic::write_block(snap, system.free_heap_bytes(), sink);
        if self.stats_gate.poll(snap.now_ms) {
            let stats = SystemStats::collect(system, snap.now_ms, snap.counters);
            diagnostic::write_stats(&stats, sink);
        }
    }
}

/// State-change line for a pump transition. Activation lists the reasons.
pub fn pump_change_line(state: PumpState, reasons: TriggerSet) -> Line {
    let mut out = Line::new();
    let written = if state.is_on() && !reasons.is_empty() {
        write!(out, "PUMP STATUS CHANGE: {} ({})", state, reasons)
    } else {
        write!(out, "PUMP STATUS CHANGE: {}", state)
    };
    if written.is_err() {
        log::warn!("pump status line truncated");
    }
    out
}

fn emit(sink: &mut impl TelemetrySink, args: core::fmt::Arguments<'_>) {
    let mut out = Line::new();
    if out.write_fmt(args).is_err() {
        log::warn!("banner line truncated");
    }
    sink.write_line(&out);
}
