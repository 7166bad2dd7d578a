//! Human-readable diagnostic stream.

use core::fmt::Write;

use crate::app::ports::TelemetrySink;
use crate::diagnostics::SystemStats;

use super::{Line, Snapshot};

const RULE: &str = "---------------------------";

fn present(flag: bool) -> &'static str {
    if flag { "PRESENT" } else { "ABSENT" }
}

fn bit(flag: bool) -> u8 {
    u8::from(flag)
}

fn emit(sink: &mut impl TelemetrySink, args: core::fmt::Arguments<'_>) {
    let mut out = Line::new();
    if out.write_fmt(args).is_err() {
        log::warn!("diagnostic line truncated");
    }
    sink.write_line(&out);
}

/// Reading block followed by the unscaled CSV summary line.
pub fn write_block(snap: &Snapshot, free_heap_bytes: u32, sink: &mut impl TelemetrySink) {
    let r = &snap.reading;
    let pump_on = snap.pump.is_on();

    sink.write_line("--- SENSOR READING ---");
    emit(sink, format_args!("Timestamp: {}", r.timestamp_ms));
    emit(sink, format_args!("Humidity: {:.1}%", r.humidity));
    emit(sink, format_args!("pH: {:.2}", r.ph));
    emit(sink, format_args!("Phosphorus: {}", present(r.phosphorus_present)));
    emit(sink, format_args!("Potassium: {}", present(r.potassium_present)));
    emit(
        sink,
        format_args!("Pump: {}", if pump_on { "ACTIVE" } else { "INACTIVE" }),
    );
    emit(sink, format_args!("Free memory: {} bytes", free_heap_bytes));

    emit(
        sink,
        format_args!(
            "CSV: {},{:.2},{:.2},{},{},{}",
            r.timestamp_ms,
            r.humidity,
            r.ph,
            bit(r.phosphorus_present),
            bit(r.potassium_present),
            bit(pump_on),
        ),
    );
    sink.write_line(RULE);
}

/// Extended statistics digest.
pub fn write_stats(stats: &SystemStats, sink: &mut impl TelemetrySink) {
    sink.write_line("=== SYSTEM STATS ===");
    emit(
        sink,
        format_args!("SensorReading size: {} bytes", stats.reading_size_bytes),
    );
    emit(sink, format_args!("Free heap: {} bytes", stats.free_heap_bytes));
    emit(sink, format_args!("CPU frequency: {} MHz", stats.cpu_freq_mhz));
    emit(sink, format_args!("Uptime: {} seconds", stats.uptime_secs));
    emit(
        sink,
        format_args!(
            "Samples: {} ({} humidity reads rejected)",
            stats.counters.samples, stats.counters.humidity_rejections
        ),
    );
    emit(
        sink,
        format_args!("Pump transitions: {}", stats.counters.pump_transitions),
    );
    sink.write_line("====================");
}
