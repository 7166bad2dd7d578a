//! Runtime diagnostics.
//!
//! Counters maintained by the control loop, the system-statistics snapshot
//! quoted in the diagnostic stream, and a panic hook that records the
//! reason through the logger before the runtime aborts.

use crate::app::ports::SystemInfoPort;
use crate::sensors::SensorReading;

/// Event counters since boot. All wrap on overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub samples: u32,
    pub humidity_rejections: u32,
    pub pump_transitions: u32,
}

/// System-statistics snapshot, collected on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemStats {
    /// In-memory size of one [`SensorReading`].
    pub reading_size_bytes: usize,
    pub free_heap_bytes: u32,
    pub cpu_freq_mhz: u32,
    pub uptime_secs: u32,
    pub counters: Counters,
}

impl SystemStats {
    pub fn collect(system: &impl SystemInfoPort, now_ms: u32, counters: Counters) -> Self {
        Self {
            reading_size_bytes: core::mem::size_of::<SensorReading>(),
            free_heap_bytes: system.free_heap_bytes(),
            cpu_freq_mhz: system.cpu_freq_mhz(),
            uptime_secs: now_ms / 1_000,
            counters,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Panic hook
// ───────────────────────────────────────────────────────────────

/// Route panic messages through the `log` facade.
///
/// Call once during init, after the logger is up.
pub fn install_panic_handler() {
    std::panic::set_hook(Box::new(|info| {
        let reason = if let Some(msg) = info.payload().downcast_ref::<&str>() {
            *msg
        } else if let Some(msg) = info.payload().downcast_ref::<String>() {
            msg.as_str()
        } else {
            "unknown panic"
        };

        match info.location() {
            Some(loc) => log::error!("PANIC at {}:{}: {}", loc.file(), loc.line(), reason),
            None => log::error!("PANIC: {}", reason),
        }
    }));
}
