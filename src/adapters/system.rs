//! Chip information for the diagnostic stream.

use crate::app::ports::SystemInfoPort;

#[derive(Default)]
pub struct ChipInfo;

impl ChipInfo {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "espidf")]
impl SystemInfoPort for ChipInfo {
    fn free_heap_bytes(&self) -> u32 {
        // SAFETY: heap statistics query, callable from any task.
        unsafe { esp_idf_svc::sys::esp_get_free_heap_size() }
    }

    fn cpu_freq_mhz(&self) -> u32 {
        // SAFETY: reads the cached CPU clock configuration.
        unsafe { esp_idf_svc::sys::ets_get_cpu_frequency() }
    }
}

/// Host builds report the figures of a stock ESP32 at boot so the
/// diagnostic stream has the same shape as on the board.
#[cfg(not(target_os = "espidf"))]
impl SystemInfoPort for ChipInfo {
    fn free_heap_bytes(&self) -> u32 {
        300 * 1024
    }

    fn cpu_freq_mhz(&self) -> u32 {
        240
    }
}
