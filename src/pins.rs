//! GPIO / peripheral pin assignments for the FarmTech controller board
//! (ESP32-DevKitC).
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Sensors
// ---------------------------------------------------------------------------

/// DHT22 single-wire humidity sensor data line.
pub const DHT_GPIO: i32 = 4;

/// LDR voltage divider standing in for the pH probe.
/// ADC1 channel 6 (GPIO 34, input-only).
pub const PH_ADC_GPIO: i32 = 34;
/// ADC1 channel wired to [`PH_ADC_GPIO`].
pub const PH_ADC1_CHANNEL: u32 = 6;

/// Phosphorus presence switch. Pull-up input: LOW = present.
pub const PHOSPHORUS_GPIO: i32 = 18;
/// Potassium presence switch. Pull-up input: LOW = present.
pub const POTASSIUM_GPIO: i32 = 19;

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

/// Pump relay coil driver. HIGH = pump on.
pub const PUMP_RELAY_GPIO: i32 = 2;
/// Pump indicator LED. HIGH = lit.
pub const INDICATOR_LED_GPIO: i32 = 23;

// ---------------------------------------------------------------------------
// ADC configuration
// ---------------------------------------------------------------------------

/// Full-scale raw value of the 12-bit ADC.
pub const ADC_RAW_MAX: u16 = 4095;
