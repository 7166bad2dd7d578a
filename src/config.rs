//! System configuration parameters
//!
//! All tunable parameters for the FarmTech controller. The configuration is
//! fixed once at startup: [`SystemConfig::default()`] unless a JSON override
//! was baked into the image at build time.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Irrigation trigger thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Soil humidity (%) below which irrigation is requested.
    pub humidity_min: f32,
    /// Lower bound of the acceptable pH band (inclusive).
    pub ph_min: f32,
    /// Upper bound of the acceptable pH band (inclusive).
    pub ph_max: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            humidity_min: 30.0,
            ph_min: 6.0,
            ph_max: 7.5,
        }
    }
}

/// How the plotter and diagnostic streams share the serial port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCadence {
    /// One timer; consecutive ticks alternate plotter and diagnostic output.
    Alternating { interval_ms: u32 },
    /// Independent timers. `None` disables that stream.
    Independent {
        plotter_interval_ms: Option<u32>,
        diagnostic_interval_ms: Option<u32>,
    },
}

/// Largest accepted pH gain. Keeps the widest plotter line inside
/// [`LINE_CAPACITY`](crate::report::LINE_CAPACITY).
pub const MAX_PH_GAIN: f32 = 1_000.0;

/// Scaling applied to the plotter stream so every signal lands on its own
/// band of a shared chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterScale {
    /// Multiplier for the pH value.
    pub ph_gain: f32,
    /// Level plotted while the pump is on.
    pub pump_level: u16,
    /// Level plotted while phosphorus is present.
    pub phosphorus_level: u16,
    /// Level plotted while potassium is present.
    pub potassium_level: u16,
}

impl Default for PlotterScale {
    fn default() -> Self {
        Self {
            ph_gain: 10.0,
            pump_level: 100,
            phosphorus_level: 20,
            potassium_level: 30,
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Decision ---
    pub thresholds: Thresholds,

    // --- Timing ---
    /// Sensor sampling + irrigation decision interval (milliseconds)
    pub sample_interval_ms: u32,
    /// Plotter / diagnostic report timers
    pub report: ReportCadence,
    /// Minimum spacing between system-statistics digests (milliseconds)
    pub stats_interval_ms: u32,
    /// Idle delay between scheduler ticks (milliseconds)
    pub idle_delay_ms: u32,

    // --- Telemetry ---
    pub plotter: PlotterScale,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),

            // Timing
            sample_interval_ms: 5_000,
            report: ReportCadence::Alternating { interval_ms: 2_000 },
            stats_interval_ms: 30_000,
            idle_delay_ms: 50,

            plotter: PlotterScale::default(),
        }
    }
}

impl SystemConfig {
    /// Single-cadence preset: a diagnostic block on every sample, no
    /// plotter stream.
    pub fn baseline() -> Self {
        let sample_interval_ms = 5_000;
        Self {
            sample_interval_ms,
            report: ReportCadence::Independent {
                plotter_interval_ms: None,
                diagnostic_interval_ms: Some(sample_interval_ms),
            },
            ..Self::default()
        }
    }

    /// Parse a JSON document and validate it. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("config parse error: {}", e);
            ConfigError::Malformed
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range values rather than clamping them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if !(t.humidity_min.is_finite() && t.ph_min.is_finite() && t.ph_max.is_finite()) {
            return Err(ConfigError::ValidationFailed("thresholds must be finite"));
        }
        if !(0.0..=100.0).contains(&t.humidity_min) {
            return Err(ConfigError::ValidationFailed("humidity_min outside 0..=100"));
        }
        if t.ph_min > t.ph_max {
            return Err(ConfigError::ValidationFailed("ph_min above ph_max"));
        }

        if self.sample_interval_ms == 0 || self.stats_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("intervals must be non-zero"));
        }
        let intervals = self.report_intervals();
        if intervals.iter().flatten().any(|&ms| ms == 0) {
            return Err(ConfigError::ValidationFailed("report intervals must be non-zero"));
        }
        let shortest = intervals
            .iter()
            .flatten()
            .copied()
            .fold(self.sample_interval_ms, u32::min);
        if self.idle_delay_ms >= shortest {
            return Err(ConfigError::ValidationFailed(
                "idle_delay_ms must be shorter than every interval",
            ));
        }

        let p = &self.plotter;
        if !(p.ph_gain > 0.0 && p.ph_gain <= MAX_PH_GAIN) {
            return Err(ConfigError::ValidationFailed("plotter ph_gain outside (0, 1000]"));
        }
        let levels = [p.pump_level, p.phosphorus_level, p.potassium_level];
        if levels.contains(&0) {
            return Err(ConfigError::ValidationFailed("plotter levels must be non-zero"));
        }
        if levels[0] == levels[1] || levels[0] == levels[2] || levels[1] == levels[2] {
            return Err(ConfigError::ValidationFailed("plotter levels must be distinct"));
        }
        Ok(())
    }

    /// The enabled report timers, as `[plotter-or-alternating, diagnostic]`.
    fn report_intervals(&self) -> [Option<u32>; 2] {
        match self.report {
            ReportCadence::Alternating { interval_ms } => [Some(interval_ms), None],
            ReportCadence::Independent {
                plotter_interval_ms,
                diagnostic_interval_ms,
            } => [plotter_interval_ms, diagnostic_interval_ms],
        }
    }
}
