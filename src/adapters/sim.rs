//! Simulated field for host runs.
//!
//! Stands in for the sensors and the pump so the full control loop runs
//! on a PC:
//! - soil humidity dries slowly and rises while the pump is on
//! - the pH proxy random-walks with mean reversion around neutral
//! - nutrient switches occasionally report "absent" for one read
//! - a small fraction of humidity reads fail (NaN), like a flaky DHT22

use log::info;

use crate::app::ports::{ActuatorPort, AnalogChannel, DigitalChannel, SensorPort};
use crate::pins::ADC_RAW_MAX;

/// Humidity lost per read while idle (%).
const DRYING_PER_READ: f32 = 0.8;
/// Humidity gained per read while the pump runs (%).
const WETTING_PER_READ: f32 = 3.0;
/// Probability a humidity read fails.
const HUMIDITY_FAULT_PROB: f32 = 0.03;
/// Probability a nutrient switch reads "absent".
const NUTRIENT_DROPOUT_PROB: f32 = 0.05;
/// Raw ADC count for pH 7.0.
const PH_RAW_CENTER: f32 = 2048.0;

/// Seeded, reproducible simulation of one irrigated plot.
pub struct SimulatedField {
    rng: fastrand::Rng,
    /// True soil humidity (%).
    humidity: f32,
    /// True analog pH proxy level (raw counts).
    ph_raw: f32,
    pump: bool,
    indicator: bool,
}

impl SimulatedField {
    pub fn new(seed: u64) -> Self {
        info!("SimulatedField: seed={}", seed);
        Self {
            rng: fastrand::Rng::with_seed(seed),
            humidity: 45.0,
            ph_raw: PH_RAW_CENTER,
            pump: false,
            indicator: false,
        }
    }

    /// Start from a specific soil humidity.
    pub fn with_humidity(mut self, humidity: f32) -> Self {
        self.humidity = humidity.clamp(0.0, 100.0);
        self
    }

    /// Approximate N(0, sigma) via the Irwin-Hall sum of 12 uniforms.
    fn gaussian(&mut self, sigma: f32) -> f32 {
        let sum: f32 = (0..12).map(|_| self.rng.f32()).sum();
        (sum - 6.0) * sigma
    }

    pub fn indicator(&self) -> bool {
        self.indicator
    }
}

impl SensorPort for SimulatedField {
    fn read_humidity(&mut self) -> f32 {
        let delta = if self.pump { WETTING_PER_READ } else { -DRYING_PER_READ };
        self.humidity = (self.humidity + delta + self.gaussian(0.3)).clamp(0.0, 100.0);

        if self.rng.f32() < HUMIDITY_FAULT_PROB {
            return f32::NAN;
        }
        (self.humidity + self.gaussian(0.5)).clamp(0.0, 100.0)
    }

    fn read_analog(&mut self, channel: AnalogChannel) -> u16 {
        match channel {
            AnalogChannel::PhProxy => {
                let reversion = (PH_RAW_CENTER - self.ph_raw) * 0.1;
                self.ph_raw = (self.ph_raw + reversion + self.gaussian(60.0))
                    .clamp(0.0, f32::from(ADC_RAW_MAX));
                self.ph_raw as u16
            }
        }
    }

    fn read_digital(&mut self, _channel: DigitalChannel) -> bool {
        // Pull-up wiring: LOW means present.
        self.rng.f32() < NUTRIENT_DROPOUT_PROB
    }
}

impl ActuatorPort for SimulatedField {
    fn set_pump(&mut self, on: bool) {
        self.pump = on;
    }

    fn set_indicator(&mut self, on: bool) {
        self.indicator = on;
    }

    fn pump_commanded(&self) -> bool {
        self.pump
    }
}
