//! Sensor subsystem: channel conversions and the [`SamplingEngine`].
//!
//! The engine owns the current [`SensorReading`] and refreshes it from a
//! [`SensorPort`] each sampling tick, converting raw values into
//! engineering units.

pub mod dht22;
pub mod nutrient;
pub mod ph;

use log::debug;

use crate::app::ports::{AnalogChannel, DigitalChannel, SensorPort};

/// A point-in-time snapshot of every sensor in the system.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorReading {
    /// Soil humidity (%), 0 – 100.
    pub humidity: f32,
    /// pH derived from the analog proxy, nominally 0 – 14.
    pub ph: f32,
    /// Phosphorus detected.
    pub phosphorus_present: bool,
    /// Potassium detected.
    pub potassium_present: bool,
    /// Monotonic milliseconds at capture.
    pub timestamp_ms: u32,
}

/// Pulls raw values from the sensor port and keeps the last good reading.
#[derive(Debug, Default)]
pub struct SamplingEngine {
    current: SensorReading,
    samples: u32,
    humidity_rejections: u32,
}

impl SamplingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every channel and return the refreshed reading.
    ///
    /// A failed humidity read (NaN, or a value outside 0 – 100) keeps the
    /// previous humidity; the other channels still update.
    pub fn sample(&mut self, sensors: &mut impl SensorPort, now_ms: u32) -> SensorReading {
        self.samples = self.samples.wrapping_add(1);

        let humidity = sensors.read_humidity();
        if (0.0..=100.0).contains(&humidity) {
            self.current.humidity = humidity;
        } else {
            self.humidity_rejections = self.humidity_rejections.wrapping_add(1);
            debug!(
                "humidity read rejected ({}), keeping {:.1}%",
                humidity, self.current.humidity
            );
        }

        self.current.ph = ph::raw_to_ph(sensors.read_analog(AnalogChannel::PhProxy));

        self.current.phosphorus_present =
            nutrient::presence_from_level(sensors.read_digital(DigitalChannel::Phosphorus));
        self.current.potassium_present =
            nutrient::presence_from_level(sensors.read_digital(DigitalChannel::Potassium));

        self.current.timestamp_ms = now_ms;
        self.current
    }

    /// Latest reading (all zeros before the first sample).
    pub fn current(&self) -> &SensorReading {
        &self.current
    }

    /// Sampling ticks since startup.
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Humidity reads discarded as faulty since startup.
    pub fn humidity_rejections(&self) -> u32 {
        self.humidity_rejections
    }
}
