//! Hardware adapter: bridges the real board to the domain port traits.
//!
//! Owns the DHT22 driver and both relay drivers, and reads the pH proxy
//! and presence switches through the raw channels configured by
//! [`hw_init`]. This is the only module in the system that touches actual
//! hardware; host builds use [`SimulatedField`](super::sim::SimulatedField)
//! instead.

use esp_idf_hal::delay::Ets;
use esp_idf_hal::gpio::{Gpio2, Gpio4, Gpio23, InputOutput, Output, PinDriver, Pins, Pull};
use log::{info, warn};

use crate::app::ports::{ActuatorPort, AnalogChannel, DigitalChannel, SensorPort};
use crate::drivers::hw_init;
use crate::drivers::relay::{Polarity, Relay};
use crate::error::{Error, Result};
use crate::pins;
use crate::sensors::dht22::Dht22;

type DhtPin = PinDriver<'static, Gpio4, InputOutput>;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    dht: Dht22<DhtPin, Ets>,
    pump: Relay<PinDriver<'static, Gpio2, Output>>,
    indicator: Relay<PinDriver<'static, Gpio23, Output>>,
}

impl HardwareAdapter {
    /// Claim the GPIOs listed in [`pins`] and release every output.
    ///
    /// [`hw_init::init_peripherals`] must have run first.
    pub fn new(pins: Pins) -> Result<Self> {
        let mut dht_pin =
            PinDriver::input_output_od(pins.gpio4).map_err(|_| Error::Init("DHT22 pin"))?;
        dht_pin.set_pull(Pull::Up).map_err(|_| Error::Init("DHT22 pull-up"))?;
        dht_pin.set_high().map_err(|_| Error::Init("DHT22 idle level"))?;

        let pump_pin = PinDriver::output(pins.gpio2).map_err(|_| Error::Init("pump relay pin"))?;
        let led_pin = PinDriver::output(pins.gpio23).map_err(|_| Error::Init("indicator pin"))?;

        let adapter = Self {
            dht: Dht22::new(dht_pin, Ets),
            pump: Relay::new(pump_pin, Polarity::ActiveHigh)?,
            indicator: Relay::new(led_pin, Polarity::ActiveHigh)?,
        };
        info!(
            "HardwareAdapter: DHT22=GPIO{} relay=GPIO{} led=GPIO{}",
            pins::DHT_GPIO,
            pins::PUMP_RELAY_GPIO,
            pins::INDICATOR_LED_GPIO
        );
        Ok(adapter)
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_humidity(&mut self) -> f32 {
        self.dht.read_humidity()
    }

    fn read_analog(&mut self, channel: AnalogChannel) -> u16 {
        match channel {
            AnalogChannel::PhProxy => hw_init::adc1_read(pins::PH_ADC1_CHANNEL),
        }
    }

    fn read_digital(&mut self, channel: DigitalChannel) -> bool {
        let pin = match channel {
            DigitalChannel::Phosphorus => pins::PHOSPHORUS_GPIO,
            DigitalChannel::Potassium => pins::POTASSIUM_GPIO,
        };
        hw_init::gpio_read(pin)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_pump(&mut self, on: bool) {
        if let Err(e) = self.pump.set(on) {
            warn!("pump relay: {}", e);
        }
    }

    fn set_indicator(&mut self, on: bool) {
        if let Err(e) = self.indicator.set(on) {
            warn!("indicator: {}", e);
        }
    }

    fn pump_commanded(&self) -> bool {
        self.pump.is_on()
    }
}
