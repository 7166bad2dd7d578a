//! Binary output driver for the pump relay and its indicator LED.
//!
//! Generic over an `embedded-hal` [`OutputPin`], so the same driver runs on
//! an `esp-idf-hal` `PinDriver` and on a mock pin in tests. The driver is a
//! dumb actuator: it remembers the last commanded state and nothing else.

use embedded_hal::digital::OutputPin;

use crate::error::ActuatorError;

/// Which pin level energises the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

pub struct Relay<P> {
    pin: P,
    polarity: Polarity,
    on: bool,
}

impl<P: OutputPin> Relay<P> {
    /// Wrap `pin` and drive it to the released state.
    pub fn new(pin: P, polarity: Polarity) -> Result<Self, ActuatorError> {
        let mut relay = Self {
            pin,
            polarity,
            on: false,
        };
        relay.write(false)?;
        Ok(relay)
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        self.write(on)?;
        self.on = on;
        Ok(())
    }

    /// Last successfully commanded state.
    pub fn is_on(&self) -> bool {
        self.on
    }

    fn write(&mut self, on: bool) -> Result<(), ActuatorError> {
        let high = match self.polarity {
            Polarity::ActiveHigh => on,
            Polarity::ActiveLow => !on,
        };
        let result = if high { self.pin.set_high() } else { self.pin.set_low() };
        result.map_err(|_| ActuatorError::GpioWriteFailed)
    }
}
