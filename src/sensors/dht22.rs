//! DHT22 / AM2302 single-wire humidity and temperature sensor driver.
//!
//! Generic over `embedded-hal` 1.0 pin and delay traits so the same driver
//! runs on the ESP32 (`PinDriver` in open-drain input/output mode) and in
//! host tests.
//!
//! ## Bus protocol
//!
//! ```text
//!  host: pull LOW ≥1 ms, release
//!  sensor: after 20-40 µs, LOW 80 µs, HIGH 80 µs, then 40 bits
//!  bit: LOW 50 µs, then HIGH 26–28 µs (0) or 70 µs (1)
//! ```
//!
//! Frame: humidity (u16, ‰), temperature (sign bit + 15-bit, tenths °C),
//! checksum (low byte of the sum of the first four bytes).
//!
//! The sensor must not be polled faster than once every 2 s.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::debug;

use crate::error::SensorError;

/// Frame length in bits.
const FRAME_BITS: usize = 40;
/// A HIGH pulse longer than this many polls is a `1` bit.
const ONE_THRESHOLD_US: u32 = 40;
/// Give up on any single edge after this many polls.
const EDGE_TIMEOUT_US: u32 = 100;

/// One decoded DHT22 measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Relative humidity (%).
    pub humidity: f32,
    /// Temperature (°C).
    pub temperature_c: f32,
}

/// Decode a raw 5-byte frame.
pub fn decode_frame(frame: [u8; 5]) -> Result<Measurement, SensorError> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(SensorError::ChecksumMismatch);
    }

    let humidity = f32::from(u16::from_be_bytes([frame[0], frame[1]])) / 10.0;
    if humidity > 100.0 {
        return Err(SensorError::OutOfRange);
    }

    let magnitude = f32::from(u16::from_be_bytes([frame[2] & 0x7F, frame[3]])) / 10.0;
    let temperature_c = if frame[2] & 0x80 != 0 { -magnitude } else { magnitude };

    Ok(Measurement {
        humidity,
        temperature_c,
    })
}

/// DHT22 on a single open-drain GPIO.
pub struct Dht22<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Dht22<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// The pin must be configured open-drain with a pull-up; the line idles HIGH.
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Humidity in percent, or NaN if the transaction failed.
    pub fn read_humidity(&mut self) -> f32 {
        match self.read() {
            Ok(m) => m.humidity,
            Err(e) => {
                debug!("DHT22 read failed: {}", e);
                f32::NAN
            }
        }
    }

    /// Run one full bus transaction.
    pub fn read(&mut self) -> Result<Measurement, SensorError> {
        // Start signal.
        self.pin.set_low().map_err(|_| SensorError::BusFault)?;
        self.delay.delay_ms(2);
        self.pin.set_high().map_err(|_| SensorError::BusFault)?;
        self.delay.delay_us(30);

        // The sensor answers 20-40 µs after release, so the line may still
        // be HIGH here. Then the response: LOW 80 µs, HIGH 80 µs.
        self.wait_while(true)?;
        self.wait_while(false)?;
        self.wait_while(true)?;

        let mut frame = [0u8; 5];
        for bit in 0..FRAME_BITS {
            self.wait_while(false)?;
            let high_us = self.wait_while(true)?;
            if high_us > ONE_THRESHOLD_US {
                frame[bit / 8] |= 1 << (7 - bit % 8);
            }
        }

        decode_frame(frame)
    }

    /// Busy-poll while the line sits at `level`; returns the approximate
    /// pulse width in microseconds (one poll per microsecond).
    fn wait_while(&mut self, level: bool) -> Result<u32, SensorError> {
        for elapsed in 0..=EDGE_TIMEOUT_US {
            let high = self.pin.is_high().map_err(|_| SensorError::BusFault)?;
            if high != level {
                return Ok(elapsed);
            }
            self.delay.delay_us(1);
        }
        Err(SensorError::Timeout)
    }
}
