//! Fuzz target: `dht22::decode_frame`
//!
//! Any 5-byte frame must decode to a plausible measurement or a typed
//! error; never a panic, never a humidity outside 0 – 100 %.
//!
//! cargo fuzz run fuzz_dht22_frame

#![no_main]

use farmtech::error::SensorError;
use farmtech::sensors::dht22::decode_frame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|frame: [u8; 5]| {
    match decode_frame(frame) {
        Ok(m) => {
            assert!((0.0..=100.0).contains(&m.humidity));
            assert!(m.temperature_c.abs() <= 3276.7);
        }
        Err(e) => assert!(matches!(
            e,
            SensorError::ChecksumMismatch | SensorError::OutOfRange
        )),
    }
});
