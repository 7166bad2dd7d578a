//! Fuzz target: `SystemConfig::from_json`
//!
//! Arbitrary documents must either be rejected or produce a configuration
//! the controller accepts.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use farmtech::app::service::Controller;
use farmtech::config::SystemConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = SystemConfig::from_json(text) {
        assert!(Controller::new(config).is_ok());
    }
});
