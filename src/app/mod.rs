//! Application core: pure domain logic, zero I/O.
//!
//! Sampling, irrigation decisions, pump actuation and reporting are
//! orchestrated by [`service::Controller`]. All interaction with hardware
//! happens through the **port traits** defined in [`ports`], keeping this
//! layer fully testable without real peripherals.

pub mod ports;
pub mod service;
