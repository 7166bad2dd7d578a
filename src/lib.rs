//! FarmTech irrigation controller library.
//!
//! Exposes the control core and its adapters for the firmware binary and
//! for integration testing. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module; host builds run the
//! same loop against [`adapters::sim::SimulatedField`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod diagnostics;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod report;
pub mod scheduler;
pub mod sensors;
