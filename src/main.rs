//! FarmTech irrigation controller: main entry point.
//!
//! Hexagonal architecture with a single cooperative control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter | SimulatedField   SerialTelemetry            │
//! │  (Sensor+Actuator)                  (TelemetrySink)            │
//! │  MonotonicClock                     ChipInfo                   │
//! │  (ClockPort)                        (SystemInfoPort)           │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              Controller (pure logic)                   │    │
//! │  │  Scheduler · Sampling · Decision · Pump · Reporting    │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use anyhow::Result;
use log::info;

use farmtech::adapters::serial::SerialTelemetry;
use farmtech::adapters::system::ChipInfo;
use farmtech::adapters::time::MonotonicClock;
use farmtech::app::service::Controller;
use farmtech::config::SystemConfig;
use farmtech::{diagnostics, drivers};

#[cfg(target_os = "espidf")]
use farmtech::adapters::hardware::HardwareAdapter;
#[cfg(not(target_os = "espidf"))]
use farmtech::adapters::sim::SimulatedField;

// ── Logging ───────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
fn init_logging() -> Result<()> {
    esp_idf_logger::init()?;
    Ok(())
}

/// `RUST_LOG` filter, `info` when unset. `log` records reach the
/// subscriber through its `tracing-log` bridge.
#[cfg(not(target_os = "espidf"))]
fn init_logging() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

// ── Configuration ─────────────────────────────────────────────

/// Build-time override: `FARMTECH_CONFIG` holds a JSON document, or the
/// word `baseline` for the single-cadence preset.
fn load_config() -> Result<SystemConfig> {
    let config = match option_env!("FARMTECH_CONFIG").map(str::trim) {
        None | Some("") => SystemConfig::default(),
        Some("baseline") => {
            info!("Config: baseline preset");
            SystemConfig::baseline()
        }
        Some(json) => {
            info!("Config: build-time JSON override");
            SystemConfig::from_json(json)?
        }
    };
    Ok(config)
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Runtime bootstrap ──────────────────────────────────
    #[cfg(target_os = "espidf")]
    esp_idf_svc::sys::link_patches();
    init_logging()?;
    diagnostics::install_panic_handler();

    info!("FarmTech irrigation controller v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals ────────────────────────────────────────
    drivers::hw_init::init_peripherals()?;

    #[cfg(target_os = "espidf")]
    let mut hw = {
        let peripherals = esp_idf_hal::peripherals::Peripherals::take()?;
        HardwareAdapter::new(peripherals.pins)?
    };
    #[cfg(not(target_os = "espidf"))]
    let mut hw = SimulatedField::new(fastrand::u64(..));

    let clock = MonotonicClock::new();
    let chip = ChipInfo::new();
    let mut serial = SerialTelemetry::new();

    // ── 3. Controller ─────────────────────────────────────────
    let config = load_config()?;
    let idle = Duration::from_millis(u64::from(config.idle_delay_ms));
    let mut controller = Controller::new(config)?;
    controller.start(&mut hw, &mut serial);

    info!("System ready. Entering control loop.");

    // ── 4. Control loop ───────────────────────────────────────
    loop {
        controller.tick(&mut hw, &clock, &chip, &mut serial);
        std::thread::sleep(idle);
    }
}
