//! Controller → sampling → decision → actuators → telemetry.

use farmtech::app::service::Controller;
use farmtech::config::SystemConfig;
use farmtech::control::{PumpState, Trigger};

use super::mock_hw::{ActuatorCall, FixedChip, MockClock, MockField, RecordingSink};

const TICK_MS: u32 = 50;

struct Rig {
    controller: Controller,
    field: MockField,
    clock: MockClock,
    sink: RecordingSink,
}

impl Rig {
    fn new(config: SystemConfig, field: MockField) -> Self {
        let mut rig = Self {
            controller: Controller::new(config).unwrap(),
            field,
            clock: MockClock::default(),
            sink: RecordingSink::default(),
        };
        rig.controller.start(&mut rig.field, &mut rig.sink);
        rig
    }

    fn tick(&mut self) {
        self.controller
            .tick(&mut self.field, &self.clock, &FixedChip, &mut self.sink);
    }

    /// Tick every 50 ms from the current time up to and including `end_ms`.
    fn run_until(&mut self, end_ms: u32) {
        loop {
            self.tick();
            if self.clock.now() >= end_ms {
                break;
            }
            self.clock.advance(TICK_MS);
        }
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_releases_outputs_and_prints_banner() {
    let rig = Rig::new(SystemConfig::default(), MockField::healthy());

    assert_eq!(
        rig.field.calls,
        [ActuatorCall::Pump(false), ActuatorCall::Indicator(false)]
    );
    assert!(rig.sink.lines[0].starts_with("=== FARMTECH SOLUTIONS"));
    assert_eq!(rig.controller.pump_state(), PumpState::Off);
}

#[test]
fn first_tick_samples_immediately() {
    let mut rig = Rig::new(SystemConfig::default(), MockField::healthy());
    rig.sink.clear();

    rig.tick();
    assert_eq!(rig.controller.counters().samples, 1);
    assert_eq!(rig.controller.reading().humidity, 45.0);
    assert_eq!(rig.controller.reading().ph, 7.0);
    assert!(rig.sink.lines.is_empty(), "healthy soil: nothing to report yet");
}

// ── Decision and actuation ────────────────────────────────────

#[test]
fn dry_soil_turns_pump_on_once() {
    let field = MockField {
        humidity: 25.0,
        ph_raw: 1902,
        ..MockField::healthy()
    };
    let mut rig = Rig::new(SystemConfig::default(), field);
    rig.sink.clear();

    rig.run_until(30_000);

    assert_eq!(rig.controller.pump_state(), PumpState::On);
    assert_eq!(rig.field.pump_writes(), [false, true]);
    assert!(rig.field.indicator_on());
    assert_eq!(rig.sink.count_starting_with("PUMP STATUS CHANGE"), 1);
    assert!(rig.sink.lines.contains(&"PUMP STATUS CHANGE: ON (humidity low)".to_owned()));

    let triggers = rig.controller.triggers();
    assert!(triggers.contains(Trigger::HumidityLow));
    assert!(!triggers.contains(Trigger::PhOutOfRange));
    assert!(!triggers.contains(Trigger::NutrientMissing));
}

#[test]
fn recovery_turns_pump_off() {
    let field = MockField {
        humidity: 20.0,
        ..MockField::healthy()
    };
    let mut rig = Rig::new(SystemConfig::default(), field);

    rig.run_until(5_000);
    assert_eq!(rig.controller.pump_state(), PumpState::On);

    rig.field.humidity = 55.0;
    rig.clock.advance(TICK_MS);
    rig.run_until(10_000);

    assert_eq!(rig.controller.pump_state(), PumpState::Off);
    assert_eq!(rig.field.pump_writes(), [false, true, false]);
    assert!(rig.sink.lines.contains(&"PUMP STATUS CHANGE: OFF".to_owned()));
    assert_eq!(rig.controller.counters().pump_transitions, 2);
}

#[test]
fn missing_nutrient_triggers_irrigation() {
    let field = MockField {
        potassium_level: true,
        ..MockField::healthy()
    };
    let mut rig = Rig::new(SystemConfig::default(), field);
    rig.tick();

    assert_eq!(rig.controller.pump_state(), PumpState::On);
    assert!(
        rig.sink
            .lines
            .contains(&"PUMP STATUS CHANGE: ON (nutrients missing)".to_owned())
    );
}

#[test]
fn failed_humidity_read_keeps_last_value() {
    let mut rig = Rig::new(SystemConfig::default(), MockField::healthy());
    rig.tick();

    rig.field.humidity = f32::NAN;
    rig.clock.set(5_000);
    rig.tick();

    assert_eq!(rig.controller.reading().humidity, 45.0);
    assert_eq!(rig.controller.reading().timestamp_ms, 5_000);
    assert_eq!(rig.controller.counters().humidity_rejections, 1);
    assert_eq!(rig.controller.pump_state(), PumpState::Off);
}

// ── Reporting cadence ─────────────────────────────────────────

#[test]
fn default_cadence_alternates_streams() {
    let mut rig = Rig::new(SystemConfig::default(), MockField::healthy());
    rig.sink.clear();

    rig.run_until(10_000);

    // Reports at 2, 4, 6, 8, 10 s: plotter first.
    assert_eq!(rig.sink.count_starting_with("Humidity:"), 3);
    assert_eq!(rig.sink.count_starting_with("--- SENSOR READING ---"), 2);
    assert_eq!(rig.sink.count_starting_with("CSV: "), 2);
    assert!(rig.sink.lines[0].starts_with("Humidity:"));
    assert_eq!(rig.controller.counters().samples, 3);
}

#[test]
fn report_on_sampling_tick_shows_fresh_reading() {
    let mut rig = Rig::new(SystemConfig::default(), MockField::healthy());
    rig.run_until(9_950);
    rig.sink.clear();

    rig.field.humidity = 50.0;
    rig.clock.set(10_000);
    rig.tick();

    // Sample and plotter are both due at 10 s; sampling runs first.
    assert_eq!(
        rig.sink.lines,
        ["Humidity:50.0,pH:70.0,Pump:0,Phosphorus:20,Potassium:30"]
    );
}

#[test]
fn stats_digest_roughly_every_thirty_seconds() {
    let mut rig = Rig::new(SystemConfig::default(), MockField::healthy());
    rig.run_until(40_000);
    assert_eq!(rig.sink.count_starting_with("=== SYSTEM STATS ==="), 1);
    assert!(rig.sink.lines.contains(&"Uptime: 32 seconds".to_owned()));

    rig.clock.advance(TICK_MS);
    rig.run_until(70_000);
    assert_eq!(rig.sink.count_starting_with("=== SYSTEM STATS ==="), 2);
}

#[test]
fn baseline_preset_prints_block_every_sample() {
    let mut rig = Rig::new(SystemConfig::baseline(), MockField::healthy());
    rig.sink.clear();

    rig.run_until(15_000);

    assert_eq!(rig.sink.count_starting_with("Humidity:"), 0);
    // Blocks at 0, 5, 10 and 15 s, each right after its sample.
    assert_eq!(rig.sink.count_starting_with("--- SENSOR READING ---"), 4);
    assert_eq!(rig.controller.counters().samples, 4);
}

#[test]
fn reporting_never_touches_actuators() {
    let mut rig = Rig::new(SystemConfig::default(), MockField::healthy());
    let writes_after_start = rig.field.calls.len();

    rig.run_until(60_000);

    assert_eq!(rig.field.calls.len(), writes_after_start);
    assert_eq!(rig.controller.pump_state(), PumpState::Off);
}
