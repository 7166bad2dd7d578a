//! Long-running scenarios: simulated field, clock wraparound, build-time
//! configuration documents.

use farmtech::adapters::sim::SimulatedField;
use farmtech::app::ports::ActuatorPort;
use farmtech::app::service::Controller;
use farmtech::config::{ReportCadence, SystemConfig};
use farmtech::control::PumpState;
use farmtech::error::ConfigError;

use super::mock_hw::{FixedChip, MockClock, MockField, RecordingSink};

#[test]
fn simulated_day_keeps_outputs_consistent() {
    let mut controller = Controller::new(SystemConfig::default()).unwrap();
    let mut field = SimulatedField::new(42).with_humidity(35.0);
    let clock = MockClock::default();
    let mut sink = RecordingSink::default();
    controller.start(&mut field, &mut sink);

    let mut transitions_seen = 0;
    let mut last_state = controller.pump_state();
    // One simulated hour at 50 ms ticks.
    for _ in 0..72_000 {
        controller.tick(&mut field, &clock, &FixedChip, &mut sink);
        let state = controller.pump_state();
        if state != last_state {
            transitions_seen += 1;
            last_state = state;
        }
        assert_eq!(field.pump_commanded(), state == PumpState::On);
        assert_eq!(field.indicator(), state == PumpState::On);
        clock.advance(50);
    }

    let counters = controller.counters();
    assert_eq!(counters.samples, 720);
    assert_eq!(counters.pump_transitions, transitions_seen);
    assert_eq!(
        sink.count_starting_with("PUMP STATUS CHANGE") as u32,
        counters.pump_transitions
    );
    assert!(counters.pump_transitions > 0, "a drying field must be irrigated");
}

#[test]
fn cadence_survives_clock_wraparound() {
    let mut controller = Controller::new(SystemConfig::default()).unwrap();
    let mut field = MockField::healthy();
    let clock = MockClock::at(u32::MAX - 2_999);
    let mut sink = RecordingSink::default();
    controller.start(&mut field, &mut sink);
    sink.clear();

    // 20 s across the wrap.
    for _ in 0..=400 {
        controller.tick(&mut field, &clock, &FixedChip, &mut sink);
        clock.advance(50);
    }

    assert_eq!(controller.counters().samples, 5);
    // The report timer's reference is t = 0, which is already far in the
    // past, so it fires on the first tick and every 2 s after that.
    let reports = sink.count_starting_with("Humidity:")
        + sink.count_starting_with("--- SENSOR READING ---");
    assert_eq!(reports, 11);
}

#[test]
fn independent_plotter_only_stream() {
    let config = SystemConfig {
        report: ReportCadence::Independent {
            plotter_interval_ms: Some(1_000),
            diagnostic_interval_ms: None,
        },
        ..SystemConfig::default()
    };
    let mut controller = Controller::new(config).unwrap();
    let mut field = MockField::healthy();
    let clock = MockClock::default();
    let mut sink = RecordingSink::default();
    controller.start(&mut field, &mut sink);
    sink.clear();

    for _ in 0..=200 {
        controller.tick(&mut field, &clock, &FixedChip, &mut sink);
        clock.advance(50);
    }

    assert_eq!(sink.count_starting_with("Humidity:"), 10);
    assert_eq!(sink.count_starting_with("--- SENSOR READING ---"), 0);
}

#[test]
fn json_document_overrides_defaults() {
    let config = SystemConfig::from_json(
        r#"{
            "thresholds": { "humidity_min": 40.0 },
            "report": { "independent": { "plotter_interval_ms": 500, "diagnostic_interval_ms": null } }
        }"#,
    )
    .unwrap();

    assert_eq!(config.thresholds.humidity_min, 40.0);
    assert_eq!(config.thresholds.ph_max, 7.5);
    assert_eq!(config.sample_interval_ms, 5_000);

    let mut controller = Controller::new(config).unwrap();
    let mut field = MockField::healthy();
    field.humidity = 35.0;
    let clock = MockClock::default();
    let mut sink = RecordingSink::default();
    controller.tick(&mut field, &clock, &FixedChip, &mut sink);
    assert_eq!(controller.pump_state(), PumpState::On);
}

#[test]
fn malformed_documents_are_rejected() {
    assert_eq!(SystemConfig::from_json("{ not json"), Err(ConfigError::Malformed));
    assert!(matches!(
        SystemConfig::from_json(r#"{ "sample_interval_ms": 0 }"#),
        Err(ConfigError::ValidationFailed(_))
    ));
}
