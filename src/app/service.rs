//! Controller: the hexagonal core.
//!
//! [`Controller`] composes the sampling engine, the decision predicate,
//! the pump state machine and the reporting engine, and owns all mutable
//! state of the system. All I/O flows through port traits injected at call
//! sites, so the whole control loop runs against mock adapters in
//! simulated time.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────┐ ──▶ TelemetrySink
//!   ClockPort ──▶ │        Controller        │
//! ActuatorPort ◀──│ Sample · Decide · Report │ ◀── SystemInfoPort
//!                 └──────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::SystemConfig;
use crate::control::{PumpController, PumpState, TriggerSet, evaluate};
use crate::diagnostics::Counters;
use crate::error::ConfigError;
use crate::report::{self, ReportingEngine, Snapshot};
use crate::scheduler::{Scheduler, Task};
use crate::sensors::{SamplingEngine, SensorReading};

use super::ports::{ActuatorPort, ClockPort, SensorPort, SystemInfoPort, TelemetrySink};

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

pub struct Controller {
    config: SystemConfig,
    scheduler: Scheduler,
    sampler: SamplingEngine,
    pump: PumpController,
    reporter: ReportingEngine,
    /// Triggers that fired on the most recent sample.
    triggers: TriggerSet,
    tick_count: u64,
}

impl Controller {
    /// Validate the configuration and build the engines.
    pub fn new(config: SystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            scheduler: Scheduler::from_config(&config),
            sampler: SamplingEngine::new(),
            pump: PumpController::new(),
            reporter: ReportingEngine::new(&config),
            triggers: TriggerSet::default(),
            tick_count: 0,
            config,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Force the outputs into a known state and print the banner.
    ///
    /// The pump controller starts `Off`; this makes the hardware agree
    /// before the first decision.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl TelemetrySink) {
        hw.apply_pump(false);
        self.reporter.banner(sink);
        info!(
            "Controller started: humidity < {}%, pH outside [{}, {}]",
            self.config.thresholds.humidity_min,
            self.config.thresholds.ph_min,
            self.config.thresholds.ph_max
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run every action that is due at the current clock reading.
    ///
    /// Sampling (and the decision it feeds) always runs before reporting,
    /// so a report issued on the same tick shows the fresh reading.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        clock: &impl ClockPort,
        system: &impl SystemInfoPort,
        sink: &mut impl TelemetrySink,
    ) {
        self.tick_count += 1;
        let now = clock.now_millis();

        for task in self.scheduler.poll(now) {
            match task {
                Task::Sample => self.sample_and_control(hw, now, sink),
                Task::Report => {
                    let snap = self.snapshot(now);
                    self.reporter.alternate(&snap, system, sink);
                }
                Task::Plotter => self.reporter.plotter(&self.snapshot(now), sink),
                Task::Diagnostic => {
                    let snap = self.snapshot(now);
                    self.reporter.diagnostic(&snap, system, sink);
                }
            }
        }
    }

    fn sample_and_control(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        now: u32,
        sink: &mut impl TelemetrySink,
    ) {
        let reading = self.sampler.sample(hw, now);
        self.triggers = evaluate(&reading, &self.config.thresholds);
        debug!("sample {:?} -> triggers [{}]", reading, self.triggers);

        if let Some(state) = self.pump.update(!self.triggers.is_empty(), hw) {
            sink.write_line(&report::pump_change_line(state, self.triggers));
        }
    }

    fn snapshot(&self, now_ms: u32) -> Snapshot {
        Snapshot {
            reading: *self.sampler.current(),
            pump: self.pump.state(),
            now_ms,
            counters: self.counters(),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Latest sensor reading.
    pub fn reading(&self) -> &SensorReading {
        self.sampler.current()
    }

    pub fn pump_state(&self) -> PumpState {
        self.pump.state()
    }

    /// Triggers that fired on the most recent sample.
    pub fn triggers(&self) -> TriggerSet {
        self.triggers
    }

    pub fn counters(&self) -> Counters {
        Counters {
            samples: self.sampler.samples(),
            humidity_rejections: self.sampler.humidity_rejections(),
            pump_transitions: self.pump.transitions(),
        }
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Loop iterations since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
