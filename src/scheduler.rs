//! Cooperative interval scheduler.
//!
//! Every periodic action in the controller is an [`IntervalGate`] polled
//! against the injected monotonic clock. Nothing blocks: the main loop
//! polls all gates each tick and runs whatever is due, in registration
//! order (sampling always first).
//!
//! ```text
//!   now ──▶ Scheduler::poll ──▶ [Sample] [Report | Plotter] [Diagnostic]
//!                                  │             │
//!                                  ▼             ▼
//!                          SamplingEngine   ReportingEngine
//! ```

use log::info;

use crate::config::{ReportCadence, SystemConfig};

// ═══════════════════════════════════════════════════════════════
//  Interval gate
// ═══════════════════════════════════════════════════════════════

/// `now - last_run >= interval` over a wrapping `u32` millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalGate {
    interval_ms: u32,
    last_run_ms: u32,
    /// Fire on the very first poll instead of waiting a full interval.
    pending_first: bool,
}

impl IntervalGate {
    /// First fire one full interval after t = 0.
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_run_ms: 0,
            pending_first: false,
        }
    }

    /// First fire on the first poll.
    pub const fn immediate(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_run_ms: 0,
            pending_first: true,
        }
    }

    /// Returns `true` and re-arms when the interval has elapsed.
    ///
    /// The next deadline is measured from `now`, not from the previous
    /// deadline, so a late tick delays every following one.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if self.pending_first || now_ms.wrapping_sub(self.last_run_ms) >= self.interval_ms {
            self.pending_first = false;
            self.last_run_ms = now_ms;
            true
        } else {
            false
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

// ═══════════════════════════════════════════════════════════════
//  Scheduler
// ═══════════════════════════════════════════════════════════════

/// Periodic actions the controller knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Sample sensors, decide, actuate.
    Sample,
    /// Shared report timer: alternates plotter and diagnostic output.
    Report,
    /// Independent plotter timer.
    Plotter,
    /// Independent diagnostic timer.
    Diagnostic,
}

const MAX_TASKS: usize = 4;

/// Fixed set of gates built once from the configuration.
#[derive(Debug, Clone)]
pub struct Scheduler {
    gates: heapless::Vec<(Task, IntervalGate), MAX_TASKS>,
}

impl Scheduler {
    pub fn from_config(config: &SystemConfig) -> Self {
        let mut gates = heapless::Vec::new();
        // At most three entries are ever registered; capacity is four.
        let _ = gates.push((Task::Sample, IntervalGate::immediate(config.sample_interval_ms)));

        match config.report {
            ReportCadence::Alternating { interval_ms } => {
                let _ = gates.push((Task::Report, IntervalGate::new(interval_ms)));
            }
            ReportCadence::Independent {
                plotter_interval_ms,
                diagnostic_interval_ms,
            } => {
                if let Some(ms) = plotter_interval_ms {
                    let _ = gates.push((Task::Plotter, IntervalGate::new(ms)));
                }
                if let Some(ms) = diagnostic_interval_ms {
                    // A block per sample starts with the first sample.
                    let gate = if ms == config.sample_interval_ms {
                        IntervalGate::immediate(ms)
                    } else {
                        IntervalGate::new(ms)
                    };
                    let _ = gates.push((Task::Diagnostic, gate));
                }
            }
        }

        for (task, gate) in &gates {
            info!("Scheduler: {:?} every {} ms", task, gate.interval_ms());
        }
        Self { gates }
    }

    /// Poll every gate and return the due tasks in run order.
    pub fn poll(&mut self, now_ms: u32) -> heapless::Vec<Task, MAX_TASKS> {
        let mut due = heapless::Vec::new();
        for (task, gate) in self.gates.iter_mut() {
            if gate.poll(now_ms) {
                let _ = due.push(*task);
            }
        }
        due
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
