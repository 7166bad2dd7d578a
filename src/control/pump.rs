//! Pump actuation state machine.
//!
//! ```text
//!   OFF ──(irrigate)──▶ ON
//!    ▲                  │
//!    └──(!irrigate)─────┘
//! ```
//!
//! The actuator is commanded only on a transition. Repeating the current
//! decision is a no-op, so the relay never sees redundant writes.

use core::fmt;

use crate::app::ports::ActuatorPort;

/// Commanded pump state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PumpState {
    #[default]
    Off,
    On,
}

impl PumpState {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for PumpState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl fmt::Display for PumpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("OFF"),
            Self::On => f.write_str("ON"),
        }
    }
}

/// Tracks the pump state and drives the actuator on edges.
#[derive(Debug, Default)]
pub struct PumpController {
    state: PumpState,
    transitions: u32,
}

impl PumpController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a decision. Returns the new state if it changed.
    pub fn update(&mut self, irrigate: bool, hw: &mut impl ActuatorPort) -> Option<PumpState> {
        let next = PumpState::from(irrigate);
        if next == self.state {
            return None;
        }
        hw.apply_pump(next.is_on());
        self.state = next;
        self.transitions = self.transitions.wrapping_add(1);
        Some(next)
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    /// State changes since startup.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }
}
