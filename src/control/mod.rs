//! Irrigation control: the stateless decision predicate and the
//! edge-triggered pump state machine that acts on it.

pub mod decision;
pub mod pump;

pub use decision::{Trigger, TriggerSet, decide, evaluate};
pub use pump::{PumpController, PumpState};
