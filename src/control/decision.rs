//! Irrigation decision predicate.
//!
//! Three independent triggers, OR-ed together. Any one of them forces
//! irrigation; there is no weighting and no hysteresis on the threshold
//! comparisons. Hysteresis lives in the actuation layer
//! ([`PumpController`](super::pump::PumpController)).

use core::fmt;

use crate::config::Thresholds;
use crate::sensors::SensorReading;

/// A single reason to irrigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Trigger {
    /// Soil humidity below `humidity_min`.
    HumidityLow = 0b0000_0001,
    /// pH outside the closed band `[ph_min, ph_max]`.
    PhOutOfRange = 0b0000_0010,
    /// Phosphorus or potassium missing.
    NutrientMissing = 0b0000_0100,
}

impl Trigger {
    const ALL: [Trigger; 3] = [Self::HumidityLow, Self::PhOutOfRange, Self::NutrientMissing];

    /// Return the bitmask for this trigger.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HumidityLow => write!(f, "humidity low"),
            Self::PhOutOfRange => write!(f, "pH out of range"),
            Self::NutrientMissing => write!(f, "nutrients missing"),
        }
    }
}

/// Set of triggers that fired for one reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerSet(u8);

impl TriggerSet {
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, trigger: Trigger) -> bool {
        self.0 & trigger.mask() != 0
    }

    fn insert(&mut self, trigger: Trigger) {
        self.0 |= trigger.mask();
    }

    pub fn iter(self) -> impl Iterator<Item = Trigger> {
        Trigger::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl fmt::Display for TriggerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, trigger) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{trigger}")?;
        }
        Ok(())
    }
}

/// Evaluate every trigger against the reading.
pub fn evaluate(reading: &SensorReading, thresholds: &Thresholds) -> TriggerSet {
    let mut set = TriggerSet::default();
    if reading.humidity < thresholds.humidity_min {
        set.insert(Trigger::HumidityLow);
    }
    // Written as a negated containment so a NaN pH also counts as out of range.
    if !(reading.ph >= thresholds.ph_min && reading.ph <= thresholds.ph_max) {
        set.insert(Trigger::PhOutOfRange);
    }
    if !reading.phosphorus_present || !reading.potassium_present {
        set.insert(Trigger::NutrientMissing);
    }
    set
}

/// `true` when the reading calls for irrigation.
pub fn decide(reading: &SensorReading, thresholds: &Thresholds) -> bool {
    !evaluate(reading, thresholds).is_empty()
}
