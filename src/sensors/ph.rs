//! pH proxy channel.
//!
//! The probe is an LDR divider read by the 12-bit ADC. Raw counts map
//! linearly onto 0 – 14 pH in hundredths, truncating like the integer
//! `map()` the board was first prototyped with.

use crate::pins::ADC_RAW_MAX;

/// Upper end of the pH scale, in hundredths.
const PH_SPAN_CENTI: u32 = 1_400;

/// Convert a raw ADC count to pH.
///
/// Counts above full scale are not clamped: a reading past 14.0 is a
/// wiring or calibration problem and must stay visible to the decision.
pub fn raw_to_ph(raw: u16) -> f32 {
    let centi = u32::from(raw) * PH_SPAN_CENTI / u32::from(ADC_RAW_MAX);
    centi as f32 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_scale_limits() {
        assert_eq!(raw_to_ph(0), 0.0);
        assert_eq!(raw_to_ph(4095), 14.0);
    }

    #[test]
    fn midscale_truncates_to_hundredths() {
        // 2048 * 1400 / 4095 = 700.17 -> 700
        assert_eq!(raw_to_ph(2048), 7.0);
        // 1902 * 1400 / 4095 = 650.25 -> 650
        assert!((raw_to_ph(1902) - 6.5).abs() < 1e-6);
    }

    #[test]
    fn mapping_is_monotonic() {
        let mut prev = raw_to_ph(0);
        for raw in (0..=4095).step_by(7) {
            let ph = raw_to_ph(raw);
            assert!(ph >= prev);
            prev = ph;
        }
    }

    #[test]
    fn over_range_counts_are_not_clamped() {
        assert!(raw_to_ph(u16::MAX) > 14.0);
    }
}
