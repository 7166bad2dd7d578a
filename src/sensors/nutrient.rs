//! Phosphorus / potassium presence switches.
//!
//! Each switch pulls its GPIO to ground when the nutrient is present; the
//! input idles HIGH through the pull-up.

/// Presence from the raw pin level (active-low).
#[inline]
pub fn presence_from_level(level_high: bool) -> bool {
    !level_high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_level_means_present() {
        assert!(presence_from_level(false));
        assert!(!presence_from_level(true));
    }
}
