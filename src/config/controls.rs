//! Control calibration and timing constants.
//!
//! The tilt thresholds were calibrated against one physical accelerometer and are
//! expressed in its raw units (ADC counts centered on 0, roughly ±512 full scale).

// =============================================================================
// Slider / Speed
// =============================================================================

/// Highest slider reading (10-bit ADC). The slider reads 0 at full speed.
pub const SLIDER_MAX: u16 = 1023;

/// Highest speed level shown on the bar.
pub const SPEED_LEVEL_MAX: u8 = 10;

/// Speed bar pixels per speed level (10 levels fill the 140 px bar).
pub const SPEED_BAR_PX_PER_LEVEL: u32 = 14;

// =============================================================================
// Timing
// =============================================================================

/// Delay between poll cycles. Acts as the button debounce, not as a scheduler.
pub const POLL_DELAY_MS: u64 = 20;

/// How long the "not yet implemented" notice stays over the splash screen.
pub const NOTICE_DURATION_MS: u64 = 1500;

/// Notice duration expressed in poll cycles.
pub const NOTICE_CYCLES: u16 = (NOTICE_DURATION_MS / POLL_DELAY_MS) as u16;

// =============================================================================
// Accelerometer Tilt
// =============================================================================

/// Accelerometer thresholds for tilt steering.
///
/// Positive `y` is tilted towards the user (DOWN), negative `y` away (UP).
/// Positive `x` is tilted left, negative `x` right.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TiltThresholds {
    /// `y` above this selects the DOWN family.
    pub down_above: i16,
    /// `y` below this selects the UP family.
    pub up_below: i16,
    /// Lower (exclusive) bound of the level band where only LEFT/RIGHT apply.
    pub level_above: i16,
    /// Upper (exclusive) bound of the level band.
    pub level_below: i16,
    /// `x` above this steers left.
    pub left_above: i16,
    /// `x` below this steers right.
    pub right_below: i16,
}

impl TiltThresholds {
    /// Calibration of the handheld's stock accelerometer.
    pub const DEFAULT: Self = Self {
        down_above: 90,
        up_below: 0,
        level_above: -10,
        level_below: 90,
        left_above: 50,
        right_below: -10,
    };
}

impl Default for TiltThresholds {
    fn default() -> Self { Self::DEFAULT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_cycles() {
        assert_eq!(NOTICE_CYCLES, 75);
    }

    #[test]
    fn test_full_speed_fills_bar() {
        assert_eq!(u32::from(SPEED_LEVEL_MAX) * SPEED_BAR_PX_PER_LEVEL, 140);
    }

    #[test]
    fn test_default_thresholds() {
        let t = TiltThresholds::default();
        assert_eq!(t.down_above, 90);
        assert_eq!(t.up_below, 0);
        assert_eq!(t.level_above, -10);
        assert_eq!(t.level_below, 90);
        assert_eq!(t.left_above, 50);
        assert_eq!(t.right_below, -10);
    }
}
