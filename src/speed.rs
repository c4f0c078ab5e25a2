//! Slider to speed level mapping.
//!
//! The slider is inverted: fully up (1023) is stopped, fully down (0) is full
//! speed. The mapping uses the same integer arithmetic as an Arduino
//! `map(value, 1023, 0, 0, 10)`, so levels are truncated, not rounded.

use crate::config::{SLIDER_MAX, SPEED_BAR_PX_PER_LEVEL, SPEED_LEVEL_MAX};

/// Speed level 0..=10 for a slider reading. Readings above 1023 clamp.
pub const fn speed_level(slider: u16) -> u8 {
    let clamped = if slider > SLIDER_MAX { SLIDER_MAX } else { slider };
    let travel = (SLIDER_MAX - clamped) as u32;
    (travel * SPEED_LEVEL_MAX as u32 / SLIDER_MAX as u32) as u8
}

/// Filled width of the speed bar in pixels.
#[inline]
pub const fn bar_width(level: u8) -> u32 {
    let level = if level > SPEED_LEVEL_MAX { SPEED_LEVEL_MAX } else { level };
    level as u32 * SPEED_BAR_PX_PER_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(speed_level(1023), 0);
        assert_eq!(speed_level(0), 10);
    }

    #[test]
    fn test_truncates_like_arduino_map() {
        // (1023 - 1022) * 10 / 1023 = 0
        assert_eq!(speed_level(1022), 0);
        // (1023 - 920) * 10 / 1023 = 1
        assert_eq!(speed_level(920), 1);
        // (1023 - 1) * 10 / 1023 = 9
        assert_eq!(speed_level(1), 9);
        assert_eq!(speed_level(511), 5);
        assert_eq!(speed_level(512), 4);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(speed_level(2000), 0);
        assert_eq!(speed_level(u16::MAX), 0);
    }

    #[test]
    fn test_monotonic_non_increasing() {
        let mut prev = speed_level(0);
        for slider in 1..=1023 {
            let level = speed_level(slider);
            assert!(level <= prev, "slider {slider}: {level} > {prev}");
            prev = level;
        }
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(0), 0);
        assert_eq!(bar_width(7), 98);
        assert_eq!(bar_width(10), 140);
        assert_eq!(bar_width(42), 140);
    }
}
