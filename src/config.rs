//! Application configuration.
//!
//! - `layout`: Panel dimensions and pre-computed screen coordinates
//! - `controls`: Tilt thresholds, slider range, speed scale and poll timing

pub mod controls;
pub mod layout;

// Re-export the most used constants at config level for convenience
pub use controls::{
    NOTICE_DURATION_MS,
    POLL_DELAY_MS,
    SLIDER_MAX,
    SPEED_BAR_PX_PER_LEVEL,
    SPEED_LEVEL_MAX,
    TiltThresholds,
};
pub use layout::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
