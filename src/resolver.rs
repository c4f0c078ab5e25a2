//! Direction resolution for the two steering modes.
//!
//! Both resolvers reproduce the handheld's evaluation order exactly: a DOWN
//! check, then an UP check, then a LEFT/RIGHT-only check, each allowed to
//! overwrite the previous result. That order makes joystick UP win over DOWN
//! when both read pressed, and lets the level band override an UP result for
//! small negative `y` tilts.

use crate::bearing::Bearing;
use crate::config::TiltThresholds;
use crate::input::{AccelSample, Button, ButtonStates};

/// Steering source for manual control.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMode {
    /// Joystick steering ("Accel.: OFF").
    #[default]
    Joystick,
    /// Tilt steering ("Accel.: ON").
    Accelerometer,
}

impl ControlMode {
    /// Flip between joystick and accelerometer steering.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Joystick => Self::Accelerometer,
            Self::Accelerometer => Self::Joystick,
        }
    }

    #[inline]
    pub const fn is_accelerometer(self) -> bool { matches!(self, Self::Accelerometer) }

    /// Text shown after the "Accel.:" caption.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Joystick => "OFF",
            Self::Accelerometer => "ON",
        }
    }
}

/// Resolve a bearing from the joystick direction flags.
pub fn resolve_joystick(buttons: &ButtonStates) -> Bearing {
    let down = buttons.is_pressed(Button::JoystickDown);
    let up = buttons.is_pressed(Button::JoystickUp);
    let left = buttons.is_pressed(Button::JoystickLeft);
    let right = buttons.is_pressed(Button::JoystickRight);

    let mut bearing = None;

    if down {
        bearing = Some(if left {
            Bearing::DownLeft
        } else if right {
            Bearing::DownRight
        } else {
            Bearing::Down
        });
    }

    // Overrides the DOWN result when both are pressed.
    if up {
        bearing = Some(if left {
            Bearing::UpLeft
        } else if right {
            Bearing::UpRight
        } else {
            Bearing::Up
        });
    }

    if !down && !up {
        if left {
            bearing = Some(Bearing::Left);
        } else if right {
            bearing = Some(Bearing::Right);
        }
    }

    bearing.unwrap_or(Bearing::Stop)
}

/// Resolve a bearing from accelerometer tilt. Pure in `(x, y)`; `z` is ignored.
pub fn resolve_tilt(
    sample: AccelSample,
    thresholds: &TiltThresholds,
) -> Bearing {
    let AccelSample { x, y, .. } = sample;
    let leans_left = x > thresholds.left_above;
    let leans_right = x < thresholds.right_below;

    let mut bearing = None;

    if y > thresholds.down_above {
        bearing = Some(if leans_left {
            Bearing::DownLeft
        } else if leans_right {
            Bearing::DownRight
        } else {
            Bearing::Down
        });
    }

    if y < thresholds.up_below {
        bearing = Some(if leans_left {
            Bearing::UpLeft
        } else if leans_right {
            Bearing::UpRight
        } else {
            Bearing::Up
        });
    }

    // Level band overlaps the UP band for small negative y.
    if y < thresholds.level_below && y > thresholds.level_above {
        if leans_left {
            bearing = Some(Bearing::Left);
        } else if leans_right {
            bearing = Some(Bearing::Right);
        }
    }

    bearing.unwrap_or(Bearing::Stop)
}

// =============================================================================
// Unit Tests
// =============================================================================
