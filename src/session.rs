//! Manual control session: one pass of the sample → resolve pipeline per poll.
//!
//! A [`ManualSession`] lives from the moment manual control is chosen on the
//! menu until the joystick is clicked, and is dropped on return to the menu.
//!
//! # Poll Cycle
//!
//! 1. Joystick click held → [`ManualStep::Exit`]
//! 2. Sample the 8 snapshot buttons; compare with the stored snapshot
//! 3. If anything changed (or accelerometer mode is on): apply the mode switch
//!    edge, then resolve the bearing (reading the accelerometer only in
//!    accelerometer mode, after the toggle)
//! 4. Store the snapshot if it changed
//! 5. Read the slider into a speed level
//!
//! Tilt can change without any button edge, which is why accelerometer mode
//! re-resolves every cycle.

use crate::bearing::Bearing;
use crate::config::TiltThresholds;
use crate::input::{AccelSample, Button, ButtonStates, ControlInputs};
use crate::resolver::{ControlMode, resolve_joystick, resolve_tilt};
use crate::speed::speed_level;

/// Button that flips between joystick and accelerometer steering.
pub const MODE_SWITCH: Button = Button::Switch3;

/// Button that ends the session.
pub const EXIT_BUTTON: Button = Button::JoystickClick;

/// State after one poll cycle, consumed by the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ManualFrame {
    pub bearing: Bearing,
    pub mode: ControlMode,
    /// Speed level 0..=10.
    pub speed: u8,
    /// Snapshot read this cycle.
    pub buttons: ButtonStates,
    /// Whether the snapshot differed from the stored one.
    pub buttons_changed: bool,
    /// Whether the mode switch flipped the mode this cycle.
    pub mode_toggled: bool,
    /// Accelerometer reading, present only when it was read this cycle.
    pub accel: Option<AccelSample>,
}

/// Outcome of [`ManualSession::poll`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ManualStep {
    /// Joystick clicked: leave manual control.
    Exit,
    /// Keep going with this frame.
    Frame(ManualFrame),
}

/// Per-session manual control state.
#[derive(Clone, Debug)]
pub struct ManualSession {
    /// Snapshot stored on the last cycle that saw a change.
    previous: ButtonStates,
    mode: ControlMode,
    bearing: Bearing,
    /// First cycle always counts as changed so the initial bearing gets drawn.
    first_cycle: bool,
    thresholds: TiltThresholds,
}

impl ManualSession {
    /// New session in joystick mode with default tilt calibration.
    pub const fn new() -> Self { Self::with_thresholds(TiltThresholds::DEFAULT) }

    pub const fn with_thresholds(thresholds: TiltThresholds) -> Self {
        Self {
            previous: ButtonStates::RELEASED,
            mode: ControlMode::Joystick,
            bearing: Bearing::Stop,
            first_cycle: true,
            thresholds,
        }
    }

    #[inline]
    pub const fn mode(&self) -> ControlMode { self.mode }

    /// Bearing resolved on the last evaluated cycle.
    #[inline]
    pub const fn bearing(&self) -> Bearing { self.bearing }

    /// Run one poll cycle against the hardware.
    pub fn poll<I>(
        &mut self,
        inputs: &mut I,
    ) -> ManualStep
    where
        I: ControlInputs + ?Sized,
    {
        if inputs.is_pressed(EXIT_BUTTON) {
            return ManualStep::Exit;
        }

        let buttons = ButtonStates::sample(inputs);
        let buttons_changed = self.first_cycle || buttons != self.previous;
        self.first_cycle = false;

        let mut mode_toggled = false;
        let mut accel = None;

        if self.mode.is_accelerometer() || buttons_changed {
            if buttons.just_pressed(&self.previous, MODE_SWITCH) {
                self.mode = self.mode.toggle();
                mode_toggled = true;
            }

            self.bearing = match self.mode {
                ControlMode::Joystick => resolve_joystick(&buttons),
                ControlMode::Accelerometer => {
                    let sample = inputs.accelerometer();
                    accel = Some(sample);
                    resolve_tilt(sample, &self.thresholds)
                }
            };
        }

        if buttons_changed {
            self.previous = buttons;
        }

        let speed = speed_level(inputs.slider());

        ManualStep::Frame(ManualFrame {
            bearing: self.bearing,
            mode: self.mode,
            speed,
            buttons,
            buttons_changed,
            mode_toggled,
            accel,
        })
    }
}

impl Default for ManualSession {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
