//! Keyboard-driven stand-in for the remote's controls.
//!
//! # Key Map
//!
//! | Key | Control |
//! |-----|---------|
//! | W / A / S / D | Joystick up / left / down / right (held) |
//! | E | Joystick click (leave manual control) |
//! | U / I / O / P | Switches 1-4 (held) |
//! | Q / Z | Slider up (slower) / down (faster) |
//! | T / G | Tilt forward / back |
//! | F / H | Tilt left / right |
//! | R | Level the accelerometer |

use arducar_remote::config::SLIDER_MAX;
use arducar_remote::{AccelSample, Button, ControlInputs};
use embedded_graphics_simulator::sdl2::Keycode;

// =============================================================================
// Simulation Steps
// =============================================================================

/// Slider travel per key press (about one speed level).
const SLIDER_STEP: u16 = 100;

/// Accelerometer change per key press.
const TILT_STEP: i16 = 20;

/// Accelerometer readings are clamped to this magnitude.
const TILT_LIMIT: i16 = 300;

/// What a key press changed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KeyAction {
    /// A digital control went down.
    Button,
    /// The slider moved.
    Slider,
    /// The accelerometer reading changed.
    Tilt,
    /// Key is not mapped.
    Ignored,
}

/// Control state driven by key events.
pub struct SimulatedInputs {
    held: [bool; Button::COUNT],
    slider: u16,
    accel: AccelSample,
}

impl SimulatedInputs {
    /// Everything released, slider fully up (stopped), device level.
    pub const fn new() -> Self {
        Self {
            held: [false; Button::COUNT],
            slider: SLIDER_MAX,
            accel: AccelSample::new(0, 0, 0),
        }
    }

    /// Apply a key press.
    pub fn key_down(
        &mut self,
        keycode: Keycode,
    ) -> KeyAction {
        if let Some(button) = button_for(keycode) {
            self.held[button as usize] = true;
            return KeyAction::Button;
        }

        match keycode {
            Keycode::Q => self.slider = self.slider.saturating_add(SLIDER_STEP).min(SLIDER_MAX),
            Keycode::Z => self.slider = self.slider.saturating_sub(SLIDER_STEP),
            Keycode::T => self.accel.y = tilt(self.accel.y, -TILT_STEP),
            Keycode::G => self.accel.y = tilt(self.accel.y, TILT_STEP),
            Keycode::F => self.accel.x = tilt(self.accel.x, TILT_STEP),
            Keycode::H => self.accel.x = tilt(self.accel.x, -TILT_STEP),
            Keycode::R => self.accel = AccelSample::new(0, 0, 0),
            _ => return KeyAction::Ignored,
        }

        match keycode {
            Keycode::Q | Keycode::Z => KeyAction::Slider,
            _ => KeyAction::Tilt,
        }
    }

    /// Apply a key release.
    pub fn key_up(
        &mut self,
        keycode: Keycode,
    ) {
        if let Some(button) = button_for(keycode) {
            self.held[button as usize] = false;
        }
    }

    #[inline]
    pub const fn slider_value(&self) -> u16 { self.slider }

    #[inline]
    pub const fn accel_value(&self) -> AccelSample { self.accel }
}

impl Default for SimulatedInputs {
    fn default() -> Self { Self::new() }
}

impl ControlInputs for SimulatedInputs {
    fn is_pressed(
        &mut self,
        button: Button,
    ) -> bool {
        self.held[button as usize]
    }

    fn slider(&mut self) -> u16 { self.slider }

    fn accelerometer(&mut self) -> AccelSample { self.accel }
}

fn button_for(keycode: Keycode) -> Option<Button> {
    Some(match keycode {
        Keycode::W => Button::JoystickUp,
        Keycode::A => Button::JoystickLeft,
        Keycode::S => Button::JoystickDown,
        Keycode::D => Button::JoystickRight,
        Keycode::E => Button::JoystickClick,
        Keycode::U => Button::Switch1,
        Keycode::I => Button::Switch2,
        Keycode::O => Button::Switch3,
        Keycode::P => Button::Switch4,
        _ => return None,
    })
}

fn tilt(
    value: i16,
    step: i16,
) -> i16 {
    value.saturating_add(step).clamp(-TILT_LIMIT, TILT_LIMIT)
}
