//! Splash menu entries and switch mapping.

use crate::input::{Button, ControlInputs};

/// What the user picked on the splash menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuChoice {
    /// Switch 1: drive with joystick or tilt.
    ManualControl,
    /// Switch 2: autonomous driving (not implemented on the car yet).
    Auto,
    /// Switch 3: GPS navigation (not implemented on the car yet).
    Gps,
}

impl MenuChoice {
    /// Choices in switch priority order.
    pub const ALL: [Self; 3] = [Self::ManualControl, Self::Auto, Self::Gps];

    /// Switch that selects this entry.
    pub const fn switch(self) -> Button {
        match self {
            Self::ManualControl => Button::Switch1,
            Self::Auto => Button::Switch2,
            Self::Gps => Button::Switch3,
        }
    }

    pub const fn is_implemented(self) -> bool { matches!(self, Self::ManualControl) }

    /// Upper-case label, used as the notice popup heading.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ManualControl => "MANUAL",
            Self::Auto => "AUTO",
            Self::Gps => "GPS",
        }
    }

    /// Read the menu switches. When several are held, switch 1 wins over 2,
    /// and 2 over 3. Switch 4 is not a menu switch.
    pub fn from_inputs<I>(inputs: &mut I) -> Option<Self>
    where
        I: ControlInputs + ?Sized,
    {
        Self::ALL.into_iter().find(|choice| inputs.is_pressed(choice.switch()))
    }
}
