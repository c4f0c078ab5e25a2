//! Control inputs: button identities, per-cycle snapshots and the capability trait.
//!
//! The remote is active-low throughout (pull-ups, pressed = LOW). Implementations
//! of [`ControlInputs`] hide that and report "pressed" as `true`, so nothing in
//! the library ever deals with pin levels.

/// Every digital control on the handheld.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    JoystickDown,
    JoystickLeft,
    JoystickUp,
    JoystickRight,
    /// Joystick pushed in. Leaves manual control.
    JoystickClick,
    /// Bottom switch of the diamond. Menu: manual control.
    Switch1,
    /// Left switch. Menu: auto mode.
    Switch2,
    /// Top switch. Menu: GPS mode; manual control: accelerometer toggle.
    Switch3,
    /// Right switch. Sampled but unused.
    Switch4,
}

/// Number of buttons captured in a [`ButtonStates`] snapshot.
pub const SNAPSHOT_LEN: usize = 8;

/// Snapshot order. Identity is the position in this array.
pub const SNAPSHOT_ORDER: [Button; SNAPSHOT_LEN] = [
    Button::JoystickDown,
    Button::JoystickLeft,
    Button::JoystickUp,
    Button::JoystickRight,
    Button::Switch4,
    Button::Switch2,
    Button::Switch3,
    Button::Switch1,
];

impl Button {
    /// Number of buttons. `button as usize` is below this.
    pub const COUNT: usize = 9;

    pub const ALL: [Self; Self::COUNT] = [
        Self::JoystickDown,
        Self::JoystickLeft,
        Self::JoystickUp,
        Self::JoystickRight,
        Self::JoystickClick,
        Self::Switch1,
        Self::Switch2,
        Self::Switch3,
        Self::Switch4,
    ];

    /// Position of this button inside a [`ButtonStates`] snapshot.
    ///
    /// The joystick click is read on its own and is not part of the snapshot.
    pub const fn snapshot_index(self) -> Option<usize> {
        match self {
            Self::JoystickDown => Some(0),
            Self::JoystickLeft => Some(1),
            Self::JoystickUp => Some(2),
            Self::JoystickRight => Some(3),
            Self::Switch4 => Some(4),
            Self::Switch2 => Some(5),
            Self::Switch3 => Some(6),
            Self::Switch1 => Some(7),
            Self::JoystickClick => None,
        }
    }
}

/// One poll cycle's worth of button readings (`true` = pressed).
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonStates {
    pressed: [bool; SNAPSHOT_LEN],
}

impl ButtonStates {
    /// Nothing pressed.
    pub const RELEASED: Self = Self {
        pressed: [false; SNAPSHOT_LEN],
    };

    /// Build a snapshot from raw flags in [`SNAPSHOT_ORDER`].
    pub const fn from_flags(pressed: [bool; SNAPSHOT_LEN]) -> Self { Self { pressed } }

    /// Build a snapshot with the given buttons held.
    pub fn with_pressed(buttons: &[Button]) -> Self {
        let mut states = Self::RELEASED;
        for &button in buttons {
            if let Some(idx) = button.snapshot_index() {
                states.pressed[idx] = true;
            }
        }
        states
    }

    /// Read all snapshot buttons from the hardware, in [`SNAPSHOT_ORDER`].
    pub fn sample<I>(inputs: &mut I) -> Self
    where
        I: ControlInputs + ?Sized,
    {
        let mut pressed = [false; SNAPSHOT_LEN];
        for (slot, button) in pressed.iter_mut().zip(SNAPSHOT_ORDER) {
            *slot = inputs.is_pressed(button);
        }
        Self { pressed }
    }

    /// Whether `button` is held in this snapshot. Always `false` for the click.
    #[inline]
    pub fn is_pressed(
        &self,
        button: Button,
    ) -> bool {
        button.snapshot_index().is_some_and(|idx| self.pressed[idx])
    }

    /// Press edge: held now, not held in `previous`.
    #[inline]
    pub fn just_pressed(
        &self,
        previous: &Self,
        button: Button,
    ) -> bool {
        self.is_pressed(button) && !previous.is_pressed(button)
    }

    /// Raw flags in [`SNAPSHOT_ORDER`].
    #[inline]
    pub const fn flags(&self) -> [bool; SNAPSHOT_LEN] { self.pressed }
}

/// Raw accelerometer reading, signed and centered on 0.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AccelSample {
    pub const fn new(
        x: i16,
        y: i16,
        z: i16,
    ) -> Self {
        Self { x, y, z }
    }
}

/// Capability interface over the handheld's controls.
///
/// Reads are synchronous and always succeed; a board that cannot read a control
/// reports it released / mid-scale.
pub trait ControlInputs {
    /// Digital read. `true` while the button is held.
    fn is_pressed(
        &mut self,
        button: Button,
    ) -> bool;

    /// Analog slider reading, 0..=[`SLIDER_MAX`](crate::config::SLIDER_MAX).
    fn slider(&mut self) -> u16;

    /// Analog accelerometer reading.
    fn accelerometer(&mut self) -> AccelSample;
}

/// Conversions from 12-bit ADC counts to the 10-bit scales the logic is calibrated in.
pub mod adc {
    use crate::config::SLIDER_MAX;

    /// Full-scale 12-bit reading.
    pub const ADC12_MAX: u16 = 4095;

    /// Mid-scale 12-bit reading, used when a conversion fails.
    pub const ADC12_MID: u16 = 2048;

    /// Accelerometer zero-g point on the 10-bit scale.
    pub const AXIS_ZERO: i16 = 512;

    /// Slider position on the 0..=1023 scale.
    pub const fn slider_from_adc12(raw: u16) -> u16 {
        let scaled = (if raw > ADC12_MAX { ADC12_MAX } else { raw }) >> 2;
        if scaled > SLIDER_MAX { SLIDER_MAX } else { scaled }
    }

    /// Accelerometer axis centered on 0 (about -512..=511).
    pub const fn axis_from_adc12(raw: u16) -> i16 {
        let scaled = (if raw > ADC12_MAX { ADC12_MAX } else { raw }) >> 2;
        scaled as i16 - AXIS_ZERO
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Held(&'static [Button]);

    impl ControlInputs for Held {
        fn is_pressed(
            &mut self,
            button: Button,
        ) -> bool {
            self.0.contains(&button)
        }

        fn slider(&mut self) -> u16 { 0 }

        fn accelerometer(&mut self) -> AccelSample { AccelSample::default() }
    }

    #[test]
    fn test_snapshot_order_matches_indices() {
        for (idx, button) in SNAPSHOT_ORDER.iter().enumerate() {
            assert_eq!(button.snapshot_index(), Some(idx));
        }
        assert_eq!(Button::JoystickClick.snapshot_index(), None);
    }

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (idx, button) in Button::ALL.iter().enumerate() {
            assert_eq!(*button as usize, idx);
        }
    }

    #[test]
    fn test_mode_switch_is_index_six() {
        assert_eq!(Button::Switch3.snapshot_index(), Some(6));
    }

    #[test]
    fn test_sample_reads_all_positions() {
        let mut inputs = Held(&[Button::JoystickDown, Button::Switch1]);
        let states = ButtonStates::sample(&mut inputs);
        assert_eq!(states.flags(), [true, false, false, false, false, false, false, true]);
    }

    #[test]
    fn test_click_never_in_snapshot() {
        let mut inputs = Held(&[Button::JoystickClick]);
        let states = ButtonStates::sample(&mut inputs);
        assert_eq!(states, ButtonStates::RELEASED);
        assert!(!states.is_pressed(Button::JoystickClick));
    }

    #[test]
    fn test_just_pressed_is_edge_not_level() {
        let up = ButtonStates::RELEASED;
        let down = ButtonStates::with_pressed(&[Button::Switch3]);
        assert!(down.just_pressed(&up, Button::Switch3));
        assert!(!down.just_pressed(&down, Button::Switch3));
        assert!(!up.just_pressed(&down, Button::Switch3));
    }

    #[test]
    fn test_slider_scaling() {
        assert_eq!(adc::slider_from_adc12(0), 0);
        assert_eq!(adc::slider_from_adc12(4095), 1023);
        assert_eq!(adc::slider_from_adc12(2048), 512);
        assert_eq!(adc::slider_from_adc12(u16::MAX), 1023);
    }

    #[test]
    fn test_axis_scaling() {
        assert_eq!(adc::axis_from_adc12(adc::ADC12_MID), 0);
        assert_eq!(adc::axis_from_adc12(0), -512);
        assert_eq!(adc::axis_from_adc12(4095), 511);
    }
}
