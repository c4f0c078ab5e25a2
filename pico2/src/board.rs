//! Handheld controls wired to the Pico 2.
//!
//! Pin mapping:
//!
//! | Control | GPIO |
//! |---------|------|
//! | Joystick down / left / up / right | 2 / 3 / 4 / 5 |
//! | Joystick click | 6 |
//! | Switch 1 / 2 / 3 / 4 | 7 / 8 / 9 / 10 |
//! | Slider (ADC0) | 26 |
//! | Accelerometer X / Y (ADC1 / ADC2) | 27 / 28 |
//!
//! All digital controls are active-low with internal pull-ups. The Pico 2
//! uses ADC3 (GPIO29) to sense VSYS, so the accelerometer Z axis is not
//! wired; steering only uses X and Y and Z reads as 0.

use arducar_remote::input::adc::{ADC12_MID, axis_from_adc12, slider_from_adc12};
use arducar_remote::{AccelSample, Button, ControlInputs};
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::Input;

/// Digital pins in [`Button::ALL`] order.
pub type ButtonPins<'d> = [Input<'d>; Button::COUNT];

/// Live readings from the handheld's pins and ADC.
pub struct BoardInputs<'d> {
    buttons: ButtonPins<'d>,
    adc: Adc<'d, Blocking>,
    slider: Channel<'d>,
    accel_x: Channel<'d>,
    accel_y: Channel<'d>,
}

impl<'d> BoardInputs<'d> {
    pub fn new(
        buttons: ButtonPins<'d>,
        adc: Adc<'d, Blocking>,
        slider: Channel<'d>,
        accel_x: Channel<'d>,
        accel_y: Channel<'d>,
    ) -> Self {
        Self {
            buttons,
            adc,
            slider,
            accel_x,
            accel_y,
        }
    }

    /// 12-bit reading, mid-scale when the conversion fails.
    fn read_raw(
        adc: &mut Adc<'d, Blocking>,
        channel: &mut Channel<'d>,
    ) -> u16 {
        match adc.blocking_read(channel) {
            Ok(raw) => raw,
            Err(_) => {
                defmt::warn!("ADC read failed, using mid-scale");
                ADC12_MID
            }
        }
    }
}

impl ControlInputs for BoardInputs<'_> {
    fn is_pressed(
        &mut self,
        button: Button,
    ) -> bool {
        self.buttons[button as usize].is_low()
    }

    fn slider(&mut self) -> u16 { slider_from_adc12(Self::read_raw(&mut self.adc, &mut self.slider)) }

    fn accelerometer(&mut self) -> AccelSample {
        let x = axis_from_adc12(Self::read_raw(&mut self.adc, &mut self.accel_x));
        let y = axis_from_adc12(Self::read_raw(&mut self.adc, &mut self.accel_y));
        AccelSample::new(x, y, 0)
    }
}
