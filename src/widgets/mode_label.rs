//! "Accel.:" caption and its ON/OFF value.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::{draw_text_at, fill_rect};
use crate::colors::BLACK;
use crate::config::layout::{MODE_CAPTION_POS, MODE_VALUE_CLEAR_SIZE, MODE_VALUE_POS};
use crate::resolver::ControlMode;
use crate::styles::{SMALL_GREEN, SMALL_WHITE};

pub const MODE_CAPTION: &str = "Accel.:";

pub fn draw_mode_caption<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text_at(display, MODE_CAPTION, MODE_CAPTION_POS, SMALL_WHITE);
}

/// Clear the value box and print "ON" in green or "OFF" in white.
pub fn draw_mode_value<D>(
    display: &mut D,
    mode: ControlMode,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, MODE_VALUE_POS, MODE_VALUE_CLEAR_SIZE, BLACK);
    let style = if mode.is_accelerometer() { SMALL_GREEN } else { SMALL_WHITE };
    draw_text_at(display, mode.label(), MODE_VALUE_POS, style);
}
