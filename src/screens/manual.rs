//! Manual control screen.
//!
//! # Visual Layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │▓ ArduCar - Manual Control  ▓│  Blue rounded bar, black text
//! │      ▲                      │
//! │    ◀ ● ▶       Accel.: OFF   │  Gray cross pad; ON green / OFF white
//! │      ▼                      │
//! │ ┌──────────────────────────┐ │
//! │ │██████████                │ │  Speed bar, 14 px per level
//! │ └──────────────────────────┘ │
//! └──────────────────────────────┘
//! ```
//!
//! [`draw_manual_screen`] paints the chrome once per session. Afterwards only
//! [`render_manual_frame`] runs, and it touches a region only when the
//! [`RenderState`] reports it dirty.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::colors::{BLACK, BLUE};
use crate::config::layout::{TITLE_BAR_POS, TITLE_BAR_RADIUS, TITLE_BAR_SIZE, TITLE_TEXT_POS};
use crate::render::{Redraw, RenderState};
use crate::resolver::ControlMode;
use crate::session::ManualFrame;
use crate::styles::SMALL_BLACK;
use crate::widgets::primitives::draw_text_at;
use crate::widgets::{draw_bearing, draw_direction_pad, draw_mode_caption, draw_mode_value, draw_speed_bar};

pub const MANUAL_TITLE: &str = "ArduCar - Manual Control";

/// Clear the screen and draw the static chrome.
///
/// Leaves `state` describing the fresh screen: glyphs and speed bar unknown,
/// mode label showing "OFF".
pub fn draw_manual_screen<D>(
    display: &mut D,
    state: &mut RenderState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    state.mark_display_cleared();

    RoundedRectangle::with_equal_corners(Rectangle::new(TITLE_BAR_POS, TITLE_BAR_SIZE), TITLE_BAR_RADIUS)
        .into_styled(PrimitiveStyle::with_fill(BLUE))
        .draw(display)
        .ok();
    draw_text_at(display, MANUAL_TITLE, TITLE_TEXT_POS, SMALL_BLACK);

    draw_direction_pad(display);

    draw_mode_caption(display);
    draw_mode_value(display, ControlMode::Joystick);
    state.check_mode_dirty(ControlMode::Joystick);
}

/// Redraw whatever changed since the last call.
pub fn render_manual_frame<D>(
    display: &mut D,
    state: &mut RenderState,
    frame: &ManualFrame,
) -> Redraw
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut redraw = Redraw::default();

    if state.check_bearing_dirty(frame.bearing) {
        draw_bearing(display, frame.bearing);
        redraw.bearing = true;
    }

    if state.check_speed_dirty(frame.speed) {
        draw_speed_bar(display, frame.speed);
        redraw.speed = true;
    }

    if state.check_mode_dirty(frame.mode) {
        draw_mode_value(display, frame.mode);
        redraw.mode = true;
    }

    redraw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bearing::{Bearing, Glyph};
    use crate::colors::{GREEN, MAGENTA, WHITE};
    use crate::config::layout::{MODE_VALUE_CLEAR_SIZE, MODE_VALUE_POS};
    use crate::input::ButtonStates;
    use crate::test_display::TestDisplay;
    use crate::widgets::glyphs::{GLYPH_ON, glyph_probe};
    use crate::widgets::speed_bar::SPEED_BAR_AREA;

    fn frame(
        bearing: Bearing,
        speed: u8,
        mode: ControlMode,
    ) -> ManualFrame {
        ManualFrame {
            bearing,
            mode,
            speed,
            buttons: ButtonStates::RELEASED,
            buttons_changed: false,
            mode_toggled: false,
            accel: None,
        }
    }

    fn ready() -> (TestDisplay, RenderState) {
        let mut display = TestDisplay::new();
        let mut state = RenderState::new();
        draw_manual_screen(&mut display, &mut state);
        (display, state)
    }

    fn lit(display: &TestDisplay) -> usize {
        Glyph::ALL
            .into_iter()
            .filter(|&g| display.pixel(glyph_probe(g)) == Some(GLYPH_ON))
            .count()
    }

    #[test]
    fn test_chrome() {
        let (display, state) = ready();
        assert_eq!(display.pixel(Point::new(80, 1)), Some(BLUE));
        assert_eq!(lit(&display), 0);
        assert_eq!(state.drawn_mode(), Some(ControlMode::Joystick));
        assert_eq!(state.drawn_bearing(), None);
    }

    #[test]
    fn test_first_frame_draws_bearing_and_speed_only() {
        let (mut display, mut state) = ready();
        let redraw = render_manual_frame(&mut display, &mut state, &frame(Bearing::Stop, 0, ControlMode::Joystick));
        assert!(redraw.bearing);
        assert!(redraw.speed);
        assert!(!redraw.mode);
        assert_eq!(display.pixel(glyph_probe(Glyph::Stop)), Some(GREEN));
    }

    #[test]
    fn test_unchanged_frame_issues_no_draw_calls() {
        let (mut display, mut state) = ready();
        let f = frame(Bearing::DownLeft, 6, ControlMode::Accelerometer);
        render_manual_frame(&mut display, &mut state, &f);

        display.reset_draw_calls();
        let redraw = render_manual_frame(&mut display, &mut state, &f);
        assert!(redraw.is_empty());
        assert_eq!(display.draw_calls(), 0);
    }

    #[test]
    fn test_speed_change_leaves_glyphs_alone() {
        let (mut display, mut state) = ready();
        render_manual_frame(&mut display, &mut state, &frame(Bearing::Up, 2, ControlMode::Joystick));

        let redraw = render_manual_frame(&mut display, &mut state, &frame(Bearing::Up, 7, ControlMode::Joystick));
        assert!(!redraw.bearing);
        assert!(redraw.speed);
        assert_eq!(display.count_in(SPEED_BAR_AREA, MAGENTA), (7 * 14 * 20) as usize);
        assert_eq!(display.pixel(glyph_probe(Glyph::Up)), Some(GREEN));
    }

    #[test]
    fn test_scenario_down_then_down_left() {
        let (mut display, mut state) = ready();
        render_manual_frame(&mut display, &mut state, &frame(Bearing::Down, 0, ControlMode::Joystick));
        assert_eq!(lit(&display), 1);
        assert_eq!(display.pixel(glyph_probe(Glyph::Down)), Some(GREEN));

        render_manual_frame(&mut display, &mut state, &frame(Bearing::DownLeft, 0, ControlMode::Joystick));
        assert_eq!(lit(&display), 2);
        assert_eq!(display.pixel(glyph_probe(Glyph::Left)), Some(GREEN));
    }

    #[test]
    fn test_mode_label_follows_mode() {
        let (mut display, mut state) = ready();
        let label = Rectangle::new(MODE_VALUE_POS, MODE_VALUE_CLEAR_SIZE);

        render_manual_frame(&mut display, &mut state, &frame(Bearing::Stop, 0, ControlMode::Accelerometer));
        assert!(display.count_in(label, GREEN) > 0);
        assert_eq!(display.count_in(label, WHITE), 0);

        render_manual_frame(&mut display, &mut state, &frame(Bearing::Stop, 0, ControlMode::Joystick));
        assert_eq!(display.count_in(label, GREEN), 0);
        assert!(display.count_in(label, WHITE) > 0);
    }
}
