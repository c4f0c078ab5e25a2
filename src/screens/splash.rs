//! Splash screen with the main menu.
//!
//! # Visual Layout
//!
//! ```text
//! ┌──────────────────────────┐
//! │ ArduCar                  │  Large green
//! │ Remote                   │
//! │                          │
//! │ MENU:                    │  Small white
//! │ - Bt 1: Control manual   │
//! │ - Bt 2: Auto             │
//! │ - Bt 3: GPS              │
//! └──────────────────────────┘
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;
use crate::config::layout::{
    MENU_AUTO_POS,
    MENU_GPS_POS,
    MENU_HEADING_POS,
    MENU_MANUAL_POS,
    SPLASH_SUBTITLE_POS,
    SPLASH_TITLE_POS,
};
use crate::styles::{LARGE_GREEN, SMALL_WHITE};
use crate::widgets::primitives::draw_text_at;

pub const SPLASH_TITLE: &str = "ArduCar";
pub const SPLASH_SUBTITLE: &str = "Remote";

/// Menu heading followed by one line per switch.
pub const MENU_LINES: [(&str, Point); 4] = [
    ("MENU:", MENU_HEADING_POS),
    ("- Bt 1: Control manual", MENU_MANUAL_POS),
    ("- Bt 2: Auto", MENU_AUTO_POS),
    ("- Bt 3: GPS", MENU_GPS_POS),
];

/// Clear the screen and draw the splash with the menu.
pub fn draw_splash<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    draw_text_at(display, SPLASH_TITLE, SPLASH_TITLE_POS, LARGE_GREEN);
    draw_text_at(display, SPLASH_SUBTITLE, SPLASH_SUBTITLE_POS, LARGE_GREEN);

    for (line, pos) in MENU_LINES {
        draw_text_at(display, line, pos, SMALL_WHITE);
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::colors::{GREEN, WHITE};
    use crate::test_display::TestDisplay;

    #[test]
    fn test_splash_title_and_menu() {
        let mut display = TestDisplay::new();
        draw_splash(&mut display);

        let title = Rectangle::new(SPLASH_TITLE_POS, Size::new(160, 18));
        assert!(display.count_in(title, GREEN) > 0);

        let menu = Rectangle::new(MENU_HEADING_POS, Size::new(160, 56));
        assert!(display.count_in(menu, WHITE) > 0);
        assert_eq!(display.count_in(menu, GREEN), 0);
    }

    #[test]
    fn test_splash_clears_previous_content() {
        let mut display = TestDisplay::new();
        display.clear(WHITE).ok();
        draw_splash(&mut display);
        assert_eq!(display.pixel(Point::new(159, 127)), Some(BLACK));
    }

    #[test]
    fn test_menu_lines_fit_width() {
        // FONT_6X10 is 6 px per character
        for (line, pos) in MENU_LINES {
            assert!(pos.x + line.len() as i32 * 6 <= 160, "{line}");
        }
    }
}
