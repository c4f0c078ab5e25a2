//! Notice popup shown when a menu entry has no implementation yet.
//!
//! The popup is centered on screen with a white 3px border and red
//! background. It is drawn once over the splash and stays until the app
//! repaints the splash after the notice period.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{RED, WHITE};
use crate::config::layout::{NOTICE_HEIGHT, NOTICE_WIDTH, NOTICE_X, NOTICE_Y};
use crate::config::{CENTER_X, CENTER_Y};
use crate::styles::{CENTERED, SMALL_WHITE};

/// Second line of the notice.
pub const NOT_IMPLEMENTED_TEXT: &str = "NOT YET IMPLEMENTED";

// =============================================================================
// Pre-computed Geometry
// =============================================================================

const BORDER: u32 = 3;

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

const NOTICE_BORDER_POS: Point = Point::new(NOTICE_X - BORDER as i32, NOTICE_Y - BORDER as i32);
const NOTICE_BORDER_SIZE: Size = Size::new(NOTICE_WIDTH + 2 * BORDER, NOTICE_HEIGHT + 2 * BORDER);

const NOTICE_BG_POS: Point = Point::new(NOTICE_X, NOTICE_Y);
const NOTICE_BG_SIZE: Size = Size::new(NOTICE_WIDTH, NOTICE_HEIGHT);

const NOTICE_TEXT1_POS: Point = Point::new(CENTER_X, CENTER_Y - 8);
const NOTICE_TEXT2_POS: Point = Point::new(CENTER_X, CENTER_Y + 8);

/// Full popup area including the border.
pub const NOTICE_AREA: Rectangle = Rectangle::new(NOTICE_BORDER_POS, NOTICE_BORDER_SIZE);

/// Draw the "<feature> / NOT YET IMPLEMENTED" popup.
pub fn draw_not_implemented_popup<D>(
    display: &mut D,
    feature: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    // White border (drawn as larger rectangle behind the main popup)
    Rectangle::new(NOTICE_BORDER_POS, NOTICE_BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    Rectangle::new(NOTICE_BG_POS, NOTICE_BG_SIZE)
        .into_styled(RED_FILL)
        .draw(display)
        .ok();

    Text::with_text_style(feature, NOTICE_TEXT1_POS, SMALL_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(NOT_IMPLEMENTED_TEXT, NOTICE_TEXT2_POS, SMALL_WHITE, CENTERED)
        .draw(display)
        .ok();
}
