//! Horizontal speed bar: white outline, magenta fill proportional to level.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use super::primitives::fill_rect;
use crate::colors::{BLACK, MAGENTA, WHITE};
use crate::config::layout::{SPEED_BAR_HEIGHT, SPEED_BAR_POS, SPEED_FRAME_POS, SPEED_FRAME_SIZE};
use crate::speed::bar_width;

const OUTLINE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);

/// Whole bar region, outline included.
pub const SPEED_BAR_AREA: Rectangle = Rectangle::new(SPEED_FRAME_POS, SPEED_FRAME_SIZE);

/// Clear the bar, redraw the outline and fill `level` segments.
pub fn draw_speed_bar<D>(
    display: &mut D,
    level: u8,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, SPEED_FRAME_POS, SPEED_FRAME_SIZE, BLACK);
    SPEED_BAR_AREA.into_styled(OUTLINE).draw(display).ok();
    fill_rect(
        display,
        SPEED_BAR_POS,
        Size::new(bar_width(level), SPEED_BAR_HEIGHT),
        MAGENTA,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::layout::SPEED_BAR_WIDTH;
    use crate::test_display::TestDisplay;

    fn fill_area() -> Rectangle { Rectangle::new(SPEED_BAR_POS, Size::new(SPEED_BAR_WIDTH, SPEED_BAR_HEIGHT)) }

    #[test]
    fn test_fill_matches_level() {
        let mut display = TestDisplay::new();
        draw_speed_bar(&mut display, 4);
        assert_eq!(display.count_in(fill_area(), MAGENTA), (4 * 14 * SPEED_BAR_HEIGHT) as usize);
        assert_eq!(display.pixel(SPEED_FRAME_POS), Some(WHITE));
    }

    #[test]
    fn test_level_zero_is_empty_outline() {
        let mut display = TestDisplay::new();
        draw_speed_bar(&mut display, 0);
        assert_eq!(display.count_in(fill_area(), MAGENTA), 0);
        assert!(display.count_in(SPEED_BAR_AREA, WHITE) > 0);
    }

    #[test]
    fn test_lower_level_shrinks_fill() {
        let mut display = TestDisplay::new();
        draw_speed_bar(&mut display, 10);
        assert_eq!(display.count_in(fill_area(), MAGENTA), (SPEED_BAR_WIDTH * SPEED_BAR_HEIGHT) as usize);

        draw_speed_bar(&mut display, 3);
        assert_eq!(display.count_in(fill_area(), MAGENTA), (3 * 14 * SPEED_BAR_HEIGHT) as usize);
    }
}
