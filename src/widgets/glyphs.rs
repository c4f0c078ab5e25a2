//! Direction pad: cross background, four triangles and the center stop marker.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};

use super::primitives::{fill_rect, fill_triangle};
use crate::bearing::{Bearing, Glyph};
use crate::colors::{BLACK, GREEN, PAD_GRAY};
use crate::config::layout::{
    DOWN_TRIANGLE,
    LEFT_TRIANGLE,
    PAD_H_POS,
    PAD_H_SIZE,
    PAD_V_POS,
    PAD_V_SIZE,
    RIGHT_TRIANGLE,
    STOP_CENTER,
    STOP_DIAMETER,
    UP_TRIANGLE,
};

/// Color of a lit glyph.
pub const GLYPH_ON: Rgb565 = GREEN;

/// Color of an unlit glyph.
pub const GLYPH_OFF: Rgb565 = BLACK;

/// Draw one glyph in `color`.
pub fn draw_glyph<D>(
    display: &mut D,
    glyph: Glyph,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match glyph {
        Glyph::Up => fill_triangle(display, UP_TRIANGLE, color),
        Glyph::Down => fill_triangle(display, DOWN_TRIANGLE, color),
        Glyph::Left => fill_triangle(display, LEFT_TRIANGLE, color),
        Glyph::Right => fill_triangle(display, RIGHT_TRIANGLE, color),
        Glyph::Stop => {
            Circle::with_center(STOP_CENTER, STOP_DIAMETER)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(display)
                .ok();
        }
    }
}

/// Draw the gray cross with every glyph unlit.
pub fn draw_direction_pad<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, PAD_H_POS, PAD_H_SIZE, PAD_GRAY);
    fill_rect(display, PAD_V_POS, PAD_V_SIZE, PAD_GRAY);
    for glyph in Glyph::ALL {
        draw_glyph(display, glyph, GLYPH_OFF);
    }
}

/// Erase all glyphs, then light the ones for `bearing`.
pub fn draw_bearing<D>(
    display: &mut D,
    bearing: Bearing,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for glyph in Glyph::ALL {
        draw_glyph(display, glyph, GLYPH_OFF);
    }
    for &glyph in bearing.glyphs() {
        draw_glyph(display, glyph, GLYPH_ON);
    }
}

/// A pixel guaranteed to be inside `glyph`, for probing what is lit.
pub const fn glyph_probe(glyph: Glyph) -> Point {
    match glyph {
        Glyph::Up => Point::new(35, 43),
        Glyph::Down => Point::new(35, 77),
        Glyph::Left => Point::new(18, 60),
        Glyph::Right => Point::new(52, 60),
        Glyph::Stop => STOP_CENTER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_display::TestDisplay;

    fn lit(display: &TestDisplay) -> Vec<Glyph> {
        Glyph::ALL
            .into_iter()
            .filter(|&g| display.pixel(glyph_probe(g)) == Some(GLYPH_ON))
            .collect()
    }

    #[test]
    fn test_pad_starts_unlit() {
        let mut display = TestDisplay::new();
        draw_direction_pad(&mut display);
        assert!(lit(&display).is_empty());
        assert_eq!(display.pixel(Point::new(6, 51)), Some(PAD_GRAY));
    }

    #[test]
    fn test_each_bearing_lights_its_glyphs() {
        for bearing in Bearing::ALL {
            let mut display = TestDisplay::new();
            draw_direction_pad(&mut display);
            draw_bearing(&mut display, bearing);

            let mut expected: Vec<Glyph> = bearing.glyphs().to_vec();
            let mut got = lit(&display);
            expected.sort_by_key(|g| *g as u8);
            got.sort_by_key(|g| *g as u8);
            assert_eq!(got, expected, "{bearing:?}");
        }
    }

    #[test]
    fn test_new_bearing_erases_previous() {
        let mut display = TestDisplay::new();
        draw_direction_pad(&mut display);
        draw_bearing(&mut display, Bearing::DownLeft);
        draw_bearing(&mut display, Bearing::Up);
        assert_eq!(lit(&display), vec![Glyph::Up]);
    }

    #[test]
    fn test_stop_lights_center() {
        let mut display = TestDisplay::new();
        draw_direction_pad(&mut display);
        draw_bearing(&mut display, Bearing::Stop);
        assert_eq!(lit(&display), vec![Glyph::Stop]);
    }
}
