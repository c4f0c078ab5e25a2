//! Test display for drawing tests.
//!
//! `MockDisplay` from embedded-graphics is capped at 64x64 and panics on
//! overdraw, while the remote's screens are 160x128 and erase before they
//! draw. This framebuffer allows overdraw and also counts how many times
//! the drawing code hit the target, so redraw gating can be asserted.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// In-memory RGB565 framebuffer with a draw call counter.
pub struct TestDisplay {
    pixels: Vec<Rgb565>,
    width: u32,
    height: u32,
    draw_calls: usize,
}

impl TestDisplay {
    /// Create a black display matching the panel (160x128).
    pub fn new() -> Self {
        Self {
            pixels: vec![BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            draw_calls: 0,
        }
    }

    /// Color at a pixel, `None` when off screen.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        if point.x < 0 || point.y < 0 || point.x as u32 >= self.width || point.y as u32 >= self.height {
            return None;
        }
        Some(self.pixels[(point.y as u32 * self.width + point.x as u32) as usize])
    }

    /// Number of `DrawTarget` calls since creation or the last reset.
    pub const fn draw_calls(&self) -> usize { self.draw_calls }

    pub fn reset_draw_calls(&mut self) { self.draw_calls = 0; }

    /// Count pixels of `color` inside `area`.
    pub fn count_in(
        &self,
        area: Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points().filter(|&p| self.pixel(p) == Some(color)).count()
    }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.draw_calls += 1;
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < self.width && (coord.y as u32) < self.height {
                let idx = (coord.y as u32 * self.width + coord.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::PrimitiveStyle;

    use super::*;
    use crate::colors::WHITE;

    #[test]
    fn test_display_allows_overdraw_and_counts() {
        let mut display = TestDisplay::new();
        let area = Rectangle::new(Point::new(0, 0), Size::new(10, 10));

        area.into_styled(PrimitiveStyle::with_fill(WHITE)).draw(&mut display).ok();
        area.into_styled(PrimitiveStyle::with_fill(BLACK)).draw(&mut display).ok();

        assert!(display.draw_calls() >= 2);
        assert_eq!(display.count_in(area, BLACK), 100);
        display.reset_draw_calls();
        assert_eq!(display.draw_calls(), 0);
    }

    #[test]
    fn test_off_screen_pixel() {
        let display = TestDisplay::new();
        assert_eq!(display.pixel(Point::new(-1, 0)), None);
        assert_eq!(display.pixel(Point::new(160, 0)), None);
        assert_eq!(display.pixel(Point::new(0, 0)), Some(BLACK));
    }
}
