//! Low-level drawing primitives shared across widgets.
//!
//! The panel is driven with cursor-positioned text and a handful of filled
//! shapes; screen code is written as a list of these placements.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;

use crate::styles::TOP_LEFT;

/// Print `text` with its top-left corner at `pos`.
pub fn draw_text_at<D>(
    display: &mut D,
    text: &str,
    pos: Point,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, pos, style, TOP_LEFT).draw(display).ok();
}

/// Fill an axis-aligned rectangle.
pub fn fill_rect<D>(
    display: &mut D,
    pos: Point,
    size: Size,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    // Zero-width fills (speed level 0) draw nothing
    if size.width == 0 || size.height == 0 {
        return;
    }
    Rectangle::new(pos, size)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Fill a triangle given its three vertices.
pub fn fill_triangle<D>(
    display: &mut D,
    vertices: [Point; 3],
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let [a, b, c] = vertices;
    Triangle::new(a, b, c)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}
