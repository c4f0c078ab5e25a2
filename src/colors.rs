//! Color constants for the remote's screens.
//!
//! Standard colors come from the `RgbColor` trait constants so they match the
//! panel's native RGB565 values exactly. Rgb565 uses 16 bits per pixel
//! (5 red, 6 green, 5 blue) and needs no conversion on the ST7735.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Background, title text and erased glyphs.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Menu text, speed bar outline, "OFF" label.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green. Splash title, highlighted glyphs, "ON" label.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue. Manual control title bar.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure red. Notice popup background.
pub const RED: Rgb565 = Rgb565::RED;

/// Magenta. Speed bar fill.
pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;

// =============================================================================
// Custom Colors
// =============================================================================

/// Blue-gray of the direction pad behind the glyphs.
/// Raw RGB565 `0b01111_011101_01111` = (15, 29, 15).
pub const PAD_GRAY: Rgb565 = Rgb565::new(15, 29, 15);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::raw::RawU16;

    use super::*;

    #[test]
    fn test_pad_gray_matches_raw_word() {
        assert_eq!(PAD_GRAY, Rgb565::from(RawU16::new(0b0111_1011_1010_1111)));
    }

    #[test]
    fn test_highlight_differs_from_background() {
        assert_ne!(GREEN, BLACK);
        assert_ne!(PAD_GRAY, BLACK);
    }
}
