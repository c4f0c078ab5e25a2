//! Pre-computed static text styles.
//!
//! The panel's text model is cursor based: a string is placed by its top-left
//! corner in one of two font sizes. Every style here therefore uses a top
//! baseline, and all of them are `const` so nothing is built per frame.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_14_POINT;

use crate::colors::{BLACK, GREEN, WHITE};

// =============================================================================
// Text Placement Styles
// =============================================================================

/// Top-left anchored text, matching a cursor-positioned print.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Horizontally centered, vertically middle anchored. Used for popup text.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Character Styles
// =============================================================================

/// Small white text (menu entries, captions).
pub const SMALL_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small black text (title bar on blue).
pub const SMALL_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Small green text ("ON" mode label).
pub const SMALL_GREEN: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GREEN);

/// Large green text for the splash title (`ProFont` 14pt).
pub const LARGE_GREEN: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, GREEN);
