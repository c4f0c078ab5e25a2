//! Display and layout configuration constants.
//!
//! Coordinates are for the 160x128 ST7735 panel in landscape. Everything is
//! `const` so the drawing code never recomputes positions at runtime.

use embedded_graphics::prelude::{Point, Size};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7735, landscape)
pub const SCREEN_WIDTH: u32 = 160;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 128;

/// Screen center X coordinate. Used for centering popup text.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Splash / Menu
// =============================================================================

pub const SPLASH_TITLE_POS: Point = Point::new(0, 0);
pub const SPLASH_SUBTITLE_POS: Point = Point::new(0, 18);
pub const MENU_HEADING_POS: Point = Point::new(0, 61);
pub const MENU_MANUAL_POS: Point = Point::new(0, 78);
pub const MENU_AUTO_POS: Point = Point::new(0, 91);
pub const MENU_GPS_POS: Point = Point::new(0, 104);

// =============================================================================
// Manual Control: Title Bar
// =============================================================================

pub const TITLE_BAR_POS: Point = Point::new(0, 0);
pub const TITLE_BAR_SIZE: Size = Size::new(SCREEN_WIDTH, 16);
pub const TITLE_BAR_RADIUS: Size = Size::new(4, 4);
pub const TITLE_TEXT_POS: Point = Point::new(8, 4);

// =============================================================================
// Manual Control: Direction Pad
// =============================================================================

/// Horizontal arm of the cross-shaped pad.
pub const PAD_H_POS: Point = Point::new(5, 50);
pub const PAD_H_SIZE: Size = Size::new(60, 20);

/// Vertical arm of the cross-shaped pad.
pub const PAD_V_POS: Point = Point::new(25, 30);
pub const PAD_V_SIZE: Size = Size::new(20, 60);

/// Center "stop" marker (radius 6 => 13 px diameter).
pub const STOP_CENTER: Point = Point::new(35, 60);
pub const STOP_DIAMETER: u32 = 13;

/// Direction triangles, vertices in drawing order.
pub const UP_TRIANGLE: [Point; 3] = [Point::new(35, 33), Point::new(28, 47), Point::new(42, 47)];
pub const DOWN_TRIANGLE: [Point; 3] = [Point::new(35, 87), Point::new(42, 73), Point::new(28, 73)];
pub const LEFT_TRIANGLE: [Point; 3] = [Point::new(8, 60), Point::new(22, 53), Point::new(22, 67)];
pub const RIGHT_TRIANGLE: [Point; 3] = [Point::new(48, 53), Point::new(62, 60), Point::new(48, 67)];

// =============================================================================
// Manual Control: Accelerometer Mode Label
// =============================================================================

pub const MODE_CAPTION_POS: Point = Point::new(80, 30);
pub const MODE_VALUE_POS: Point = Point::new(125, 30);
pub const MODE_VALUE_CLEAR_SIZE: Size = Size::new(30, 10);

// =============================================================================
// Manual Control: Speed Bar
// =============================================================================

/// Fill area of the speed bar (10 levels x 14 px).
pub const SPEED_BAR_POS: Point = Point::new(10, 100);
pub const SPEED_BAR_WIDTH: u32 = 140;
pub const SPEED_BAR_HEIGHT: u32 = 20;

/// 1 px outline around the fill area.
pub const SPEED_FRAME_POS: Point = Point::new(9, 99);
pub const SPEED_FRAME_SIZE: Size = Size::new(SPEED_BAR_WIDTH + 2, SPEED_BAR_HEIGHT + 2);

// =============================================================================
// Notice Popup
// =============================================================================

pub const NOTICE_WIDTH: u32 = 140;
pub const NOTICE_HEIGHT: u32 = 40;
pub const NOTICE_X: i32 = (SCREEN_WIDTH - NOTICE_WIDTH) as i32 / 2;
pub const NOTICE_Y: i32 = (SCREEN_HEIGHT - NOTICE_HEIGHT) as i32 / 2;
