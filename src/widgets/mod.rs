//! Widget components for the remote's display.
//!
//! - [`glyphs`]: Direction pad (cross, triangles, stop marker)
//! - [`speed_bar`]: Outlined speed bar
//! - [`mode_label`]: Accelerometer mode caption and ON/OFF value
//! - [`popups`]: "Not yet implemented" notice
//! - [`primitives`]: Shared low-level drawing utilities
//!
//! Every widget is generic over `DrawTarget<Color = Rgb565>`, so the same code
//! drives the ST7735 panel, the desktop simulator and the test framebuffer.
//! Draw errors are ignored: a dropped frame region is repainted on the next
//! change and there is nothing better to do with the error on the device.

pub mod glyphs;
pub mod mode_label;
pub mod popups;
pub mod primitives;
pub mod speed_bar;

pub use glyphs::{draw_bearing, draw_direction_pad, draw_glyph};
pub use mode_label::{draw_mode_caption, draw_mode_value};
pub use popups::draw_not_implemented_popup;
pub use speed_bar::draw_speed_bar;
