//! Full-screen layouts.
//!
//! - **Splash** ([`splash`]): title and the three-entry menu, shown at boot and
//!   after every manual control session
//! - **Manual control** ([`manual`]): static chrome plus the gated per-frame
//!   renderer for bearing, speed and mode

pub mod manual;
pub mod splash;

pub use manual::{draw_manual_screen, render_manual_frame};
pub use splash::draw_splash;
