//! ArduCar remote library - hardware-independent logic for the handheld remote.
//!
//! Everything that decides *what* the remote shows lives here; the binaries only
//! provide the panel and the control readings:
//!
//! - [`input`]: Button identities, per-cycle [`ButtonStates`] snapshot, the
//!   [`ControlInputs`] capability trait and ADC scaling helpers
//! - [`resolver`]: Joystick and accelerometer direction resolution
//! - [`speed`]: Slider to speed level mapping
//! - [`session`]: Per-session manual control state ([`ManualSession`])
//! - [`render`]: Redraw gating for the manual control screen
//! - [`menu`]: Splash menu choices
//! - [`app`]: Top-level state machine tying menu and manual control together
//! - [`diagnostics`]: Bounded diagnostic line log for hosts without a debug probe
//! - [`screens`] / [`widgets`]: Drawing, generic over `DrawTarget<Color = Rgb565>`
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware links the library as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod bearing;
pub mod colors;
pub mod config;
pub mod diagnostics;
pub mod input;
pub mod menu;
pub mod render;
pub mod resolver;
pub mod screens;
pub mod session;
pub mod speed;
pub mod styles;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_display;

// Re-export commonly used items
pub use app::{AppEvent, RemoteApp};
pub use bearing::{Bearing, Glyph};
pub use diagnostics::DiagnosticLog;
pub use input::{AccelSample, Button, ButtonStates, ControlInputs};
pub use menu::MenuChoice;
pub use render::{Redraw, RenderState};
pub use resolver::ControlMode;
pub use session::{ManualFrame, ManualSession, ManualStep};
