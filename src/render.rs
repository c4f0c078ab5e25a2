//! Render state tracking for the manual control screen.
//!
//! The panel is slow to fill, so the manual screen is never repainted as a
//! whole once its chrome is up. [`RenderState`] remembers what each dynamic
//! region currently shows and reports a region dirty only when the value to
//! show differs.
//!
//! # Update Strategy
//!
//! | Element | Redraw when | Strategy |
//! |---------|-------------|----------|
//! | Chrome (title, pad, captions) | Session start | Full clear + draw once |
//! | Direction glyphs | Bearing changed | Erase all five, light current |
//! | Speed bar | Speed level changed | Clear, outline, fill |
//! | Mode label | Mode changed | Clear value box, print |

use crate::bearing::Bearing;
use crate::resolver::ControlMode;

/// Which regions a render pass actually touched.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Redraw {
    pub bearing: bool,
    pub speed: bool,
    pub mode: bool,
}

impl Redraw {
    /// Nothing was drawn.
    #[inline]
    pub const fn is_empty(&self) -> bool { !self.bearing && !self.speed && !self.mode }
}

/// What the dynamic regions of the manual screen currently show.
///
/// `None` means the region holds its blank/chrome state (e.g. after a clear).
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct RenderState {
    bearing: Option<Bearing>,
    speed: Option<u8>,
    mode: Option<ControlMode>,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            bearing: None,
            speed: None,
            mode: None,
        }
    }

    /// Forget everything drawn. Call after the display was cleared.
    pub fn mark_display_cleared(&mut self) { *self = Self::new(); }

    /// Check (and record) whether the direction glyphs need redrawing.
    pub fn check_bearing_dirty(
        &mut self,
        bearing: Bearing,
    ) -> bool {
        let dirty = self.bearing != Some(bearing);
        self.bearing = Some(bearing);
        dirty
    }

    /// Check (and record) whether the speed bar needs redrawing.
    pub fn check_speed_dirty(
        &mut self,
        level: u8,
    ) -> bool {
        let dirty = self.speed != Some(level);
        self.speed = Some(level);
        dirty
    }

    /// Check (and record) whether the mode label needs redrawing.
    pub fn check_mode_dirty(
        &mut self,
        mode: ControlMode,
    ) -> bool {
        let dirty = self.mode != Some(mode);
        self.mode = Some(mode);
        dirty
    }

    #[inline]
    pub const fn drawn_bearing(&self) -> Option<Bearing> { self.bearing }

    #[inline]
    pub const fn drawn_speed(&self) -> Option<u8> { self.speed }

    #[inline]
    pub const fn drawn_mode(&self) -> Option<ControlMode> { self.mode }
}

// =============================================================================
// Unit Tests
// =============================================================================
