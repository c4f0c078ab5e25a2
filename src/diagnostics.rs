//! Diagnostic message log.
//!
//! Keeps the most recent diagnostic lines in a fixed ring buffer, so hosts
//! without a debug probe (the simulator) can still show or print what the
//! remote is doing. The firmware logs the same events through `defmt` instead.
//!
//! # Message Set
//!
//! | Event | Line |
//! |-------|------|
//! | Buttons changed | `Buttons: 10000010` (snapshot order) |
//! | Mode toggled | `Accel. mode: ON` |
//! | Bearing redrawn | `Bearing: DOWN_LEFT` |
//! | Speed redrawn | `Speed: 7` |
//! | Menu choice | `Selected: AUTO` |
//! | Session end | `Manual control ended` |
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DiagnosticLog::new();
//! log.record(&app.tick(&mut inputs, &mut display));
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::Write;

use heapless::{Deque, String};

use crate::app::AppEvent;
use crate::input::SNAPSHOT_LEN;

// =============================================================================
// Log Configuration
// =============================================================================

/// Maximum number of lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per line.
pub const LOG_LINE_LENGTH: usize = 32;

/// One log line.
pub type LogLine = String<LOG_LINE_LENGTH>;

// =============================================================================
// Diagnostic Ring Buffer
// =============================================================================

/// Ring buffer of diagnostic lines. Old lines are dropped when full.
pub struct DiagnosticLog {
    buffer: Deque<LogLine, LOG_BUFFER_SIZE>,
    /// Lines pushed since creation, including dropped ones.
    total: u32,
}

impl DiagnosticLog {
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            total: 0,
        }
    }

    /// Push a line, truncated to `LOG_LINE_LENGTH` characters.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line = LogLine::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
        self.total = self.total.wrapping_add(1);
    }

    /// Push the lines describing one app tick. Returns how many were pushed.
    pub fn record(
        &mut self,
        event: &AppEvent,
    ) -> usize {
        let mut pushed = 0;
        for line in describe(event).iter() {
            self.push(line);
            pushed += 1;
        }
        pushed
    }

    /// Iterate over lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    #[inline]
    pub const fn total(&self) -> u32 { self.total }
}

impl Default for DiagnosticLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Event Formatting
// =============================================================================

/// Upper bound of lines one event produces.
pub const MAX_LINES_PER_EVENT: usize = 4;

/// Diagnostic lines for one app tick. Idle ticks produce none.
pub fn describe(event: &AppEvent) -> heapless::Vec<LogLine, MAX_LINES_PER_EVENT> {
    let mut lines = heapless::Vec::new();
    let mut line = LogLine::new();

    match event {
        AppEvent::Idle => {}
        AppEvent::MenuShown => {
            line.push_str("Menu").ok();
            lines.push(line).ok();
        }
        AppEvent::Selected(choice) => {
            write!(line, "Selected: {}", choice.label()).ok();
            lines.push(line).ok();
        }
        AppEvent::NoticeDismissed => {
            line.push_str("Back to menu").ok();
            lines.push(line).ok();
        }
        AppEvent::SessionEnded => {
            line.push_str("Manual control ended").ok();
            lines.push(line).ok();
        }
        AppEvent::Manual { frame, redraw } => {
            if frame.buttons_changed {
                let mut dump = LogLine::new();
                dump.push_str("Buttons: ").ok();
                for pressed in frame.buttons.flags() {
                    dump.push(if pressed { '1' } else { '0' }).ok();
                }
                lines.push(dump).ok();
            }
            if frame.mode_toggled {
                let mut mode = LogLine::new();
                write!(mode, "Accel. mode: {}", frame.mode.label()).ok();
                lines.push(mode).ok();
            }
            if redraw.bearing {
                let mut bearing = LogLine::new();
                write!(bearing, "Bearing: {}", frame.bearing.name()).ok();
                lines.push(bearing).ok();
            }
            if redraw.speed {
                let mut speed = LogLine::new();
                write!(speed, "Speed: {}", frame.speed).ok();
                lines.push(speed).ok();
            }
        }
    }

    lines
}

const _: () = assert!(LOG_LINE_LENGTH >= "Buttons: ".len() + SNAPSHOT_LEN);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bearing::Bearing;
    use crate::input::{Button, ButtonStates};
    use crate::menu::MenuChoice;
    use crate::render::Redraw;
    use crate::resolver::ControlMode;
    use crate::session::ManualFrame;

    fn manual_event(redraw: Redraw) -> AppEvent {
        AppEvent::Manual {
            frame: ManualFrame {
                bearing: Bearing::DownLeft,
                mode: ControlMode::Accelerometer,
                speed: 7,
                buttons: ButtonStates::with_pressed(&[Button::JoystickDown, Button::Switch3]),
                buttons_changed: true,
                mode_toggled: true,
                accel: None,
            },
            redraw,
        }
    }

    #[test]
    fn test_ring_drops_oldest() {
        let mut log = DiagnosticLog::new();
        for i in 0..(LOG_BUFFER_SIZE + 2) {
            let mut line = LogLine::new();
            write!(line, "line {i}").ok();
            log.push(&line);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("line 2"));
        assert_eq!(log.last(), Some("line 9"));
        assert_eq!(log.total(), (LOG_BUFFER_SIZE + 2) as u32);
    }

    #[test]
    fn test_long_lines_truncate() {
        let mut log = DiagnosticLog::new();
        log.push("0123456789012345678901234567890123456789");
        assert_eq!(log.last().map(str::len), Some(LOG_LINE_LENGTH));
    }

    #[test]
    fn test_idle_is_silent() {
        let mut log = DiagnosticLog::new();
        assert_eq!(log.record(&AppEvent::Idle), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_manual_cycle_message_set() {
        let lines = describe(&manual_event(Redraw {
            bearing: true,
            speed: true,
            mode: true,
        }));
        let lines: Vec<&str> = lines.iter().map(|l| l.as_str()).collect();
        assert_eq!(
            lines,
            vec![
                "Buttons: 10000010",
                "Accel. mode: ON",
                "Bearing: DOWN_LEFT",
                "Speed: 7",
            ]
        );
    }

    #[test]
    fn test_only_redrawn_regions_are_logged() {
        let lines = describe(&manual_event(Redraw {
            speed: true,
            ..Redraw::default()
        }));
        assert!(lines.iter().any(|l| l.as_str() == "Speed: 7"));
        assert!(!lines.iter().any(|l| l.starts_with("Bearing")));
    }

    #[test]
    fn test_menu_choice() {
        let lines = describe(&AppEvent::Selected(MenuChoice::Gps));
        assert_eq!(lines[0].as_str(), "Selected: GPS");
    }
}
