//! ArduCar remote simulator for desktop.
//!
//! Runs the same [`RemoteApp`] state machine as the firmware against an SDL
//! window, with the keyboard standing in for the joystick, switches, slider
//! and accelerometer (see [`inputs`] for the key map).
//!
//! Build with `--features diagnostics` to echo the diagnostic log to stdout.

mod inputs;

use std::thread;
use std::time::{Duration, Instant};

use arducar_remote::config::{POLL_DELAY_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use arducar_remote::{DiagnosticLog, RemoteApp};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::inputs::{KeyAction, SimulatedInputs};

/// One main loop pass, matching the handheld's debounce delay.
const POLL_TIME: Duration = Duration::from_millis(POLL_DELAY_MS as u64);

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("ArduCar Remote Sim", &output_settings);

    let mut app = RemoteApp::new();
    let mut inputs = SimulatedInputs::new();
    let mut log = DiagnosticLog::new();

    log.push("Remote started");
    emit(&log, 1);

    // The window has to be shown once before it produces events
    window.update(&display);

    loop {
        let cycle_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, .. } => match inputs.key_down(keycode) {
                    KeyAction::Slider => {
                        log.push(&format!("Slider: {}", inputs.slider_value()));
                        emit(&log, 1);
                    }
                    KeyAction::Tilt => {
                        let accel = inputs.accel_value();
                        log.push(&format!("Tilt: x={} y={}", accel.x, accel.y));
                        emit(&log, 1);
                    }
                    KeyAction::Button | KeyAction::Ignored => {}
                },
                SimulatorEvent::KeyUp { keycode, .. } => inputs.key_up(keycode),
                _ => {}
            }
        }

        let event = app.tick(&mut inputs, &mut display);
        let pushed = log.record(&event);
        emit(&log, pushed);

        window.update(&display);

        if let Some(rest) = POLL_TIME.checked_sub(cycle_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

/// Print the `pushed` most recent lines when stdout diagnostics are enabled.
fn emit(
    log: &DiagnosticLog,
    pushed: usize,
) {
    if !cfg!(feature = "diagnostics") || pushed == 0 {
        return;
    }
    let skip = log.len().saturating_sub(pushed);
    for line in log.iter().skip(skip) {
        println!("{line}");
    }
}
