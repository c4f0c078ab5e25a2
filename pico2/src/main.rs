//! ArduCar Handheld Remote Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Drives a 1.8" ST7735S panel from the joystick, four switches, the speed
//! slider and a two-axis analog accelerometer.
//!
//! # Controls
//!
//! - **Switch 1**: Manual control (from the menu)
//! - **Switch 2 / 3**: Auto / GPS (from the menu, not yet implemented)
//! - **Switch 3**: Toggle accelerometer steering (in manual control)
//! - **Joystick click**: Back to the menu
//!
//! # Architecture
//!
//! One embassy task runs [`RemoteApp::tick`] and then sleeps for the
//! debounce delay, forever. All state lives in the app value on this task's
//! stack.

#![no_std]
#![no_main]

mod board;
mod display;

use arducar_remote::config::POLL_DELAY_MS;
use arducar_remote::{AppEvent, RemoteApp};
use defmt::{debug, info};
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use crate::board::BoardInputs;
use crate::display::{display_spi_config, init_display};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("ArduCar remote starting...");

    let p = embassy_rp::init(Default::default());

    // Display: CS=17, DC=16, CLK=18, MOSI=19, RST=20, backlight=21
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let rst = Output::new(p.PIN_20, Level::High);
    let _backlight = Output::new(p.PIN_21, Level::High);

    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());
    let mut display = init_display(spi, cs, dc, rst);
    info!("Display initialized");

    // Buttons in Button::ALL order, active-low with internal pull-ups
    let buttons = [
        Input::new(p.PIN_2, Pull::Up),  // JoystickDown
        Input::new(p.PIN_3, Pull::Up),  // JoystickLeft
        Input::new(p.PIN_4, Pull::Up),  // JoystickUp
        Input::new(p.PIN_5, Pull::Up),  // JoystickRight
        Input::new(p.PIN_6, Pull::Up),  // JoystickClick
        Input::new(p.PIN_7, Pull::Up),  // Switch1
        Input::new(p.PIN_8, Pull::Up),  // Switch2
        Input::new(p.PIN_9, Pull::Up),  // Switch3
        Input::new(p.PIN_10, Pull::Up), // Switch4
    ];

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let slider = Channel::new_pin(p.PIN_26, Pull::None);
    let accel_x = Channel::new_pin(p.PIN_27, Pull::None);
    let accel_y = Channel::new_pin(p.PIN_28, Pull::None);

    let mut inputs = BoardInputs::new(buttons, adc, slider, accel_x, accel_y);
    info!("Controls initialized");

    let mut app = RemoteApp::new();

    loop {
        let event = app.tick(&mut inputs, &mut display);
        log_event(&event);
        Timer::after_millis(POLL_DELAY_MS).await;
    }
}

/// State transitions at info level, per-cycle changes at debug level.
fn log_event(event: &AppEvent) {
    match event {
        AppEvent::Idle => {}
        AppEvent::MenuShown => info!("Menu shown"),
        AppEvent::Selected(choice) => info!("Selected {}", choice),
        AppEvent::NoticeDismissed => info!("Notice dismissed, back to menu"),
        AppEvent::SessionEnded => info!("Manual control ended"),
        AppEvent::Manual { frame, redraw } => {
            if frame.buttons_changed {
                debug!("Buttons: {}", frame.buttons.flags());
            }
            if frame.mode_toggled {
                info!("Accel. mode: {}", frame.mode.label());
            }
            if redraw.bearing {
                debug!("Bearing: {}", frame.bearing.name());
                if let Some(accel) = frame.accel {
                    debug!("Accel: x={} y={}", accel.x, accel.y);
                }
            }
            if redraw.speed {
                debug!("Speed: {}", frame.speed);
            }
        }
    }
}
