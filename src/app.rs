//! Top-level state machine: splash menu, manual control and notices.
//!
//! ```text
//!            switch 1                     joystick click
//! [Splash] ───────────▶ [Manual control] ───────────────▶ [Splash]
//!    │ switch 2 / 3
//!    ▼
//! [Notice] ── NOTICE_CYCLES polls ──▶ [Splash]
//! ```
//!
//! [`RemoteApp::tick`] is one pass of the device's main loop. The caller owns
//! the timing: call it, then wait `POLL_DELAY_MS`, forever. Nothing here
//! blocks, so the same state machine drives the firmware, the simulator and
//! the tests.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::TiltThresholds;
use crate::config::controls::NOTICE_CYCLES;
use crate::input::ControlInputs;
use crate::menu::MenuChoice;
use crate::render::{Redraw, RenderState};
use crate::screens::{draw_manual_screen, draw_splash, render_manual_frame};
use crate::session::{ManualFrame, ManualSession, ManualStep};
use crate::widgets::draw_not_implemented_popup;

/// What happened during one [`RemoteApp::tick`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppEvent {
    /// Splash and menu were drawn.
    MenuShown,
    /// A menu switch was pressed. Unimplemented choices open the notice.
    Selected(MenuChoice),
    /// Notice period elapsed; splash redrawn.
    NoticeDismissed,
    /// One manual control cycle ran.
    Manual { frame: ManualFrame, redraw: Redraw },
    /// Joystick clicked; splash redrawn.
    SessionEnded,
    /// Waiting at the menu or under a notice.
    Idle,
}

#[derive(Clone, Debug)]
enum Screen {
    Splash { drawn: bool },
    Manual(ManualSession),
    Notice { choice: MenuChoice, cycles_left: u16 },
}

/// The whole remote, minus the hardware.
#[derive(Clone, Debug)]
pub struct RemoteApp {
    screen: Screen,
    render: RenderState,
    thresholds: TiltThresholds,
}

impl RemoteApp {
    pub const fn new() -> Self { Self::with_thresholds(TiltThresholds::DEFAULT) }

    /// App whose manual sessions use custom tilt calibration.
    pub const fn with_thresholds(thresholds: TiltThresholds) -> Self {
        Self {
            screen: Screen::Splash { drawn: false },
            render: RenderState::new(),
            thresholds,
        }
    }

    /// Whether a manual control session is running.
    #[inline]
    pub const fn in_manual_control(&self) -> bool { matches!(self.screen, Screen::Manual(_)) }

    /// Choice whose notice is currently shown.
    #[inline]
    pub const fn notice(&self) -> Option<MenuChoice> {
        match self.screen {
            Screen::Notice { choice, .. } => Some(choice),
            _ => None,
        }
    }

    /// Run one main loop pass.
    pub fn tick<I, D>(
        &mut self,
        inputs: &mut I,
        display: &mut D,
    ) -> AppEvent
    where
        I: ControlInputs + ?Sized,
        D: DrawTarget<Color = Rgb565>,
    {
        match &mut self.screen {
            Screen::Splash { drawn: false } => {
                self.show_splash(display);
                AppEvent::MenuShown
            }
            Screen::Splash { drawn: true } => {
                let Some(choice) = MenuChoice::from_inputs(inputs) else {
                    return AppEvent::Idle;
                };
                self.select(choice, display);
                AppEvent::Selected(choice)
            }
            Screen::Notice { cycles_left, .. } => {
                if *cycles_left > 1 {
                    *cycles_left -= 1;
                    return AppEvent::Idle;
                }
                self.show_splash(display);
                AppEvent::NoticeDismissed
            }
            Screen::Manual(session) => match session.poll(inputs) {
                ManualStep::Exit => {
                    self.show_splash(display);
                    AppEvent::SessionEnded
                }
                ManualStep::Frame(frame) => {
                    let redraw = render_manual_frame(display, &mut self.render, &frame);
                    AppEvent::Manual { frame, redraw }
                }
            },
        }
    }

    fn show_splash<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_splash(display);
        self.render.mark_display_cleared();
        self.screen = Screen::Splash { drawn: true };
    }

    fn select<D>(
        &mut self,
        choice: MenuChoice,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if choice.is_implemented() {
            draw_manual_screen(display, &mut self.render);
            self.screen = Screen::Manual(ManualSession::with_thresholds(self.thresholds));
        } else {
            draw_not_implemented_popup(display, choice.label());
            self.screen = Screen::Notice {
                choice,
                cycles_left: NOTICE_CYCLES,
            };
        }
    }
}

impl Default for RemoteApp {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
