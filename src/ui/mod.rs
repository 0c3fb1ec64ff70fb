//! UI rendering components
//!
//! One module per screen or dashboard tab, each exposing a `draw`
//! entry point. The dispatcher below picks the active screen and lays
//! the command line strip over the bottom row.

pub mod career;
pub mod command_line;
pub mod competitions;
pub mod dashboard;
pub mod home;
pub mod layout;
pub mod learn;
pub mod login;
pub mod onboarding;
pub mod overview;
pub mod progress;
pub mod quiz;

use ratatui::{Frame, layout::Rect};

use crate::app::state::{AppState, Screen};
use crate::config::Config;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, config: &Config) {
    let theme = config.active_theme();
    let area = frame.area();

    match state.screen {
        Screen::Home => home::draw(frame, &state.home_animation, &theme),
        Screen::Login => login::draw(frame, &state.login, &theme),
        Screen::Onboarding => onboarding::draw(frame, &state.onboarding, &theme),
        Screen::Assessment => quiz::draw_assessment(frame, state, &theme),
        Screen::Dashboard => {
            let body = Rect { height: area.height.saturating_sub(1), ..area };
            dashboard::draw(frame, body, state, &theme);
        }
    }

    // Drawn last so it sits over the full-frame screens. The login form
    // keeps its own footer and takes no commands.
    if state.screen != Screen::Login && area.height > 0 {
        let strip = Rect { y: area.y + area.height - 1, height: 1, ..area };
        command_line::draw(frame, strip, &state.command_line, &theme);
    }
}
