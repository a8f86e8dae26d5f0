use macroquad::prelude::*;

use crate::application::Session;
use crate::audio::Sonifier;
use crate::domain::NewbornReport;
use crate::rendering::in_canvas;
use crate::ui::Action;

/// Keyboard shortcuts for panel actions
pub const KEY_BINDINGS: [(KeyCode, Action); 12] = [
    (KeyCode::Space, Action::ToggleRunning),
    (KeyCode::N, Action::Step),
    (KeyCode::C, Action::Clear),
    (KeyCode::R, Action::Randomize),
    (KeyCode::Backspace, Action::Reset),
    (KeyCode::Equal, Action::ZoomIn),
    (KeyCode::KpAdd, Action::ZoomIn),
    (KeyCode::Minus, Action::ZoomOut),
    (KeyCode::KpSubtract, Action::ZoomOut),
    (KeyCode::M, Action::ToggleMute),
    (KeyCode::Up, Action::FasterTicks),
    (KeyCode::Down, Action::SlowerTicks),
];

/// Actions whose key went down this frame
pub fn keyboard_actions() -> Vec<Action> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, action)| action)
        .collect()
}

/// Carry out one action against the session (and audio, if present).
///
/// Returns the births when the action ran a generation, so manual steps
/// reach the audio layer the same way clock ticks do.
pub fn apply(action: Action, session: &mut Session, audio: Option<&mut Sonifier>) -> Option<NewbornReport> {
    match action {
        Action::ToggleRunning => session.toggle_running(),
        Action::Step => {
            let report = session.step();
            log::debug!("manual step: {} births", report.len());
            return Some(report);
        }
        Action::Clear => session.clear(),
        Action::Randomize => session.randomize(),
        Action::Reset => {
            if let Err(e) = session.reset() {
                log::warn!("reset failed: {e}");
            }
        }
        Action::ZoomIn => {
            if let Err(e) = session.zoom_in() {
                log::warn!("zoom in rejected: {e}");
            }
        }
        Action::ZoomOut => {
            if let Err(e) = session.zoom_out() {
                log::warn!("zoom out rejected: {e}");
            }
        }
        Action::ToggleMute => match audio {
            Some(sonifier) => sonifier.toggle_mute(),
            None => log::info!("audio unavailable, nothing to mute"),
        },
        Action::FasterTicks => session.clock.step_rate(1),
        Action::SlowerTicks => session.clock.step_rate(-1),
    }
    None
}

/// Canvas cell under the pointer, if it is on the grid
pub fn hovered_cell(session: &Session, mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    if !in_canvas(mouse_pos) {
        return None;
    }
    session
        .zoom()
        .screen_to_cell(mouse_pos.0, mouse_pos.1)
        .filter(|&(row, col)| session.grid.is_valid(row, col))
}

/// Stamp the selected pattern where the canvas was clicked
pub fn handle_canvas_click(session: &mut Session, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if let Some((row, col)) = hovered_cell(session, mouse_pos) {
        session.stamp_at(row, col);
    }
}
