mod button;
mod dropdown;
mod slider;

pub use button::Button;
pub use dropdown::Dropdown;
pub use slider::Slider;

use macroquad::prelude::{measure_text, screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_GAP: f32 = 8.0;

/// Things the user can ask for, from a button or a key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleRunning,
    Step,
    Clear,
    Randomize,
    Reset,
    ZoomIn,
    ZoomOut,
    ToggleMute,
    FasterTicks,
    SlowerTicks,
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the simulation canvas, left of the panel
pub fn canvas_width() -> f32 {
    (screen_width() - PANEL_WIDTH).max(0.0)
}

pub fn canvas_height() -> f32 {
    screen_height()
}

/// Panel buttons, top to bottom; zoom buttons share a row
pub fn create_buttons(top: f32) -> Vec<Button> {
    let px = panel_x();
    let half = (PANEL_WIDTH - BUTTON_GAP) / 2.0;
    let row = |i: f32| top + i * (BUTTON_HEIGHT + BUTTON_GAP);

    vec![
        Button::new(px, row(0.0), half, BUTTON_HEIGHT, "Run/Pause", Action::ToggleRunning),
        Button::new(px + half + BUTTON_GAP, row(0.0), half, BUTTON_HEIGHT, "Step", Action::Step),
        Button::new(px, row(1.0), half, BUTTON_HEIGHT, "Clear", Action::Clear),
        Button::new(px + half + BUTTON_GAP, row(1.0), half, BUTTON_HEIGHT, "Random", Action::Randomize),
        Button::new(px, row(2.0), half, BUTTON_HEIGHT, "Zoom -", Action::ZoomOut),
        Button::new(px + half + BUTTON_GAP, row(2.0), half, BUTTON_HEIGHT, "Zoom +", Action::ZoomIn),
        Button::new(px, row(3.0), half, BUTTON_HEIGHT, "Reset", Action::Reset),
        Button::new(px + half + BUTTON_GAP, row(3.0), half, BUTTON_HEIGHT, "Mute", Action::ToggleMute),
    ]
}

/// Shorten `text` with an ellipsis until it fits `max_width` at `font_size`
pub(crate) fn fit_text(text: &str, font_size: u16, max_width: f32) -> String {
    if measure_text(text, None, font_size, 1.0).width <= max_width {
        return text.to_owned();
    }
    let mut truncated = text.to_owned();
    while !truncated.is_empty()
        && measure_text(&format!("{truncated}..."), None, font_size, 1.0).width > max_width
    {
        truncated.pop();
    }
    format!("{truncated}...")
}
