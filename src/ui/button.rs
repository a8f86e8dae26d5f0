use macroquad::prelude::*;

use super::{Action, fit_text};

/// Panel button bound to an [`Action`]
#[derive(Clone)]
pub struct Button {
    bounds: Rect,
    label: String,
    action: Action,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>, action: Action) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
            label: label.into(),
            action,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub const fn action(&self) -> Action {
        self.action
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Draw with hover highlight; `active` marks a latched state such as running or muted
    pub fn draw(&self, mouse_pos: (f32, f32), active: bool) {
        let Rect { x, y, w, h } = self.bounds;
        let fill = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else if active {
            Color::from_rgba(40, 160, 110, 255)
        } else {
            self.color
        };

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let label = fit_text(&self.label, 16, w - 8.0);
        let size = measure_text(&label, None, 16, 1.0);
        draw_text(&label, x + (w - size.width) / 2.0, y + (h + size.height) / 2.0, 16.0, WHITE);
    }

    /// Action to run if the button was clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<Action> {
        (self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)).then_some(self.action)
    }
}
