use macroquad::prelude::*;

use super::fit_text;

const ROW_HEIGHT: f32 = 28.0;
const FONT_SIZE: u16 = 16;

/// Pattern picker: a header showing the selection and a menu listing the rest
#[derive(Clone)]
pub struct Dropdown {
    header: Rect,
    label: String,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            header: Rect::new(x, y, width, ROW_HEIGHT),
            label: label.into(),
            items,
            selected: 0,
            is_open: false,
        }
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.header.x = x;
        self.header.y = y;
    }

    /// True while the pointer is over the header or the open menu
    pub fn captures(&self, mouse_pos: (f32, f32)) -> bool {
        self.header.contains(vec2(mouse_pos.0, mouse_pos.1)) || self.item_at(mouse_pos).is_some()
    }

    fn item_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.header.x,
            self.header.y + ROW_HEIGHT * (index as f32 + 1.0),
            self.header.w,
            ROW_HEIGHT,
        )
    }

    /// Menu row under the pointer, only while open
    fn item_at(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !self.is_open {
            return None;
        }
        let point = vec2(mouse_pos.0, mouse_pos.1);
        (0..self.items.len()).find(|&i| self.item_rect(i).contains(point))
    }

    /// Handle clicks; returns the new index when the selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }

        if self.header.contains(vec2(mouse_pos.0, mouse_pos.1)) {
            self.is_open = !self.is_open;
            return None;
        }

        let picked = self.item_at(mouse_pos);
        self.is_open = false;
        match picked {
            Some(i) if i != self.selected => {
                self.selected = i;
                Some(i)
            }
            _ => None,
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.header;
        draw_text(&self.label, x, y - 5.0, 14.0, GRAY);

        let header_color = if self.header.contains(vec2(mouse_pos.0, mouse_pos.1)) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(x, y, w, h, header_color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        if let Some(current) = self.items.get(self.selected) {
            let text = fit_text(current, FONT_SIZE, w - 30.0);
            draw_text(&text, x + 5.0, y + 20.0, FONT_SIZE as f32, WHITE);
        }
        draw_text(if self.is_open { "^" } else { "v" }, x + w - 16.0, y + 20.0, 16.0, WHITE);

        if !self.is_open {
            return;
        }

        let hovered = self.item_at(mouse_pos);
        for (i, item) in self.items.iter().enumerate() {
            let row = self.item_rect(i);
            let color = if hovered == Some(i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(row.x, row.y, row.w, row.h, color);
            draw_rectangle_lines(row.x, row.y, row.w, row.h, 1.0, Color::from_rgba(80, 80, 80, 255));

            let text = fit_text(item, FONT_SIZE, row.w - 10.0);
            draw_text(&text, row.x + 5.0, row.y + 20.0, FONT_SIZE as f32, WHITE);
        }

        let menu_height = self.items.len() as f32 * ROW_HEIGHT;
        draw_rectangle_lines(x, y + h, w, menu_height, 2.0, WHITE);
    }
}
