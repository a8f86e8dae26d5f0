use macroquad::prelude::*;

/// Horizontal integer slider (tick rate)
#[derive(Clone)]
pub struct Slider {
    track: Rect,
    label: String,
    min: u32,
    max: u32,
    step: u32,
    value: u32,
    dragging: bool,
}

impl Slider {
    #[allow(clippy::too_many_arguments)]
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: u32, max: u32, step: u32, value: u32) -> Self {
        let mut slider = Self {
            track: Rect::new(x, y, width, 16.0),
            label: label.into(),
            min,
            max: max.max(min),
            step: step.max(1),
            value: min,
            dragging: false,
        };
        slider.set_value(value);
        slider
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Snap to the nearest step inside `min..=max`
    pub fn set_value(&mut self, value: u32) {
        let clamped = value.clamp(self.min, self.max);
        let steps = (clamped - self.min + self.step / 2) / self.step;
        self.value = (self.min + steps * self.step).min(self.max);
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.track.x = x;
        self.track.y = y;
    }

    /// Value under a horizontal pixel position
    pub fn value_at(&self, x: f32) -> u32 {
        let t = ((x - self.track.x) / self.track.w).clamp(0.0, 1.0);
        let raw = self.min as f32 + t * (self.max - self.min) as f32;
        let steps = ((raw - self.min as f32) / self.step as f32).round() as u32;
        (self.min + steps * self.step).min(self.max)
    }

    /// Track dragging; returns the new value when it changed this frame
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<u32> {
        let hit = self.track.contains(vec2(mouse_pos.0, mouse_pos.1));
        if is_mouse_button_pressed(MouseButton::Left) && hit {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return None;
        }

        let value = self.value_at(mouse_pos.0);
        (value != self.value).then(|| {
            self.value = value;
            value
        })
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn draw(&self) {
        let Rect { x, y, w, h } = self.track;
        draw_text(&format!("{}: {}", self.label, self.value), x, y - 6.0, 16.0, WHITE);
        draw_rectangle(x, y + h / 2.0 - 2.0, w, 4.0, Color::from_rgba(80, 80, 80, 255));

        let span = (self.max - self.min).max(1) as f32;
        let knob_x = x + (self.value - self.min) as f32 / span * w;
        draw_circle(knob_x, y + h / 2.0, h / 2.0, Color::from_rgba(100, 149, 237, 255));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_maps_track() {
        let slider = Slider::new(100.0, 0.0, 290.0, "Rate", 1, 30, 1, 10);
        assert_eq!(slider.value_at(50.0), 1);
        assert_eq!(slider.value_at(100.0), 1);
        assert_eq!(slider.value_at(390.0), 30);
        assert_eq!(slider.value_at(1000.0), 30);
        assert_eq!(slider.value_at(100.0 + 145.0), 16);
    }

    #[test]
    fn test_set_value_snaps_and_clamps() {
        let mut slider = Slider::new(0.0, 0.0, 100.0, "x", 0, 10, 5, 0);
        slider.set_value(3);
        assert_eq!(slider.value(), 5);
        slider.set_value(2);
        assert_eq!(slider.value(), 0);
        slider.set_value(99);
        assert_eq!(slider.value(), 10);
    }
}
