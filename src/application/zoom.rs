/// Cell edge length in pixels. Always a power of two in `MIN..=MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomLevel {
    cell_length: u32,
}

impl ZoomLevel {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 32;

    /// Nearest power of two not above `cell_length`, clamped to the valid range
    pub fn new(cell_length: u32) -> Self {
        let clamped = cell_length.clamp(Self::MIN, Self::MAX);
        // Round down so a config value like 12 becomes 8
        let pow2 = 1 << (u32::BITS - 1 - clamped.leading_zeros());
        Self { cell_length: pow2 }
    }

    pub const fn cell_length(self) -> u32 {
        self.cell_length
    }

    /// Double the cell length. Returns false when already at `MAX`.
    pub fn zoom_in(&mut self) -> bool {
        if self.cell_length >= Self::MAX {
            return false;
        }
        self.cell_length *= 2;
        true
    }

    /// Halve the cell length. Returns false when already at `MIN`.
    pub fn zoom_out(&mut self) -> bool {
        if self.cell_length <= Self::MIN {
            return false;
        }
        self.cell_length /= 2;
        true
    }

    /// Grid (width, height) that fits the canvas: pixels / cell length, floored
    pub fn grid_dimensions(self, canvas_width: f32, canvas_height: f32) -> (usize, usize) {
        let len = self.cell_length as f32;
        (
            (canvas_width.max(0.0) / len).floor() as usize,
            (canvas_height.max(0.0) / len).floor() as usize,
        )
    }

    /// Canvas pixel -> (row, col); `None` left of or above the grid
    pub fn screen_to_cell(self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let len = self.cell_length as f32;
        Some(((y / len) as usize, (x / len) as usize))
    }

    /// Top-left pixel of a cell
    pub fn cell_to_screen(self, row: usize, col: usize) -> (f32, f32) {
        let len = self.cell_length as f32;
        (col as f32 * len, row as f32 * len)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::new(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rounds_to_power_of_two() {
        assert_eq!(ZoomLevel::new(0).cell_length(), 1);
        assert_eq!(ZoomLevel::new(12).cell_length(), 8);
        assert_eq!(ZoomLevel::new(16).cell_length(), 16);
        assert_eq!(ZoomLevel::new(500).cell_length(), 32);
    }

    #[test]
    fn test_zoom_steps_double_and_halve() {
        let mut zoom = ZoomLevel::new(16);
        assert!(zoom.zoom_in());
        assert_eq!(zoom.cell_length(), 32);
        assert!(!zoom.zoom_in());
        assert_eq!(zoom.cell_length(), 32);

        let mut zoom = ZoomLevel::new(2);
        assert!(zoom.zoom_out());
        assert!(!zoom.zoom_out());
        assert_eq!(zoom.cell_length(), 1);
    }

    #[test]
    fn test_grid_dimensions_floor() {
        let zoom = ZoomLevel::new(8);
        assert_eq!(zoom.grid_dimensions(820.0, 799.0), (102, 99));
        assert_eq!(ZoomLevel::new(1).grid_dimensions(640.0, 480.0), (640, 480));
    }

    #[test]
    fn test_screen_cell_mapping() {
        let zoom = ZoomLevel::new(4);
        assert_eq!(zoom.screen_to_cell(9.0, 5.0), Some((1, 2)));
        assert_eq!(zoom.screen_to_cell(-1.0, 5.0), None);
        assert_eq!(zoom.cell_to_screen(1, 2), (8.0, 4.0));
    }
}
