use std::time::Duration;

use crate::config::SimulationConfig;
use crate::domain::{Grid, GridError, NewbornReport, Pattern, presets};
use super::{SimulationClock, TickRate, ZoomLevel};

/// Session owns everything a running simulation needs.
///
/// The render loop, input handlers and audio all go through this object
/// instead of sharing globals. Every call runs to completion, so an update
/// is never observed half-done and the grid is never rebuilt mid-update.
pub struct Session {
    pub grid: Grid,
    pub clock: SimulationClock,
    zoom: ZoomLevel,
    canvas: (f32, f32),
    generation: u64,
    patterns: Vec<Pattern>,
    selected: usize,
    parallel: bool,
    random_density: f64,
}

impl Session {
    /// Build a session whose grid fills a `canvas_width` x `canvas_height` pixel area
    pub fn new(config: &SimulationConfig, canvas_width: f32, canvas_height: f32) -> Result<Self, GridError> {
        let zoom = ZoomLevel::new(config.cell_length);
        let (width, height) = zoom.grid_dimensions(canvas_width, canvas_height);
        let grid = Grid::new(width, height)?;
        log::info!("Grid {width}x{height} at {}px cells", zoom.cell_length());

        let mut clock = SimulationClock::new(TickRate::new(config.ticks_per_second));
        if config.start_running {
            clock.start();
        }

        Ok(Self {
            grid,
            clock,
            zoom,
            canvas: (canvas_width, canvas_height),
            generation: 0,
            patterns: presets::all_patterns(),
            selected: 0,
            parallel: config.parallel,
            random_density: config.random_density,
        })
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Feed frame time; runs one generation when the clock says one is due
    pub fn advance(&mut self, dt: Duration) -> Option<NewbornReport> {
        self.clock.advance(dt).then(|| self.step())
    }

    /// Run exactly one generation now
    pub fn step(&mut self) -> NewbornReport {
        let report = if self.parallel {
            self.grid.update_parallel()
        } else {
            self.grid.update()
        };
        self.generation += 1;
        log::trace!("generation {} produced {} births", self.generation, report.len());
        report
    }

    pub fn toggle_running(&mut self) {
        self.clock.toggle();
    }

    /// Fresh all-dead grid of the same size; stops the clock
    pub fn reset(&mut self) -> Result<(), GridError> {
        self.clock.cancel();
        self.rebuild()
    }

    /// Kill all cells but keep the clock state
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    pub fn randomize(&mut self) {
        self.grid.randomize(&mut rand::rng(), self.random_density);
        self.generation = 0;
    }

    /// Double the cell size and rebuild the grid. Returns whether anything changed.
    pub fn zoom_in(&mut self) -> Result<bool, GridError> {
        let previous = self.zoom;
        if !self.zoom.zoom_in() {
            return Ok(false);
        }
        self.rebuild_or_revert(previous)
    }

    /// Halve the cell size and rebuild the grid. Returns whether anything changed.
    pub fn zoom_out(&mut self) -> Result<bool, GridError> {
        let previous = self.zoom;
        if !self.zoom.zoom_out() {
            return Ok(false);
        }
        self.rebuild_or_revert(previous)
    }

    /// Track a new canvas size; rebuilds only when the cell dimensions change
    pub fn resize_canvas(&mut self, width: f32, height: f32) -> Result<bool, GridError> {
        if self.zoom.grid_dimensions(width, height) == self.zoom.grid_dimensions(self.canvas.0, self.canvas.1) {
            self.canvas = (width, height);
            return Ok(false);
        }
        let previous = self.canvas;
        self.canvas = (width, height);
        if let Err(e) = self.rebuild() {
            self.canvas = previous;
            return Err(e);
        }
        Ok(true)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn selected_pattern(&self) -> &Pattern {
        &self.patterns[self.selected]
    }

    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select a pattern by index; out-of-range indices are ignored
    pub fn select_pattern(&mut self, index: usize) {
        if index < self.patterns.len() {
            self.selected = index;
        }
    }

    pub fn add_patterns(&mut self, patterns: impl IntoIterator<Item = Pattern>) {
        self.patterns.extend(patterns);
    }

    /// Stamp the selected pattern centered on a cell; returns cells placed
    pub fn stamp_at(&mut self, row: usize, col: usize) -> usize {
        let pattern = &self.patterns[self.selected];
        let (origin_row, origin_col) = pattern.centered_origin(row, col);
        let placed = pattern.stamp(&mut self.grid, origin_row, origin_col);
        log::debug!("stamped {} at ({row}, {col}): {placed}/{} cells", pattern.name, pattern.offsets.len());
        placed
    }

    fn rebuild_or_revert(&mut self, previous: ZoomLevel) -> Result<bool, GridError> {
        match self.rebuild() {
            Ok(()) => Ok(true),
            Err(e) => {
                self.zoom = previous;
                Err(e)
            }
        }
    }

    /// Replace the grid with an empty one sized for the current zoom and canvas
    fn rebuild(&mut self) -> Result<(), GridError> {
        let (width, height) = self.zoom.grid_dimensions(self.canvas.0, self.canvas.1);
        self.grid = Grid::new(width, height)?;
        self.generation = 0;
        log::info!("Rebuilt grid {width}x{height} at {}px cells", self.zoom.cell_length());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn config(cell_length: u32) -> SimulationConfig {
        SimulationConfig {
            cell_length,
            ticks_per_second: 10,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_grid_sized_from_canvas() {
        let session = Session::new(&config(8), 800.0, 600.0).unwrap();
        assert_eq!(session.grid.dimensions(), (100, 75));
        assert!(!session.is_running());
    }

    #[test]
    fn test_canvas_too_small_is_reported() {
        assert!(Session::new(&config(32), 40.0, 40.0).is_err());
    }

    #[test]
    fn test_advance_steps_only_when_running() {
        let mut session = Session::new(&config(10), 100.0, 100.0).unwrap();
        session.stamp_at(5, 5);
        assert!(session.advance(Duration::from_secs(1)).is_none());

        session.toggle_running();
        assert!(session.advance(Duration::from_millis(50)).is_none());
        assert!(session.advance(Duration::from_millis(50)).is_some());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_zoom_rebuilds_empty_grid() {
        let mut session = Session::new(&config(8), 256.0, 256.0).unwrap();
        session.stamp_at(10, 10);
        assert!(session.grid.population() > 0);

        assert_eq!(session.zoom_in(), Ok(true));
        assert_eq!(session.grid.dimensions(), (16, 16));
        assert_eq!(session.grid.population(), 0);

        assert_eq!(session.zoom_out(), Ok(true));
        assert_eq!(session.grid.dimensions(), (32, 32));
    }

    #[test]
    fn test_failed_zoom_reverts() {
        let mut session = Session::new(&config(16), 40.0, 40.0).unwrap();
        assert!(session.zoom_in().is_err());
        assert_eq!(session.zoom().cell_length(), 16);
        assert_eq!(session.grid.dimensions(), (2, 2));
    }

    #[test]
    fn test_stamp_centers_selected_pattern() {
        let mut session = Session::new(&config(8), 160.0, 160.0).unwrap();
        // Blinker is horizontal, three wide
        session.select_pattern(1);
        assert_eq!(session.selected_pattern().name, "Blinker");

        assert_eq!(session.stamp_at(10, 10), 3);
        assert_eq!(session.grid.live_cells().collect::<Vec<_>>(), vec![(10, 9), (10, 10), (10, 11)]);
    }

    #[test]
    fn test_stamp_at_edge_places_partially() {
        let mut session = Session::new(&config(8), 160.0, 160.0).unwrap();
        session.select_pattern(1);
        assert_eq!(session.stamp_at(0, 0), 2);
        assert_eq!(session.grid.get_cell(0, 0), Some(Cell::Live));
    }

    #[test]
    fn test_reset_stops_clock_and_clears() {
        let mut session = Session::new(&config(8), 160.0, 160.0).unwrap();
        session.stamp_at(5, 5);
        session.toggle_running();
        session.step();

        session.reset().unwrap();
        assert!(!session.is_running());
        assert_eq!(session.generation(), 0);
        assert_eq!(session.grid.population(), 0);
    }

    #[test]
    fn test_resize_only_rebuilds_on_dimension_change() {
        let mut session = Session::new(&config(8), 160.0, 160.0).unwrap();
        session.stamp_at(5, 5);

        assert_eq!(session.resize_canvas(165.0, 167.0), Ok(false));
        assert!(session.grid.population() > 0);

        assert_eq!(session.resize_canvas(240.0, 160.0), Ok(true));
        assert_eq!(session.grid.dimensions(), (30, 20));
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut session = Session::new(&config(8), 160.0, 160.0).unwrap();
        session.select_pattern(3);
        session.select_pattern(999);
        assert_eq!(session.selected_index(), 3);
    }
}
