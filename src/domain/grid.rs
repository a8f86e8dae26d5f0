use super::neighbors::{Classification, classify};
use super::{Cell, GridError, MIN_DIMENSION, NewbornReport};
use rand::Rng;
use rayon::prelude::*;

/// Grid owns a bounded 2D cellular automaton.
///
/// Two equally sized buffers are kept: `cells` is the current generation and
/// `next` is scratch space for the following one. `update` reads only from
/// `cells`, writes only to `next`, then swaps the two, so every cell advances
/// simultaneously regardless of iteration order.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
    classification: Vec<Classification>,
}

impl Grid {
    /// Create an all-dead grid and precompute each position's neighbor class
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(GridError::TooSmall { width, height });
        }

        let classification = (0..height)
            .flat_map(|row| (0..width).map(move |col| classify(row, col, width, height)))
            .collect();

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
            next: vec![Cell::Dead; width * height],
            classification,
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// True iff the position lies in `[0, height) x [0, width)`
    pub const fn is_valid(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Cell at position, `None` when out of range
    pub fn get_cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.is_valid(row, col).then(|| self.cells[self.index(row, col)])
    }

    /// Overwrite a cell in the current generation. Out-of-range writes are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        if self.is_valid(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Live neighbors of a position, `None` when out of range.
    ///
    /// The position is checked once; the cached classification then keeps
    /// every neighbor in bounds.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> Option<u8> {
        if !self.is_valid(row, col) {
            return None;
        }
        let class = self.classification[self.index(row, col)];
        Some(live_neighbors(&self.cells, self.width, class, row, col))
    }

    /// Advance one generation and report the cells that were born.
    pub fn update(&mut self) -> NewbornReport {
        let mut report = NewbornReport::new(self.width, self.height);
        let width = self.width;

        for (row, out) in self.next.chunks_exact_mut(width).enumerate() {
            let born = evolve_row(&self.cells, &self.classification, width, row, out);
            report.push_row(row, born);
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        report
    }

    /// Same as [`Grid::update`] with rows evolved in parallel via rayon.
    /// Worth it for large grids; results are identical.
    pub fn update_parallel(&mut self) -> NewbornReport {
        let width = self.width;
        let cells = &self.cells;
        let classification = &self.classification;

        let births: Vec<Vec<usize>> = self
            .next
            .par_chunks_exact_mut(width)
            .enumerate()
            .map(|(row, out)| evolve_row(cells, classification, width, row, out))
            .collect();

        let mut report = NewbornReport::new(self.width, self.height);
        for (row, born) in births.into_iter().enumerate() {
            report.push_row(row, born);
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        report
    }

    /// Kill every cell in the current generation
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill the current generation randomly, each cell live with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Count live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    /// Iterate over every valid position with its state, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.width, idx % self.width, cell))
    }

    /// Positions of live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_live())
            .map(|(row, col, _)| (row, col))
    }
}

#[inline]
fn live_neighbors(cells: &[Cell], width: usize, class: Classification, row: usize, col: usize) -> u8 {
    class
        .offsets()
        .iter()
        .map(|&(dcol, drow)| {
            let r = row.wrapping_add_signed(drow);
            let c = col.wrapping_add_signed(dcol);
            cells[r * width + c].weight()
        })
        .sum()
}

/// Write the next state of `row` into `out` and return the columns that were born.
fn evolve_row(
    cells: &[Cell],
    classification: &[Classification],
    width: usize,
    row: usize,
    out: &mut [Cell],
) -> Vec<usize> {
    let base = row * width;
    let mut born = Vec::new();

    for (col, slot) in out.iter_mut().enumerate() {
        let current = cells[base + col];
        let neighbors = live_neighbors(cells, width, classification[base + col], row, col);
        let next = current.evolve(neighbors);

        if !current.is_live() && next.is_live() {
            born.push(col);
        }
        *slot = next;
    }

    born
}
