//! Property-based invariant tests for the bounded grid.
//!
//! 1. Neighbor offsets never leave the grid, for any size and position.
//! 2. A generation depends only on the current cells, never on stale buffers.
//! 3. The parallel update agrees with the serial one.
//! 4. Writes outside the grid change nothing.
//! 5. The newborn report lists exactly the dead-to-live transitions.

use proptest::prelude::*;
use sonic_life::domain::{Cell, Grid, MIN_DIMENSION, classify};

// ── Helpers ─────────────────────────────────────────────────────────────

fn dims_strategy() -> impl Strategy<Value = (usize, usize)> {
    (MIN_DIMENSION..=24usize, MIN_DIMENSION..=24usize)
}

/// A grid plus the live cells used to seed it
fn seeded_grid_strategy() -> impl Strategy<Value = (Grid, Vec<(usize, usize)>)> {
    dims_strategy().prop_flat_map(|(width, height)| {
        prop::collection::vec((0..height, 0..width), 0..(width * height))
            .prop_map(move |live| {
                let mut grid = Grid::new(width, height).expect("dims come from MIN_DIMENSION..");
                for &(row, col) in &live {
                    grid.set_cell(row, col, Cell::Live);
                }
                (grid, live)
            })
    })
}

fn snapshot(grid: &Grid) -> Vec<Cell> {
    grid.iter_cells().map(|(_, _, cell)| cell).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Offsets stay in bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offsets_stay_in_bounds((width, height) in dims_strategy(), r in 0usize..1000, c in 0usize..1000) {
        let (row, col) = (r % height, c % width);
        for &(dcol, drow) in classify(row, col, width, height).offsets() {
            let nr = row as isize + drow;
            let nc = col as isize + dcol;
            prop_assert!(
                (0..height as isize).contains(&nr) && (0..width as isize).contains(&nc),
                "offset ({}, {}) from ({}, {}) leaves a {}x{} grid",
                dcol, drow, row, col, width, height
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Update ignores the scratch buffer
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn update_depends_only_on_current_cells((grid, live) in seeded_grid_strategy()) {
        let (width, height) = grid.dimensions();

        // Same cells, but the second grid's scratch buffer has been written
        let mut fresh = grid.clone();
        let mut dirty = grid;
        dirty.update();
        dirty.update();
        dirty.clear();
        for &(row, col) in &live {
            dirty.set_cell(row, col, Cell::Live);
        }
        prop_assert_eq!(snapshot(&fresh), snapshot(&dirty));

        let a = fresh.update();
        let b = dirty.update();
        prop_assert_eq!(a, b, "reports differ on a {}x{} grid", width, height);
        prop_assert_eq!(snapshot(&fresh), snapshot(&dirty));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Parallel matches serial
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parallel_matches_serial((grid, _) in seeded_grid_strategy(), generations in 1usize..5) {
        let mut serial = grid.clone();
        let mut parallel = grid;
        for _ in 0..generations {
            let a = serial.update();
            let b = parallel.update_parallel();
            prop_assert_eq!(a, b);
        }
        prop_assert_eq!(snapshot(&serial), snapshot(&parallel));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Out-of-range writes are ignored
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn out_of_range_set_is_noop((mut grid, _) in seeded_grid_strategy(), extra_row in 0usize..100, extra_col in 0usize..100) {
        let before = snapshot(&grid);
        let (width, height) = grid.dimensions();

        grid.set_cell(height + extra_row, extra_col, Cell::Live);
        grid.set_cell(extra_row, width + extra_col, Cell::Live);

        prop_assert_eq!(before, snapshot(&grid));
        prop_assert_eq!(grid.get_cell(height + extra_row, extra_col), None);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Report lists births only
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn report_matches_births((mut grid, _) in seeded_grid_strategy()) {
        let before = grid.clone();
        let report = grid.update();

        let mut births = 0;
        for (row, col, cell) in grid.iter_cells() {
            let was_dead = before.get_cell(row, col) == Some(Cell::Dead);
            let born = was_dead && cell == Cell::Live;
            prop_assert_eq!(report.contains(row, col), born, "mismatch at ({}, {})", row, col);
            births += usize::from(born);
        }
        prop_assert_eq!(report.len(), births);

        let rows: Vec<usize> = report.rows().iter().map(|r| r.row).collect();
        prop_assert!(rows.windows(2).all(|w| w[0] < w[1]), "rows not ascending: {:?}", rows);
        prop_assert!(report.rows().iter().all(|r| !r.cols.is_empty()));
    }
}
