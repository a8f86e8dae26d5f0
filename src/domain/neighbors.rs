//! Neighbor classification for a bounded (non-wrapping) grid.
//!
//! Every position falls into one of nine classes depending on which grid
//! edges it touches. Each class owns a static table of the `(dcol, drow)`
//! offsets that stay inside the grid, so the update loop never has to
//! bounds-check a neighbor.

/// Position class relative to the four grid edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

// Offsets are (dcol, drow), listed row by row from the top.
const TOP_LEFT: [(isize, isize); 3] = [(1, 0), (0, 1), (1, 1)];
const TOP_RIGHT: [(isize, isize); 3] = [(-1, 0), (-1, 1), (0, 1)];
const BOTTOM_LEFT: [(isize, isize); 3] = [(0, -1), (1, -1), (1, 0)];
const BOTTOM_RIGHT: [(isize, isize); 3] = [(-1, -1), (0, -1), (-1, 0)];
const TOP: [(isize, isize); 5] = [(-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];
const BOTTOM: [(isize, isize); 5] = [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0)];
const LEFT: [(isize, isize); 5] = [(0, -1), (1, -1), (1, 0), (0, 1), (1, 1)];
const RIGHT: [(isize, isize); 5] = [(-1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];
const CENTER: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Classification {
    /// All nine classes
    pub const ALL: [Classification; 9] = [
        Classification::TopLeft,
        Classification::TopRight,
        Classification::BottomLeft,
        Classification::BottomRight,
        Classification::Top,
        Classification::Bottom,
        Classification::Left,
        Classification::Right,
        Classification::Center,
    ];

    /// Relative `(dcol, drow)` neighbor positions to examine for this class.
    #[inline]
    pub const fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Classification::TopLeft => &TOP_LEFT,
            Classification::TopRight => &TOP_RIGHT,
            Classification::BottomLeft => &BOTTOM_LEFT,
            Classification::BottomRight => &BOTTOM_RIGHT,
            Classification::Top => &TOP,
            Classification::Bottom => &BOTTOM,
            Classification::Left => &LEFT,
            Classification::Right => &RIGHT,
            Classification::Center => &CENTER,
        }
    }

    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Classification::TopLeft
                | Classification::TopRight
                | Classification::BottomLeft
                | Classification::BottomRight
        )
    }
}

/// Classify a valid position. Corners win over edges, edges over the interior.
///
/// Only meaningful for `row < height` and `col < width` with both dimensions
/// at least 2; [`Grid`](super::Grid) guarantees that before calling.
pub const fn classify(row: usize, col: usize, width: usize, height: usize) -> Classification {
    let top = row == 0;
    let bottom = row + 1 == height;
    let left = col == 0;
    let right = col + 1 == width;

    match (top, bottom, left, right) {
        (true, _, true, _) => Classification::TopLeft,
        (true, _, _, true) => Classification::TopRight,
        (_, true, true, _) => Classification::BottomLeft,
        (_, true, _, true) => Classification::BottomRight,
        (true, ..) => Classification::Top,
        (_, true, ..) => Classification::Bottom,
        (_, _, true, _) => Classification::Left,
        (_, _, _, true) => Classification::Right,
        _ => Classification::Center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Moore neighborhood filtered to in-bounds cells, the reference the tables must match
    fn in_bounds_moore(row: usize, col: usize, width: usize, height: usize) -> HashSet<(isize, isize)> {
        let mut set = HashSet::new();
        for drow in -1isize..=1 {
            for dcol in -1isize..=1 {
                if dcol == 0 && drow == 0 {
                    continue;
                }
                let r = row as isize + drow;
                let c = col as isize + dcol;
                if r >= 0 && c >= 0 && (r as usize) < height && (c as usize) < width {
                    set.insert((dcol, drow));
                }
            }
        }
        set
    }

    #[test]
    fn test_table_sizes() {
        for class in Classification::ALL {
            let expected = match class {
                Classification::Center => 8,
                c if c.is_corner() => 3,
                _ => 5,
            };
            assert_eq!(class.offsets().len(), expected, "{class:?}");
        }
    }

    #[test]
    fn test_corners_take_precedence() {
        assert_eq!(classify(0, 0, 5, 4), Classification::TopLeft);
        assert_eq!(classify(0, 4, 5, 4), Classification::TopRight);
        assert_eq!(classify(3, 0, 5, 4), Classification::BottomLeft);
        assert_eq!(classify(3, 4, 5, 4), Classification::BottomRight);
    }

    #[test]
    fn test_edges_and_center() {
        assert_eq!(classify(0, 2, 5, 4), Classification::Top);
        assert_eq!(classify(3, 2, 5, 4), Classification::Bottom);
        assert_eq!(classify(1, 0, 5, 4), Classification::Left);
        assert_eq!(classify(2, 4, 5, 4), Classification::Right);
        assert_eq!(classify(2, 2, 5, 4), Classification::Center);
    }

    #[test]
    fn test_tables_match_moore_neighborhood() {
        let (width, height) = (6, 5);
        for row in 0..height {
            for col in 0..width {
                let class = classify(row, col, width, height);
                let table: HashSet<_> = class.offsets().iter().copied().collect();
                assert_eq!(table.len(), class.offsets().len(), "duplicate offset in {class:?}");
                assert_eq!(
                    table,
                    in_bounds_moore(row, col, width, height),
                    "offsets for ({row}, {col}) classified {class:?}"
                );
            }
        }
    }

    #[test]
    fn test_two_by_two_is_all_corners() {
        for row in 0..2 {
            for col in 0..2 {
                assert!(classify(row, col, 2, 2).is_corner());
            }
        }
    }
}
