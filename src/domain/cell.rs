/// Cell is one grid position: either Dead or Live.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Live,
}

impl Cell {
    /// Check if the cell is currently live
    pub const fn is_live(self) -> bool {
        matches!(self, Cell::Live)
    }

    /// Weight used when summing neighbors (Dead = 0, Live = 1)
    pub const fn weight(self) -> u8 {
        match self {
            Cell::Live => 1,
            Cell::Dead => 0,
        }
    }

    /// Next state under B3/S23:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors is born
    /// 3. Everything else is dead next generation
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Live, 2 | 3) => Cell::Live,
            (Cell::Dead, 3) => Cell::Live,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(live: bool) -> Self {
        if live { Cell::Live } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Live.evolve(0), Cell::Dead);
        assert_eq!(Cell::Live.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Live.evolve(2), Cell::Live);
        assert_eq!(Cell::Live.evolve(3), Cell::Live);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::Live.evolve(4), Cell::Dead);
        assert_eq!(Cell::Live.evolve(8), Cell::Dead);
    }

    #[test]
    fn test_birth_only_on_three() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Live);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead, "dead cell with {n} neighbors");
        }
    }

    #[test]
    fn test_weight_and_conversion() {
        assert_eq!(Cell::Live.weight(), 1);
        assert_eq!(Cell::Dead.weight(), 0);
        assert_eq!(Cell::from(true), Cell::Live);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert_eq!(Cell::default(), Cell::Dead);
    }
}
