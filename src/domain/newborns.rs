/// Columns born on a single row during one update, ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewbornRow {
    pub row: usize,
    pub cols: Vec<usize>,
}

/// Cells that went Dead -> Live during one `Grid::update` call.
///
/// Rows are stored in ascending order and empty rows are omitted. The report
/// carries the grid dimensions so listeners can scale positions without
/// holding on to the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewbornReport {
    width: usize,
    height: usize,
    rows: Vec<NewbornRow>,
}

impl NewbornReport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, rows: Vec::new() }
    }

    /// Append the births of `row`. Rows must arrive in ascending order.
    pub(crate) fn push_row(&mut self, row: usize, cols: Vec<usize>) {
        debug_assert!(self.rows.last().is_none_or(|last| last.row < row));
        if !cols.is_empty() {
            self.rows.push(NewbornRow { row, cols });
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[NewbornRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of births
    pub fn len(&self) -> usize {
        self.rows.iter().map(|r| r.cols.len()).sum()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows
            .binary_search_by_key(&row, |r| r.row)
            .is_ok_and(|i| self.rows[i].cols.binary_search(&col).is_ok())
    }

    /// Iterate `(row, col)` pairs in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .flat_map(|r| r.cols.iter().map(move |&c| (r.row, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows_are_skipped() {
        let mut report = NewbornReport::new(10, 10);
        report.push_row(0, vec![]);
        report.push_row(3, vec![1, 4]);
        report.push_row(5, vec![]);

        assert_eq!(report.rows().len(), 1);
        assert_eq!(report.len(), 2);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_contains_and_positions() {
        let mut report = NewbornReport::new(8, 8);
        report.push_row(1, vec![2]);
        report.push_row(6, vec![0, 7]);

        assert!(report.contains(1, 2));
        assert!(report.contains(6, 7));
        assert!(!report.contains(6, 1));
        assert!(!report.contains(2, 2));
        assert_eq!(report.positions().collect::<Vec<_>>(), vec![(1, 2), (6, 0), (6, 7)]);
    }
}
