use super::{Cell, Grid, PatternError};

/// A stampable shape: relative `(dcol, drow)` offsets of live cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub description: String,
    pub width: usize,
    pub height: usize,
    pub offsets: Vec<(isize, isize)>,
}

impl Pattern {
    /// Create a pattern from live cell offsets. Offsets are shifted so the
    /// bounding box starts at (0, 0).
    pub fn new(name: impl Into<String>, description: impl Into<String>, offsets: Vec<(isize, isize)>) -> Self {
        let min_col = offsets.iter().map(|&(c, _)| c).min().unwrap_or(0);
        let min_row = offsets.iter().map(|&(_, r)| r).min().unwrap_or(0);
        let offsets: Vec<_> = offsets.into_iter().map(|(c, r)| (c - min_col, r - min_row)).collect();

        let width = offsets.iter().map(|&(c, _)| c).max().map_or(0, |c| c as usize + 1);
        let height = offsets.iter().map(|&(_, r)| r).max().map_or(0, |r| r as usize + 1);

        Self {
            name: name.into(),
            description: description.into(),
            width,
            height,
            offsets,
        }
    }

    /// Parse the plaintext `.cells` format.
    ///
    /// `!` lines are comments; `O` or `*` is live, `.` is dead. Rows may be ragged.
    pub fn from_plaintext(name: impl Into<String>, text: &str) -> Result<Self, PatternError> {
        let name = name.into();
        let mut description = String::new();
        let mut offsets = Vec::new();
        let mut row = 0isize;

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if let Some(comment) = line.strip_prefix('!') {
                if description.is_empty() {
                    description = comment.trim().to_owned();
                }
                continue;
            }

            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'O' | 'o' | '*' => offsets.push((col as isize, row)),
                    '.' => {}
                    _ => return Err(PatternError::Malformed { line: line_no + 1, ch }),
                }
            }
            row += 1;
        }

        if offsets.is_empty() {
            return Err(PatternError::Empty(name));
        }
        Ok(Self::new(name, description, offsets))
    }

    /// Build a pattern from an RGBA8 image: opaque dark pixels are live cells.
    pub fn from_rgba(name: impl Into<String>, width: usize, height: usize, bytes: &[u8]) -> Result<Self, PatternError> {
        let name = name.into();
        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(PatternError::BufferSize { expected, actual: bytes.len() });
        }

        let offsets: Vec<_> = bytes
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, px)| is_ink(px))
            .map(|(i, _)| ((i % width) as isize, (i / width) as isize))
            .collect();

        if offsets.is_empty() {
            return Err(PatternError::Empty(name));
        }
        let description = format!("Loaded from {width}x{height} image");
        Ok(Self::new(name, description, offsets))
    }

    /// Origin that centers the pattern's bounding box on a clicked cell
    pub fn centered_origin(&self, row: usize, col: usize) -> (isize, isize) {
        (
            row as isize - (self.height / 2) as isize,
            col as isize - (self.width / 2) as isize,
        )
    }

    /// Set every offset live relative to the origin. Cells falling outside the
    /// grid are dropped. Returns how many cells landed on the grid.
    pub fn stamp(&self, grid: &mut Grid, origin_row: isize, origin_col: isize) -> usize {
        let mut placed = 0;
        for &(dcol, drow) in &self.offsets {
            let (Ok(row), Ok(col)) = (
                usize::try_from(origin_row + drow),
                usize::try_from(origin_col + dcol),
            ) else {
                continue;
            };
            if grid.is_valid(row, col) {
                grid.set_cell(row, col, Cell::Live);
                placed += 1;
            }
        }
        placed
    }
}

/// Luma below mid-gray on an opaque pixel
fn is_ink(px: &[u8]) -> bool {
    let [r, g, b, a] = [px[0], px[1], px[2], px[3]].map(u32::from);
    let luma = (299 * r + 587 * g + 114 * b) / 1000;
    a >= 128 && luma < 128
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    fn preset(name: &str, description: &str, cells: &[(isize, isize)]) -> Pattern {
        Pattern::new(name, description, cells.to_vec())
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        preset("Glider", "Moves diagonally (period 4)", &[
            (1, 0),
            (2, 1),
            (0, 2), (1, 2), (2, 2),
        ])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        preset("Blinker", "Oscillator (period 2)", &[(0, 0), (1, 0), (2, 0)])
    }

    pub fn toad() -> Pattern {
        preset("Toad", "Oscillator (period 2)", &[
            (1, 0), (2, 0), (3, 0),
            (0, 1), (1, 1), (2, 1),
        ])
    }

    pub fn beacon() -> Pattern {
        preset("Beacon", "Oscillator (period 2)", &[
            (0, 0), (1, 0),
            (0, 1),
            (3, 2),
            (2, 3), (3, 3),
        ])
    }

    /// Pulsar - period 3 oscillator, symmetric in both axes
    pub fn pulsar() -> Pattern {
        let quadrant: [(isize, isize); 12] = [(2, 0), (3, 0), (4, 0), (0, 2), (0, 3), (0, 4), (5, 2), (5, 3), (5, 4), (2, 5), (3, 5), (4, 5)];
        let cells: Vec<_> = quadrant
            .iter()
            .flat_map(|&(c, r)| [(c, r), (12 - c, r), (c, 12 - r), (12 - c, 12 - r)])
            .collect();
        preset("Pulsar", "Oscillator (period 3)", &cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        preset("LWSS", "Lightweight spaceship (period 4)", &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ])
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        preset("Gosper Glider Gun", "Produces gliders (period 30)", &[
            // Left square
            (0, 4), (0, 5), (1, 4), (1, 5),
            // Left circle
            (10, 4), (10, 5), (10, 6),
            (11, 3), (11, 7),
            (12, 2), (12, 8),
            (13, 2), (13, 8),
            (14, 5),
            (15, 3), (15, 7),
            (16, 4), (16, 5), (16, 6),
            (17, 5),
            // Middle pieces
            (20, 2), (20, 3), (20, 4),
            (21, 2), (21, 3), (21, 4),
            (22, 1), (22, 5),
            (24, 0), (24, 1), (24, 5), (24, 6),
            // Right square
            (34, 2), (34, 3), (35, 2), (35, 3),
        ])
    }

    /// R-pentomino - stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        preset("R-pentomino", "Methuselah - stabilizes at gen 1103", &[
            (1, 0), (2, 0),
            (0, 1), (1, 1),
            (1, 2),
        ])
    }

    pub fn acorn() -> Pattern {
        preset("Acorn", "Methuselah - stabilizes at gen 5206", &[
            (1, 0),
            (3, 1),
            (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
        ])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        preset("Block", "Still life", &[(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Get all built-in patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}
