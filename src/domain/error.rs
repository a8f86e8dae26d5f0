use thiserror::Error;

/// Smallest width/height a grid accepts on either axis.
pub const MIN_DIMENSION: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must be at least {min}x{min} cells, got {width}x{height}", min = MIN_DIMENSION)]
    TooSmall { width: usize, height: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern '{0}' has no live cells")]
    Empty(String),
    #[error("unexpected character {ch:?} on line {line}")]
    Malformed { line: usize, ch: char },
    #[error("pixel buffer holds {actual} bytes, expected {expected} for the given size")]
    BufferSize { expected: usize, actual: usize },
}
