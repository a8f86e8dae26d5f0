mod cell;
mod error;
mod grid;
mod newborns;
mod patterns;
pub mod neighbors;

pub use cell::Cell;
pub use error::{GridError, MIN_DIMENSION, PatternError};
pub use grid::Grid;
pub use neighbors::{Classification, classify};
pub use newborns::{NewbornReport, NewbornRow};
pub use patterns::{Pattern, presets};
