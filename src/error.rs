//! Error type shared by grid construction, editing and search.

use grid_util::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell size must be positive")]
    InvalidCellSize,

    #[error("cell {0:?} lies outside the grid")]
    OutOfBounds(Point),

    #[error("search precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("a search has been started on this grid, reset it first")]
    SearchStarted,

    #[error("no {0} cell has been placed")]
    MissingEndpoint(&'static str),

    #[error("cell {0:?} holds the start or end")]
    Occupied(Point),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, GridError>;
