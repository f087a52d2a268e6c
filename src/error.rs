//! Error types for the Othello engine
//!
//! Every condition here is local and recoverable. Having no legal move is
//! not an error: it is represented by [`Move::Pass`](crate::board::Move::Pass).

use thiserror::Error;

use crate::board::Color;

/// Errors raised by board construction, move application and the grid boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Coordinates outside the grid.
    #[error("position ({col}, {row}) is outside the {width}x{height} board")]
    OutOfBounds {
        col: i64,
        row: i64,
        width: usize,
        height: usize,
    },

    /// Target cell is occupied or the placement brackets nothing.
    #[error("{color:?} cannot play at ({col}, {row})")]
    IllegalMove { col: usize, row: usize, color: Color },

    /// Pass requested while the side still has a legal move.
    #[error("{color:?} has a legal move and may not pass")]
    PassNotAllowed { color: Color },

    /// Move requested after the game ended.
    #[error("the game is over")]
    GameOver,

    /// Board dimensions the engine cannot represent.
    #[error("unsupported board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Malformed boundary grid.
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    /// Grid value other than -1 (empty), 0 (white) or 1 (black).
    #[error("invalid cell value {value} at ({col}, {row})")]
    InvalidCell { value: i32, col: usize, row: usize },

    /// Custom positional weight table whose size does not match the board.
    #[error("weight table has {found} cells, board has {expected}")]
    InvalidWeightTable { expected: usize, found: usize },

    /// Board handed to an engine configured for another grid size.
    #[error("engine plays {expected_width}x{expected_height}, board is {width}x{height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
