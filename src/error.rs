//! Error types for board construction and move application.

use crate::vertex::Vertex;

/// Errors raised while constructing a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Size is negative, or larger than
    /// [`MAX_BOARD_SIZE`](crate::constants::MAX_BOARD_SIZE). The upper bound
    /// is a limit of this crate, not of the rules: any non-negative size
    /// would be a well-formed board.
    #[error("invalid board size: {0}")]
    InvalidSize(i64),

    /// A row grid or diagram does not match the board size
    #[error("arrangement shape mismatch: expected {expected}, found {found}")]
    ArrangementShape { expected: usize, found: usize },

    /// A grid cell outside `{-1, 0, 1}`
    #[error("invalid sign in arrangement: {0}")]
    InvalidSign(i64),

    /// A diagram character other than `X`, `O`, `.` or `+`
    #[error("unknown diagram symbol: {0:?}")]
    UnknownSymbol(char),
}

/// Reasons a move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Sign 0 does not name a player
    #[error("illegal move: no color to play")]
    EmptySign,

    /// Point is not empty
    #[error("illegal move: point {0} not empty")]
    Occupied(Vertex),
}
