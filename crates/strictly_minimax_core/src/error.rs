//! Error types for move validation and board parsing.

use crate::Position;

/// Error that can occur when validating or applying a move.
///
/// Every variant is detected before the board is touched, so a rejected
/// move leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not in 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Returns true for the rejections a presentation layer should simply
    /// ignore (stale or invalid cell selections).
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, MoveError::OutOfRange(_) | MoveError::SquareOccupied(_))
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// A character other than `X`, `O`, `_`, `.` or `-` was found.
    #[display("Unexpected character {:?} at cell {}", found, cell)]
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// Cell index it would have occupied.
        cell: usize,
    },

    /// The input did not describe exactly 9 cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
}
