//! Move requests and the errors they can produce.
//!
//! Coordinates are signed so that whatever a front end reads from its
//! input can be submitted as-is; anything off the board is rejected as
//! [`MoveError::OutOfBounds`].

use super::phases::GamePhase;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A request to mark the cell at `(col, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Column, counted from the left edge.
    pub col: i64,
    /// Row, counted from the top edge.
    pub row: i64,
}

impl Move {
    /// Creates a move request for `(col, row)`.
    #[instrument]
    pub fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }

    /// Returns the column.
    pub fn col(&self) -> i64 {
        self.col
    }

    /// Returns the row.
    pub fn row(&self) -> i64 {
        self.row
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}; {})", self.col, self.row)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate lies outside `[0, size)`.
    #[display("({}; {}) is outside the {}x{} board", col, row, size, size)]
    OutOfBounds {
        /// Requested column.
        col: i64,
        /// Requested row.
        row: i64,
        /// Board edge length.
        size: usize,
    },

    /// The targeted cell already holds a mark.
    #[display("Cell ({}; {}) is already occupied", col, row)]
    CellOccupied {
        /// Requested column.
        col: i64,
        /// Requested row.
        row: i64,
    },

    /// The game reached a terminal phase.
    #[display("Game is already over: {}", _0)]
    GameAlreadyOver(GamePhase),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(3, 4).to_string(), "(3; 4)");
        assert_eq!(Move::new(0, 0).to_string(), "(0; 0)");
        assert_eq!(Move::new(-1, -2).to_string(), "(-1; -2)");
    }

    #[test]
    fn test_move_accessors() {
        let mv = Move::new(1, 2);
        assert_eq!(mv.col(), 1);
        assert_eq!(mv.row(), 2);
    }

    #[test]
    fn test_error_messages() {
        let err = MoveError::OutOfBounds {
            col: 3,
            row: 0,
            size: 3,
        };
        assert_eq!(err.to_string(), "(3; 0) is outside the 3x3 board");

        let err = MoveError::CellOccupied { col: 0, row: 0 };
        assert!(err.to_string().contains("occupied"));

        let err = MoveError::GameAlreadyOver(GamePhase::XWon);
        assert_eq!(err.to_string(), "Game is already over: X wins");
    }
}
