//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no line for the last mover is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.get().is_empty())
}
