//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine calls
//! [`outcome_after`] once per move, right after placing the mover's mark.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{has_line, lines};

use super::{Board, CellValue, GamePhase};
use tracing::instrument;

/// Phase reached after `mover` has just placed a mark on `board`.
///
/// A completed line wins for the mover; otherwise a full board is a
/// draw; otherwise the opponent moves next.
///
/// # Panics
///
/// Panics if `mover` is [`CellValue::Empty`]. The engine only ever calls
/// this with the symbol it just placed.
#[instrument(skip(board), fields(size = board.size()))]
pub(crate) fn outcome_after(board: &Board, mover: CellValue) -> GamePhase {
    let Some(player) = mover.player() else {
        panic!("terminal evaluation requires a player symbol, got {mover:?}");
    };

    if has_line(board, player) {
        GamePhase::won_by(player)
    } else if is_full(board) {
        GamePhase::Draw
    } else {
        GamePhase::to_move_by(player.opponent())
    }
}
