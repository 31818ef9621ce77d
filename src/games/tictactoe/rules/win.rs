//! Win detection logic for tic-tac-toe.

use super::super::{Board, CellValue, Player};
use tracing::instrument;

/// Every winning line on a `size`×`size` board as `(col, row)` lists.
///
/// Rows first, then columns, then the main diagonal and the
/// anti-diagonal.
pub fn lines(size: usize) -> impl Iterator<Item = Vec<(usize, usize)>> {
    let rows = (0..size).map(move |row| (0..size).map(|col| (col, row)).collect::<Vec<_>>());
    let cols = (0..size).map(move |col| (0..size).map(|row| (col, row)).collect::<Vec<_>>());
    let main = std::iter::once((0..size).map(|i| (i, i)).collect::<Vec<_>>());
    let anti = std::iter::once((0..size).map(|i| (size - 1 - i, i)).collect::<Vec<_>>());
    rows.chain(cols).chain(main).chain(anti)
}

/// Checks whether `player` owns every cell of some row, column or diagonal.
#[instrument(skip(board), fields(size = board.size()))]
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = CellValue::from(player);
    lines(board.size()).any(|line| {
        line.iter()
            .all(|&(col, row)| board.get(col, row) == Some(mark))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: &mut Board, cells: &[(usize, usize)], value: CellValue) {
        for &(col, row) in cells {
            board.cell_at_mut(col, row).unwrap().set(value);
        }
    }

    #[test]
    fn test_line_count() {
        assert_eq!(lines(3).count(), 8);
        assert_eq!(lines(5).count(), 12);
        assert!(lines(4).all(|line| line.len() == 4));
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        assert!(!has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_winner_row() {
        let mut board = Board::new(4);
        mark(&mut board, &[(0, 2), (1, 2), (2, 2), (3, 2)], CellValue::O);
        assert!(has_line(&board, Player::O));
        assert!(!has_line(&board, Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new(3);
        mark(&mut board, &[(1, 0), (1, 1), (1, 2)], CellValue::X);
        assert!(has_line(&board, Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new(3);
        mark(&mut board, &[(2, 0), (1, 1), (0, 2)], CellValue::O);
        assert!(has_line(&board, Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal_four_by_four() {
        let mut board = Board::new(4);
        mark(&mut board, &[(3, 0), (2, 1), (1, 2), (0, 3)], CellValue::X);
        assert!(has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new(3);
        mark(&mut board, &[(0, 0), (1, 1)], CellValue::X);
        mark(&mut board, &[(2, 2)], CellValue::O);
        assert!(!has_line(&board, Player::X));
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1);
        mark(&mut board, &[(0, 0)], CellValue::X);
        assert!(has_line(&board, Player::X));
    }
}
