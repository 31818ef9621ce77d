//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Value held by a single board cell.
///
/// Renders as `X`, `O` or `_` for empty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum CellValue {
    /// Nobody has played here.
    #[default]
    #[display("_")]
    Empty,
    /// Marked by player X.
    #[display("X")]
    X,
    /// Marked by player O.
    #[display("O")]
    O,
}

impl CellValue {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            CellValue::Empty => None,
            CellValue::X => Some(Player::X),
            CellValue::O => Some(Player::O),
        }
    }

    /// Checks if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == CellValue::Empty
    }
}

impl From<Player> for CellValue {
    fn from(player: Player) -> Self {
        match player {
            Player::X => CellValue::X,
            Player::O => CellValue::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_cell_value_symbols() {
        assert_eq!(CellValue::X.to_string(), "X");
        assert_eq!(CellValue::O.to_string(), "O");
        assert_eq!(CellValue::Empty.to_string(), "_");
    }

    #[test]
    fn test_cell_value_variants() {
        let values: Vec<_> = CellValue::iter().collect();
        assert_eq!(values, vec![CellValue::Empty, CellValue::X, CellValue::O]);
    }

    #[test]
    fn test_player_round_trips_through_cell() {
        for player in Player::iter() {
            assert_eq!(CellValue::from(player).player(), Some(player));
        }
        assert_eq!(CellValue::Empty.player(), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
