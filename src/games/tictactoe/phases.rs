//! Game phases for the tic-tac-toe state machine.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Current turn or outcome of a game.
///
/// `XToMove` and `OToMove` accept moves; the other three are terminal.
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
pub enum GamePhase {
    /// X is to move.
    #[default]
    #[display("X to move")]
    XToMove,
    /// O is to move.
    #[display("O to move")]
    OToMove,
    /// X completed a line.
    #[display("X wins")]
    XWon,
    /// O completed a line.
    #[display("O wins")]
    OWon,
    /// Board filled with no winner.
    #[display("Draw")]
    Draw,
}

impl GamePhase {
    /// Phase in which `player` is to move.
    pub fn to_move_by(player: Player) -> Self {
        match player {
            Player::X => GamePhase::XToMove,
            Player::O => GamePhase::OToMove,
        }
    }

    /// Phase in which `player` has won.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GamePhase::XWon,
            Player::O => GamePhase::OWon,
        }
    }

    /// Returns true for `XWon`, `OWon` and `Draw`.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::XWon | GamePhase::OWon | GamePhase::Draw)
    }

    /// Returns the player to move, if the game is still running.
    pub fn to_move(self) -> Option<Player> {
        match self {
            GamePhase::XToMove => Some(Player::X),
            GamePhase::OToMove => Some(Player::O),
            GamePhase::XWon | GamePhase::OWon | GamePhase::Draw => None,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GamePhase::XWon => Some(Player::X),
            GamePhase::OWon => Some(Player::O),
            GamePhase::XToMove | GamePhase::OToMove | GamePhase::Draw => None,
        }
    }
}
