mod action;
mod board;
mod cell;
mod game;
mod phases;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, DEFAULT_SIZE, MAX_SIZE};
pub use cell::{Cell, CellListener};
pub use game::{Game, GameListener};
pub use phases::GamePhase;
pub use types::{CellValue, Player};
