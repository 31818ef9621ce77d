//! Strictly tic-tac-toe: rules engine for N×N tic-tac-toe.
//!
//! The engine owns an observable board, enforces turn order and move
//! legality, detects wins and draws and notifies listeners after every
//! committed move. Front ends are thin adapters: they read coordinates,
//! call [`Game::make_move`] and re-render when notified.
//!
//! # Architecture
//!
//! - **Board**: `size`×`size` grid of [`Cell`]s, each with its own listeners
//! - **Game**: the [`GamePhase`] state machine over a board
//! - **Rules**: pure win/draw evaluation in [`rules`]
//! - **Session**: the render / read / apply loop over a [`GameView`]
//! - **Config**: board settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GamePhase};
//!
//! let mut game = Game::new();
//! game.subscribe(|phase| println!("now: {phase}"));
//!
//! assert_eq!(game.make_move(1, 1), Ok(GamePhase::OToMove));
//! assert!(game.make_move(1, 1).is_err());
//! assert_eq!(game.render(), "___\n_X_\n___\n");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session driver
pub use session::{GameView, Session};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, CellListener, CellValue, DEFAULT_SIZE, Game, GameListener, GamePhase, MAX_SIZE,
    Move, MoveError, Player, rules,
};
