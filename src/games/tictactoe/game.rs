//! Game engine for tic-tac-toe.
//!
//! [`Game`] owns the board and the current [`GamePhase`]. Every
//! committed move runs the same sequence: validate, mark the cell (which
//! fires that cell's listeners), evaluate the outcome, then notify the
//! game-update listeners with the resulting phase.

use super::action::{Move, MoveError};
use super::board::{Board, DEFAULT_SIZE};
use super::phases::GamePhase;
use super::rules;
use super::types::CellValue;
use crate::config::{ConfigError, GameConfig};
use tracing::{debug, info, instrument, warn};

/// Callback invoked with the new phase after every committed move.
pub type GameListener = Box<dyn FnMut(GamePhase)>;

/// Tic-tac-toe game engine.
pub struct Game {
    board: Board,
    phase: GamePhase,
    listeners: Vec<GameListener>,
}

impl Game {
    /// Creates a new 3×3 game.
    #[instrument]
    pub fn new() -> Self {
        Self::on_board(Board::new(DEFAULT_SIZE))
    }

    /// Creates a new `size`×`size` game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `size` is zero.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        Self::from_config(&GameConfig::default().with_size(size))
    }

    /// Creates a new game from a validated configuration.
    #[instrument(skip(config), fields(size = config.size()))]
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::on_board(Board::new(*config.size())))
    }

    fn on_board(board: Board) -> Self {
        debug!(size = board.size(), "Creating new game");
        Self {
            board,
            phase: GamePhase::XToMove,
            listeners: Vec::new(),
        }
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets the value at `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> Option<CellValue> {
        self.board.get(col, row)
    }

    /// Renders the board one row per line.
    pub fn render(&self) -> String {
        self.board.render()
    }

    /// Registers a listener called with the new phase after each committed move.
    pub fn subscribe(&mut self, listener: impl FnMut(GamePhase) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Registers a listener on the cell at `(col, row)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the cell is not on the board.
    #[instrument(skip(self, listener))]
    pub fn subscribe_cell(
        &mut self,
        col: i64,
        row: i64,
        listener: impl FnMut(CellValue) + 'static,
    ) -> Result<(), MoveError> {
        let (c, r) = self.locate(col, row)?;
        let size = self.board.size();
        let cell = self
            .board
            .cell_at_mut(c, r)
            .ok_or(MoveError::OutOfBounds { col, row, size })?;
        cell.subscribe(listener);
        Ok(())
    }

    /// Applies a [`Move`].
    pub fn apply(&mut self, mv: Move) -> Result<GamePhase, MoveError> {
        self.make_move(mv.col, mv.row)
    }

    /// Marks `(col, row)` for the player to move.
    ///
    /// Returns the phase reached after the move. Failed moves leave the
    /// board and phase untouched and notify nobody.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if a coordinate is outside `[0, size)`
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    /// - [`MoveError::GameAlreadyOver`] if the game has ended
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn make_move(&mut self, col: i64, row: i64) -> Result<GamePhase, MoveError> {
        let (c, r) = self.locate(col, row).inspect_err(|e| warn!(%e, "Rejected move"))?;

        let size = self.board.size();
        let Some(cell) = self.board.cell_at_mut(c, r) else {
            return Err(MoveError::OutOfBounds { col, row, size });
        };

        if !cell.get().is_empty() {
            warn!("Rejected move: cell occupied");
            return Err(MoveError::CellOccupied { col, row });
        }

        let Some(player) = self.phase.to_move() else {
            warn!("Rejected move: game over");
            return Err(MoveError::GameAlreadyOver(self.phase));
        };

        let mark = CellValue::from(player);
        cell.set(mark);
        self.phase = rules::outcome_after(&self.board, mark);
        debug!(%player, next = %self.phase, "Move committed");

        if self.phase.is_terminal() {
            info!(outcome = %self.phase, "Game over");
        }

        let phase = self.phase;
        for listener in &mut self.listeners {
            listener(phase);
        }

        Ok(phase)
    }

    /// Converts signed coordinates to board indices.
    fn locate(&self, col: i64, row: i64) -> Result<(usize, usize), MoveError> {
        let size = self.board.size();
        let out_of_bounds = MoveError::OutOfBounds { col, row, size };
        let c = usize::try_from(col).map_err(|_| out_of_bounds)?;
        let r = usize::try_from(row).map_err(|_| out_of_bounds)?;
        if self.board.contains(c, r) {
            Ok((c, r))
        } else {
            Err(out_of_bounds)
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("phase", &self.phase)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.board, self.phase)
    }
}
