//! Game loop shared by every front end.
//!
//! A front end implements [`GameView`] to render the game, read moves
//! and show errors; [`Session`] drives the loop until the game ends.

use crate::games::tictactoe::{Game, GamePhase, Move, MoveError};
use anyhow::Result;
use tracing::{debug, info, instrument, warn};

/// I/O side of a game: console, GUI or a scripted test double.
pub trait GameView {
    /// Shows the current board and phase.
    fn render(&mut self, game: &Game);

    /// Reads the next move.
    ///
    /// An error ends the session (for example, input was closed).
    fn input_move(&mut self) -> Result<Move>;

    /// Shows a rejected move to the player.
    fn report_error(&mut self, error: &MoveError);
}

/// Plays one game through a [`GameView`].
#[derive(Debug)]
pub struct Session<V> {
    game: Game,
    view: V,
}

impl<V: GameView> Session<V> {
    /// Creates a session around an existing game.
    pub fn new(game: Game, view: V) -> Self {
        Self { game, view }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the loop until the game is over, returning the final phase.
    ///
    /// The view renders before every prompt and once more at the end.
    /// Rejected moves are reported to the view and the player is asked
    /// again.
    ///
    /// # Errors
    ///
    /// Returns the error from [`GameView::input_move`] if input fails.
    #[instrument(skip(self), fields(size = self.game.size()))]
    pub fn run(&mut self) -> Result<GamePhase> {
        info!("Starting game session");

        while !self.game.is_over() {
            self.view.render(&self.game);
            let mv = self.view.input_move()?;
            debug!(%mv, "Move received");
            if let Err(e) = self.game.apply(mv) {
                warn!(error = %e, "Move rejected");
                self.view.report_error(&e);
            }
        }

        self.view.render(&self.game);
        let phase = self.game.phase();
        info!(outcome = %phase, "Session finished");
        Ok(phase)
    }

    /// Splits the session back into its game and view.
    pub fn into_parts(self) -> (Game, V) {
        (self.game, self.view)
    }
}
