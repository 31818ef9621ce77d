//! Shared helpers for integration tests.

use strictly_tictactoe::{Game, GamePhase, MoveError};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber; `RUST_LOG=debug` shows engine logs.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Plays `moves` in order, failing the test on the first rejected move.
#[allow(dead_code)]
pub fn play(game: &mut Game, moves: &[(i64, i64)]) -> GamePhase {
    let mut phase = game.phase();
    for &(col, row) in moves {
        phase = game
            .make_move(col, row)
            .unwrap_or_else(|e: MoveError| panic!("move ({col}, {row}) rejected: {e}"));
    }
    phase
}
