//! Square board of observable cells.

use super::cell::Cell;
use super::rules;
use super::types::CellValue;
use tracing::instrument;

/// Default board edge length.
pub const DEFAULT_SIZE: usize = 3;

/// Largest accepted board edge length.
pub const MAX_SIZE: usize = 1024;

/// N×N tic-tac-toe board.
///
/// Cells are addressed by `(col, row)` with the origin at the top-left
/// and stored in row-major order. The size never changes after
/// construction.
#[derive(Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or above [`MAX_SIZE`].
    /// [`Game`](super::Game) validates sizes before building a board.
    #[instrument]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        assert!(size <= MAX_SIZE, "board size must be at most {MAX_SIZE}");
        Self {
            size,
            cells: (0..size * size).map(|_| Cell::default()).collect(),
        }
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether `(col, row)` lies on the board.
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.size && row < self.size
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        self.contains(col, row).then(|| row * self.size + col)
    }

    /// Gets the value at `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> Option<CellValue> {
        self.cell_at(col, row).map(Cell::get)
    }

    /// Gets the cell at `(col, row)`.
    pub fn cell_at(&self, col: usize, row: usize) -> Option<&Cell> {
        let i = self.index(col, row)?;
        self.cells.get(i)
    }

    /// Mutable access is reserved for the game engine.
    pub(crate) fn cell_at_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        let i = self.index(col, row)?;
        self.cells.get_mut(i)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Checks if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Renders the board one row per line, each line ending in `\n`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.cells.chunks(self.size) {
            for cell in row {
                out.push_str(&cell.get().to_string());
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
