//! Observable board cell.

use super::types::CellValue;
use tracing::{instrument, trace};

/// Callback invoked with the new value whenever a cell changes.
pub type CellListener = Box<dyn FnMut(CellValue)>;

/// A single board position.
///
/// Listeners are called in subscription order, and only when `set`
/// actually changes the stored value.
#[derive(Default)]
pub struct Cell {
    value: CellValue,
    listeners: Vec<CellListener>,
}

impl Cell {
    /// Creates a cell holding `value` with no listeners.
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    /// Returns the current value.
    pub fn get(&self) -> CellValue {
        self.value
    }

    /// Stores `value` and notifies listeners if it differs from the current one.
    #[instrument(skip(self), fields(old = ?self.value))]
    pub fn set(&mut self, value: CellValue) {
        if self.value == value {
            return;
        }
        self.value = value;
        trace!(listeners = self.listeners.len(), "Cell changed");
        for listener in &mut self.listeners {
            listener(value);
        }
    }

    /// Registers a listener for the lifetime of the cell.
    pub fn subscribe(&mut self, listener: impl FnMut(CellValue) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
