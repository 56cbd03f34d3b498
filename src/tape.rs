//! This module defines the `Tape` struct: a fixed-capacity, blank-initialized
//! sequence of symbols addressed by integer position.

use crate::types::{Direction, MachineError};

/// A fixed-capacity tape.
///
/// The cell count is set at construction and never changes; there is no
/// implicit growth. Every position handed to [`read`](Tape::read) and
/// [`write`](Tape::write) must come through [`offset`](Tape::offset), which is
/// the single place bounds are enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<char>,
    blank: char,
}

impl Tape {
    /// Creates a tape of `capacity` cells, all set to `blank`.
    pub fn new(capacity: usize, blank: char) -> Self {
        Self {
            cells: vec![blank; capacity],
            blank,
        }
    }

    /// Returns the symbol at `pos`.
    pub fn read(&self, pos: usize) -> char {
        self.cells[pos]
    }

    /// Writes `symbol` at `pos`.
    pub fn write(&mut self, pos: usize, symbol: char) {
        self.cells[pos] = symbol;
    }

    /// Computes the cell index reached by moving from `pos` in `direction`.
    ///
    /// The tape never reallocates, so a move that would leave
    /// `[0, capacity)` fails with [`MachineError::TapeOverrun`].
    pub fn offset(&self, pos: usize, direction: Direction) -> Result<usize, MachineError> {
        let next = pos as isize + direction.delta();
        if next < 0 || next as usize >= self.cells.len() {
            return Err(MachineError::TapeOverrun {
                position: pos,
                direction,
            });
        }
        Ok(next as usize)
    }

    /// The number of cells allocated at construction.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The blank symbol this tape was filled with.
    pub fn blank(&self) -> char {
        self.blank
    }

    /// The full cell contents in tape order, blanks included.
    pub fn symbols(&self) -> &[char] {
        &self.cells
    }
}
