use std::fmt;

use super::Counter;
use crate::error::GameError;

/// Character used for an empty cell in the textual rendering
pub const EMPTY_CHAR: char = '.';

/// A board coordinate.
///
/// Columns run left to right, rows run bottom to top: `row == 0` is where a
/// counter dropped into an empty column lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub column: usize,
    pub row: usize,
}

impl Coord {
    pub fn new(column: usize, row: usize) -> Self {
        Coord { column, row }
    }
}

/// The playing grid, with column-fill semantics.
///
/// Storage is column-major: `cells[column][row]`. Within a column the
/// occupied cells always form a contiguous run from row 0 upward, because
/// the only mutation is [`Board::place`], which fills the lowest empty row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<Vec<Option<Counter>>>,
    /// Landing row for the next counter per column, `None` when full
    next_available: Vec<Option<usize>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(columns: usize, rows: usize) -> Result<Self, GameError> {
        if columns == 0 || rows == 0 {
            return Err(GameError::InvalidDimensions { columns, rows });
        }
        Ok(Board {
            columns,
            rows,
            cells: vec![vec![None; rows]; columns],
            next_available: vec![Some(0); columns],
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the counter at a coordinate, or `None` if the cell is empty.
    /// Out-of-range coordinates also return `None`, so directional walks
    /// terminate at the board edges without special casing.
    pub fn get(&self, column: usize, row: usize) -> Option<Counter> {
        self.cells.get(column)?.get(row).copied().flatten()
    }

    /// Like [`Board::get`] for signed coordinates; used by win detection,
    /// which steps off the board edges while walking
    pub(crate) fn get_signed(&self, column: i64, row: i64) -> Option<Counter> {
        if column < 0 || row < 0 {
            return None;
        }
        self.get(column as usize, row as usize)
    }

    /// The row where the next counter dropped into `column` would land, or
    /// `None` when the column is full (or does not exist)
    pub fn next_available_row(&self, column: usize) -> Option<usize> {
        self.next_available.get(column).copied().flatten()
    }

    /// Check if a column can accept another counter
    pub fn is_column_playable(&self, column: usize) -> bool {
        self.next_available_row(column).is_some()
    }

    /// Drop a counter into a column, returning the coordinate where it
    /// landed. Fails without mutating anything if the column does not exist
    /// or is full.
    pub fn place(&mut self, column: usize, counter: Counter) -> Result<Coord, GameError> {
        if column >= self.columns {
            return Err(GameError::NoSuchColumn(column));
        }
        let row = self.next_available[column].ok_or(GameError::ColumnFull(column))?;

        self.cells[column][row] = Some(counter);
        self.next_available[column] = if row + 1 < self.rows {
            Some(row + 1)
        } else {
            None
        };
        Ok(Coord::new(column, row))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.next_available.iter().all(Option::is_none)
    }
}

/// Deterministic textual rendering: one line per row, top row first, empty
/// cells as [`EMPTY_CHAR`] and counters as their [`Counter::to_char`] form.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for column in 0..self.columns {
                let c = match self.get(column, row) {
                    Some(counter) => counter.to_char(),
                    None => EMPTY_CHAR,
                };
                write!(f, "{c}")?;
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
