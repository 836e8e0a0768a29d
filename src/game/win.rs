//! Winning-line detection, centered on the most recently filled cell.
//!
//! A move can only create a line through the cell it just filled, so the
//! board is never rescanned: each of the four axes is walked outward from
//! that cell, giving O(run length) work per direction.

use super::{Board, Coord, Direction};

/// A maximal contiguous run of same-colored counters of winning length.
///
/// `cells` holds the full run ordered along the direction's `+` delta; a
/// five-in-a-row is reported as a line of 5, not truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub direction: Direction,
    pub cells: Vec<Coord>,
}

impl WinningLine {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Find every winning line passing through `origin`.
///
/// A single move can complete lines along more than one axis at once; all
/// qualifying directions are reported. Returns an empty vec when `origin`
/// is empty or no run reaches `number_to_win`.
pub fn winning_lines_through(
    board: &Board,
    origin: Coord,
    number_to_win: usize,
) -> Vec<WinningLine> {
    let counter = match board.get(origin.column, origin.row) {
        Some(counter) => counter,
        None => return Vec::new(),
    };

    let mut lines = Vec::new();
    for direction in Direction::ALL {
        let (dc, dr) = direction.delta();

        // Walk back to the start of the contiguous run, then collect
        // forward to its end. Board edges and non-matching cells stop the
        // walk in either orientation.
        let mut column = origin.column as i64;
        let mut row = origin.row as i64;
        while board.get_signed(column - dc, row - dr) == Some(counter) {
            column -= dc;
            row -= dr;
        }

        let mut cells = Vec::new();
        while board.get_signed(column, row) == Some(counter) {
            cells.push(Coord::new(column as usize, row as usize));
            column += dc;
            row += dr;
        }

        if cells.len() >= number_to_win {
            lines.push(WinningLine { direction, cells });
        }
    }
    lines
}
