/// One of the four axes a winning line can lie along.
///
/// Deltas are expressed as `(d_column, d_row)` steps with row 0 at the
/// bottom of the board, so `Diagonal` rises left-to-right (`/`) and
/// `AntiDiagonal` falls left-to-right (`\`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Unit step `(d_column, d_row)` in this direction's `+` orientation
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}
