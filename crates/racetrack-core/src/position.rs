//! Grid positions.

use std::fmt;

/// A `(row, col)` point on the track grid.
///
/// Rows grow downwards; the car starts on the last row and drives towards
/// row 0. Coordinates are signed because a move may carry the car past
/// the edge of the grid before the step is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, `0` at the top of the track.
    pub row: i32,
    /// Column index, `0` at the left of the track.
    pub col: i32,
}

impl Position {
    /// Create a position from its row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position displaced by `(d_row, d_col)`, saturating at the
    /// `i32` limits.
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
