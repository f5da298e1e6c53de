//! Cells swept by a single move.
//!
//! A move from `from` to `to` crosses every cell of the rectangle spanned by
//! the two endpoints, both included. Straight moves give a one-cell-wide
//! strip; diagonal moves give the whole bounding box, which includes cells
//! a true line through the grid would miss.
//!
//! Destinations past the grid are handled asymmetrically. Overshooting the
//! bottom or right edge clips the rectangle to the grid. A destination with
//! a negative row or column crosses nothing at all, so a move that leaves
//! the top of the track is judged out of track even if it passes a goal
//! cell on the way.

use racetrack_core::{Cell, Position, Track};
use smallvec::SmallVec;

/// Cells crossed by one move. Inline capacity covers a 4×4 box.
pub type CrossedCells = SmallVec<[Cell; 16]>;

/// The cells crossed moving from `from` (on the grid) to `to`, row-major.
pub fn crossed_cells(track: &Track, from: Position, to: Position) -> CrossedCells {
    let mut crossed = CrossedCells::new();
    if to.row < 0 || to.col < 0 {
        return crossed;
    }
    let last_row = track.rows() as i32 - 1;
    let last_col = track.cols() as i32 - 1;
    let rows = from.row.min(to.row)..=from.row.max(to.row).min(last_row);
    let cols = from.col.min(to.col)..=from.col.max(to.col).min(last_col);
    for row in rows {
        for col in cols.clone() {
            if let Some(cell) = track.get(Position::new(row, col)) {
                crossed.push(cell);
            }
        }
    }
    crossed
}
