//! The canonical, immutable race track grid.

use crate::cell::Cell;
use crate::error::TrackError;
use crate::position::Position;
use std::fmt;

/// An immutable `rows × cols` grid of [`Cell`] codes, stored row-major.
///
/// Construction validates the grid (non-empty, rectangular, valid codes);
/// once built a `Track` is never mutated. Environments share it read-only
/// and keep their own overlay for the car.
///
/// # Examples
///
/// ```
/// use racetrack_core::{Cell, Position, Track};
///
/// let track = Track::parse_ascii("
///     GGG
///     .o.
///     ...
/// ").unwrap();
/// assert_eq!((track.rows(), track.cols()), (3, 3));
/// assert_eq!(track.get(Position::new(1, 1)), Some(Cell::Oil));
/// assert_eq!(track.get(Position::new(-1, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Track {
    /// Maximum dimension size: positions use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Build a track from rows of cells.
    ///
    /// Returns [`TrackError::EmptyTrack`] for no rows,
    /// [`TrackError::EmptyRow`] for a zero-width first row and
    /// [`TrackError::RaggedRow`] if any row's width differs from the first.
    pub fn new<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, TrackError> {
        let cols = check_shape(rows.iter().map(|r| r.as_ref().len()), rows.len())?;
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            cells.extend_from_slice(row.as_ref());
        }
        Ok(Self::from_parts(rows.len(), cols, cells))
    }

    /// Build a track from rows of numeric cell codes (`1..=4`).
    ///
    /// Rows are checked in order; within a row the width is checked before
    /// the codes, so the first error reported is the first one a row-major
    /// scan would meet.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, TrackError> {
        if rows.is_empty() {
            return Err(TrackError::EmptyTrack);
        }
        let cols = rows[0].as_ref().len();
        if cols == 0 {
            return Err(TrackError::EmptyRow);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(TrackError::RaggedRow {
                    row: row_idx,
                    len: row.len(),
                    expected: cols,
                });
            }
            for (col_idx, &code) in row.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or(TrackError::InvalidCell {
                    row: row_idx,
                    col: col_idx,
                    code,
                })?;
                cells.push(cell);
            }
        }
        check_dims(rows.len(), cols)?;
        Ok(Self::from_parts(rows.len(), cols, cells))
    }

    /// Parse a track drawn one row per line.
    ///
    /// `#` is out of bounds, `.` is track, `o` is oil and `G` is goal.
    /// Leading and trailing whitespace on each line is ignored, as are
    /// blank lines, so tracks can be written as indented string literals.
    pub fn parse_ascii(text: &str) -> Result<Self, TrackError> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row_idx = rows.len();
            let row = line
                .chars()
                .enumerate()
                .map(|(col, ch)| {
                    Cell::from_ascii(ch).ok_or(TrackError::InvalidAsciiCell {
                        row: row_idx,
                        col,
                        ch,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::new(&rows)
    }

    /// Assemble a track from already-validated parts.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self {
            rows: rows as u32,
            cols: cols as u32,
            cells,
        }
    }

    /// Number of rows (`H`).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (`W`).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cells of row `row`, or `None` if out of range.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows as usize {
            return None;
        }
        let cols = self.cols as usize;
        Some(&self.cells[row * cols..(row + 1) * cols])
    }

    /// Whether `pos` lies on the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.col >= 0 && (pos.row as u32) < self.rows && (pos.col as u32) < self.cols
    }

    /// Flat row-major index of `pos`, or `None` if off the grid.
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// The cell at `pos`, or `None` if off the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Index of the bottom row, where every episode starts.
    pub fn start_row(&self) -> i32 {
        self.rows as i32 - 1
    }

    /// Positions on the bottom row whose cell is [`Cell::Track`].
    ///
    /// These are the candidate start positions; the list may be empty.
    pub fn start_positions(&self) -> Vec<Position> {
        let row = self.start_row();
        self.row(row as usize)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Track)
            .map(|(col, _)| Position::new(row, col as i32))
            .collect()
    }

    /// How many cells of each kind the track holds, in [`Cell::ALL`] order.
    pub fn histogram(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for &cell in &self.cells {
            counts[cell.code() as usize - 1] += 1;
        }
        counts
    }
}

impl fmt::Display for Track {
    /// Writes the track in the format read by [`Track::parse_ascii`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            let line: String = row.iter().map(|c| c.to_ascii()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn check_shape(
    mut widths: impl Iterator<Item = usize>,
    row_count: usize,
) -> Result<usize, TrackError> {
    let cols = widths.next().ok_or(TrackError::EmptyTrack)?;
    if cols == 0 {
        return Err(TrackError::EmptyRow);
    }
    for (i, len) in widths.enumerate() {
        if len != cols {
            return Err(TrackError::RaggedRow {
                row: i + 1,
                len,
                expected: cols,
            });
        }
    }
    check_dims(row_count, cols)?;
    Ok(cols)
}

fn check_dims(rows: usize, cols: usize) -> Result<(), TrackError> {
    if rows > Track::MAX_DIM {
        return Err(TrackError::DimensionTooLarge {
            name: "rows",
            value: rows,
        });
    }
    if cols > Track::MAX_DIM {
        return Err(TrackError::DimensionTooLarge {
            name: "cols",
            value: cols,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn three_by_three() -> Track {
        Track::from_codes(&[[4u8, 4, 4], [2, 2, 2], [2, 2, 2]]).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn from_codes_builds_row_major_grid() {
        let t = three_by_three();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 3);
        assert_eq!(t.cell_count(), 9);
        assert_eq!(t.get(Position::new(0, 2)), Some(Cell::Goal));
        assert_eq!(t.get(Position::new(2, 0)), Some(Cell::Track));
    }

    #[test]
    fn empty_track_rejected() {
        let rows: Vec<Vec<u8>> = vec![];
        assert_eq!(Track::from_codes(&rows), Err(TrackError::EmptyTrack));
        let rows: Vec<Vec<Cell>> = vec![];
        assert_eq!(Track::new(&rows), Err(TrackError::EmptyTrack));
    }

    #[test]
    fn zero_width_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![]];
        assert_eq!(Track::from_codes(&rows), Err(TrackError::EmptyRow));
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows = vec![vec![2u8, 2, 2], vec![2, 2]];
        assert_eq!(
            Track::from_codes(&rows),
            Err(TrackError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn invalid_code_rejected_with_location() {
        let rows = vec![vec![2u8, 2], vec![2, 5]];
        assert_eq!(
            Track::from_codes(&rows),
            Err(TrackError::InvalidCell {
                row: 1,
                col: 1,
                code: 5
            })
        );
    }

    #[test]
    fn car_code_is_not_a_track_cell() {
        let err = Track::from_codes(&[[5u8]]).unwrap_err();
        assert!(matches!(err, TrackError::InvalidCell { code: 5, .. }));
    }

    #[test]
    fn single_cell_track_is_valid() {
        let t = Track::from_codes(&[[4u8]]).unwrap();
        assert_eq!(t.cell_count(), 1);
        assert!(t.start_positions().is_empty());
    }

    // ── ASCII ───────────────────────────────────────────────────

    #[test]
    fn parse_ascii_ignores_indentation_and_blank_lines() {
        let t = Track::parse_ascii(
            "
            #GG#

            #.o#
            #..#
            ",
        )
        .unwrap();
        assert_eq!((t.rows(), t.cols()), (3, 4));
        assert_eq!(t.get(Position::new(1, 2)), Some(Cell::Oil));
        assert_eq!(t.get(Position::new(2, 0)), Some(Cell::OutOfBounds));
    }

    #[test]
    fn parse_ascii_reports_bad_character() {
        let err = Track::parse_ascii("..\n.x").unwrap_err();
        assert_eq!(
            err,
            TrackError::InvalidAsciiCell {
                row: 1,
                col: 1,
                ch: 'x'
            }
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let t = Track::parse_ascii("#GG#\n#.o#\n#..#").unwrap();
        assert_eq!(Track::parse_ascii(&t.to_string()).unwrap(), t);
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn contains_checks_both_axes() {
        let t = three_by_three();
        assert!(t.contains(Position::new(0, 0)));
        assert!(t.contains(Position::new(2, 2)));
        assert!(!t.contains(Position::new(-1, 0)));
        assert!(!t.contains(Position::new(0, -1)));
        assert!(!t.contains(Position::new(3, 0)));
        assert!(!t.contains(Position::new(0, 3)));
    }

    #[test]
    fn start_positions_are_bottom_row_track_cells() {
        let t = Track::parse_ascii("GGGG\n....\n#.o.").unwrap();
        assert_eq!(
            t.start_positions(),
            vec![Position::new(2, 1), Position::new(2, 3)]
        );
    }

    #[test]
    fn histogram_counts_each_kind() {
        let t = Track::parse_ascii("#GG#\n#.o#").unwrap();
        assert_eq!(t.histogram(), [4, 1, 1, 2]);
    }

    proptest! {
        #[test]
        fn index_of_is_row_major(rows in 1usize..12, cols in 1usize..12, r in 0i32..12, c in 0i32..12) {
            let grid = vec![vec![2u8; cols]; rows];
            let t = Track::from_codes(&grid).unwrap();
            let pos = Position::new(r, c);
            if (r as usize) < rows && (c as usize) < cols {
                prop_assert_eq!(t.index_of(pos), Some(r as usize * cols + c as usize));
            } else {
                prop_assert_eq!(t.index_of(pos), None);
            }
        }
    }
}
