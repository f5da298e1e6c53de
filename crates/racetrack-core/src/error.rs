//! Error types for track construction.

use std::error::Error;
use std::fmt;

/// Errors detected while building a [`Track`](crate::Track).
///
/// All of these are fatal: a malformed track is rejected before any
/// environment is constructed around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackError {
    /// The track has no rows.
    EmptyTrack,
    /// The first row has no cells, so the track has zero width.
    EmptyRow,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
    /// A cell holds a code outside the valid set.
    InvalidCell {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The code found there.
        code: u8,
    },
    /// A character in an ASCII track does not name a cell.
    InvalidAsciiCell {
        /// Row of the offending character (blank lines are not counted).
        row: usize,
        /// Column of the offending character.
        col: usize,
        /// The character found there.
        ch: char,
    },
    /// A dimension does not fit in the signed coordinate range.
    DimensionTooLarge {
        /// `"rows"` or `"cols"`.
        name: &'static str,
        /// The offending value.
        value: usize,
    },
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTrack => write!(f, "the track must have at least one row"),
            Self::EmptyRow => write!(f, "the track must have at least one column"),
            Self::RaggedRow { row, len, expected } => write!(
                f,
                "all rows must have the same width: row {row} has {len}, expected {expected}"
            ),
            Self::InvalidCell { row, col, code } => {
                write!(f, "cell ({row}, {col}) has invalid code {code}")
            }
            Self::InvalidAsciiCell { row, col, ch } => {
                write!(f, "cell ({row}, {col}) has invalid character {ch:?}")
            }
            Self::DimensionTooLarge { name, value } => {
                write!(f, "{name} = {value} exceeds i32::MAX")
            }
        }
    }
}

impl Error for TrackError {}
