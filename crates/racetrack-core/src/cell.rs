//! Cell codes for the canonical track and tiles for the observation overlay.

use std::fmt;

/// Classification of a single square of the canonical track.
///
/// The discriminants are the wire codes accepted by
/// [`Track::from_codes`](crate::Track::from_codes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Cell {
    /// Off the road. Crossing it ends the episode.
    OutOfBounds = 1,
    /// Drivable road.
    Track = 2,
    /// Drivable, but strips control of the car for one step.
    Oil = 3,
    /// Finish line.
    Goal = 4,
}

impl Cell {
    /// Every valid cell, in code order.
    pub const ALL: [Cell; 4] = [Cell::OutOfBounds, Cell::Track, Cell::Oil, Cell::Goal];

    /// The numeric wire code of this cell.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a wire code. Returns `None` for anything outside `1..=4`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Cell::OutOfBounds),
            2 => Some(Cell::Track),
            3 => Some(Cell::Oil),
            4 => Some(Cell::Goal),
            _ => None,
        }
    }

    /// Single-character form used by [`Track::parse_ascii`](crate::Track::parse_ascii).
    pub fn to_ascii(self) -> char {
        match self {
            Cell::OutOfBounds => '#',
            Cell::Track => '.',
            Cell::Oil => 'o',
            Cell::Goal => 'G',
        }
    }

    /// Inverse of [`to_ascii`](Cell::to_ascii). `O` is accepted for oil too.
    pub fn from_ascii(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Cell::OutOfBounds),
            '.' => Some(Cell::Track),
            'o' | 'O' => Some(Cell::Oil),
            'G' => Some(Cell::Goal),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Cell::from_code(code).ok_or(code)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::OutOfBounds => "out-of-bounds",
            Cell::Track => "track",
            Cell::Oil => "oil",
            Cell::Goal => "goal",
        };
        f.write_str(name)
    }
}

/// A square of the observation overlay: a canonical cell, or the car.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tile {
    /// See [`Cell::OutOfBounds`].
    OutOfBounds = 1,
    /// See [`Cell::Track`].
    Track = 2,
    /// See [`Cell::Oil`].
    Oil = 3,
    /// See [`Cell::Goal`].
    Goal = 4,
    /// The car (or, with trace-keeping, a square the car has visited).
    Car = 5,
}

impl Tile {
    /// Every tile, in code order.
    pub const ALL: [Tile; 5] = [
        Tile::OutOfBounds,
        Tile::Track,
        Tile::Oil,
        Tile::Goal,
        Tile::Car,
    ];

    /// The numeric code of this tile.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The canonical cell this tile shows, or `None` for [`Tile::Car`].
    pub fn as_cell(self) -> Option<Cell> {
        match self {
            Tile::OutOfBounds => Some(Cell::OutOfBounds),
            Tile::Track => Some(Cell::Track),
            Tile::Oil => Some(Cell::Oil),
            Tile::Goal => Some(Cell::Goal),
            Tile::Car => None,
        }
    }

    /// Single-character form; the car is drawn as `C`.
    pub fn to_ascii(self) -> char {
        match self.as_cell() {
            Some(cell) => cell.to_ascii(),
            None => 'C',
        }
    }
}

impl From<Cell> for Tile {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::OutOfBounds => Tile::OutOfBounds,
            Cell::Track => Tile::Track,
            Cell::Oil => Tile::Oil,
            Cell::Goal => Tile::Goal,
        }
    }
}
