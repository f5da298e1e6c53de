//! The observation overlay.

use racetrack_core::{Position, Tile, Track};

/// An owned `rows × cols` grid of [`Tile`]s: the track plus car markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    rows: u32,
    cols: u32,
    tiles: Vec<Tile>,
}

impl Observation {
    /// A copy of `track` with no car on it.
    pub fn from_track(track: &Track) -> Self {
        Self {
            rows: track.rows(),
            cols: track.cols(),
            tiles: track.cells().iter().map(|&c| Tile::from(c)).collect(),
        }
    }

    /// A copy of `track` with the car at `start`.
    pub fn with_car(track: &Track, start: Position) -> Self {
        let mut obs = Self::from_track(track);
        obs.mark_car(start);
        obs
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Row-major view of every tile.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        let in_bounds = pos.row >= 0
            && pos.col >= 0
            && (pos.row as u32) < self.rows
            && (pos.col as u32) < self.cols;
        in_bounds.then(|| pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// The tile at `pos`, or `None` if off the grid.
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.index_of(pos).map(|i| self.tiles[i])
    }

    /// Draw the car at `pos`. Returns `false` (and does nothing) off the grid.
    pub fn mark_car(&mut self, pos: Position) -> bool {
        match self.index_of(pos) {
            Some(i) => {
                self.tiles[i] = Tile::Car;
                true
            }
            None => false,
        }
    }

    /// Put `track`'s own cell back at `pos`. Returns `false` off the grid.
    pub fn restore(&mut self, track: &Track, pos: Position) -> bool {
        match (self.index_of(pos), track.get(pos)) {
            (Some(i), Some(cell)) => {
                self.tiles[i] = Tile::from(cell);
                true
            }
            _ => false,
        }
    }

    /// Every position currently showing the car, in row-major order.
    pub fn car_positions(&self) -> Vec<Position> {
        let cols = self.cols as usize;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t == Tile::Car)
            .map(|(i, _)| Position::new((i / cols) as i32, (i % cols) as i32))
            .collect()
    }

    /// Text form, one line per row; the car is `C`.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.tiles.len() + self.rows as usize);
        for row in self.tiles.chunks(self.cols as usize) {
            out.extend(row.iter().map(|t| t.to_ascii()));
            out.push('\n');
        }
        out
    }
}
