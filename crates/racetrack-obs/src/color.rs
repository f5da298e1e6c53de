//! Tile colors.

use racetrack_core::Tile;

/// An RGB triple.
pub type Rgb = [u8; 3];

/// The color each [`Tile`] is drawn with.
///
/// Every tile, including [`Tile::Car`], always has a color, so rendering
/// cannot fail on a missing entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorMap {
    colors: [Rgb; 5],
}

impl ColorMap {
    /// Default out-of-bounds color (grass green).
    pub const OUT_OF_BOUNDS: Rgb = [148, 203, 124];
    /// Default track color (asphalt grey).
    pub const TRACK: Rgb = [185, 185, 185];
    /// Default oil color (dark grey).
    pub const OIL: Rgb = [70, 70, 70];
    /// Default goal color (orange).
    pub const GOAL: Rgb = [225, 155, 51];
    /// Default car color (blue).
    pub const CAR: Rgb = [51, 155, 225];

    /// Build a map from one color per tile.
    pub fn new(out_of_bounds: Rgb, track: Rgb, oil: Rgb, goal: Rgb, car: Rgb) -> Self {
        Self {
            colors: [out_of_bounds, track, oil, goal, car],
        }
    }

    /// The color of `tile`.
    pub fn get(&self, tile: Tile) -> Rgb {
        self.colors[tile.code() as usize - 1]
    }

    /// Change the color of `tile`.
    pub fn set(&mut self, tile: Tile, rgb: Rgb) {
        self.colors[tile.code() as usize - 1] = rgb;
    }

    /// Builder form of [`set`](ColorMap::set).
    pub fn with(mut self, tile: Tile, rgb: Rgb) -> Self {
        self.set(tile, rgb);
        self
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::new(
            Self::OUT_OF_BOUNDS,
            Self::TRACK,
            Self::OIL,
            Self::GOAL,
            Self::CAR,
        )
    }
}
