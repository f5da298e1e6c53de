//! Built-in tracks.
//!
//! The environment's default track is [`sample_track`]: a 100 × 50 straight
//! with a 34-column road, a goal line across the top of the road, and oil
//! patches scattered over roughly a tenth of the road surface.
//!
//! Generation is deterministic: the oil layout depends only on the seed,
//! which is drawn through a [`ChaCha8Rng`] rather than any global source.

use crate::cell::Cell;
use crate::track::Track;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Rows in the sample track.
pub const SAMPLE_ROWS: usize = 100;
/// Columns in the sample track.
pub const SAMPLE_COLS: usize = 50;
/// First road column (inclusive).
pub const SAMPLE_ROAD_START: usize = 11;
/// Last road column (inclusive).
pub const SAMPLE_ROAD_END: usize = 44;
/// Probability that a road cell below the goal line is oil.
pub const SAMPLE_OIL_PROBABILITY: f64 = 0.1;
/// Seed used by the default environment configuration.
pub const DEFAULT_SEED: u64 = 0;

/// Generate the sample track for `seed`.
pub fn sample_track(seed: u64) -> Track {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells = Vec::with_capacity(SAMPLE_ROWS * SAMPLE_COLS);
    for row in 0..SAMPLE_ROWS {
        for col in 0..SAMPLE_COLS {
            let on_road = (SAMPLE_ROAD_START..=SAMPLE_ROAD_END).contains(&col);
            let cell = match (on_road, row) {
                (false, _) => Cell::OutOfBounds,
                (true, 0) => Cell::Goal,
                (true, _) if rng.gen_bool(SAMPLE_OIL_PROBABILITY) => Cell::Oil,
                (true, _) => Cell::Track,
            };
            cells.push(cell);
        }
    }
    Track::from_parts(SAMPLE_ROWS, SAMPLE_COLS, cells)
}
