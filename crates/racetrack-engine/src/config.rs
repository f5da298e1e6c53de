//! Environment configuration, validation, and error types.
//!
//! [`EnvConfig`] is the builder-input for [`RaceTrackEnv`](crate::RaceTrackEnv).
//! Every field has a default; [`validate()`](EnvConfig::validate) checks
//! the structural invariants and the constructor consumes the config.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use racetrack_core::presets::{sample_track, DEFAULT_SEED};
use racetrack_core::{Track, TrackError};
use racetrack_obs::ColorMap;
use racetrack_space::{MovementSpace, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building an environment.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The track grid is malformed.
    Track(TrackError),
    /// The speed range or increments are malformed.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track(e) => write!(f, "track: {e}"),
            Self::Space(e) => write!(f, "movement space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Track(e) => Some(e),
            Self::Space(e) => Some(e),
        }
    }
}

impl From<TrackError> for ConfigError {
    fn from(e: TrackError) -> Self {
        Self::Track(e)
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── EnvConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a race track environment.
#[derive(Clone, Debug)]
pub struct EnvConfig {
    /// The canonical track. Default: [`sample_track`] with [`DEFAULT_SEED`].
    pub track: Track,
    /// Highest speed. Default: 4.
    pub max_speed: i32,
    /// Lowest speed, and the speed every episode starts at. Default: 1.
    pub min_speed: i32,
    /// Legal speed increments. Default: `[-1, 0, 1]`.
    pub accepted_increments: Vec<i32>,
    /// Leave every visited cell marked in the observation. Default: false.
    pub keep_car_trace: bool,
    /// Pause after each human-mode frame. Default: 1s.
    pub render_delay: Duration,
    /// Tile colors for rendering.
    pub color_map: ColorMap,
    /// Seed for start positions and sampled actions. Default: 0.
    pub seed: u64,
}

impl EnvConfig {
    /// Default configuration on `track`.
    pub fn with_track(track: Track) -> Self {
        Self {
            track,
            max_speed: MovementSpace::DEFAULT_MAX_SPEED,
            min_speed: MovementSpace::DEFAULT_MIN_SPEED,
            accepted_increments: MovementSpace::DEFAULT_INCREMENTS.to_vec(),
            keep_car_trace: false,
            render_delay: Duration::from_secs(1),
            color_map: ColorMap::default(),
            seed: 0,
        }
    }

    /// Default configuration on a track given as rows of cell codes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Track`] for an empty track, ragged rows or a
    /// code outside `1..=4`.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ConfigError> {
        Ok(Self::with_track(Track::from_codes(rows)?))
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.movement_space().map(|_| ())
    }

    /// The movement space described by the speed settings.
    pub fn movement_space(&self) -> Result<MovementSpace, ConfigError> {
        Ok(MovementSpace::new(
            self.min_speed,
            self.max_speed,
            self.accepted_increments.iter().copied(),
        )?)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::with_track(sample_track(DEFAULT_SEED))
    }
}
