//! Racetrack: a grid race track environment for reinforcement learning.
//!
//! This is the facade crate that re-exports the public API of the
//! racetrack sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use racetrack::prelude::*;
//!
//! let track = Track::parse_ascii(
//!     "
//!     #GGG#
//!     #...#
//!     #.o.#
//!     #...#
//!     ",
//! )
//! .unwrap();
//! let mut config = EnvConfig::with_track(track);
//! config.seed = 7;
//! let mut env = RaceTrackEnv::new(config).unwrap();
//!
//! let start = env.reset().unwrap();
//! assert_eq!(start.row, 3);
//! loop {
//!     let action = env.sample_action();
//!     if env.step(action).unwrap().done {
//!         break;
//!     }
//! }
//! assert!(env.phase() != Phase::Running);
//! let frame = env.render(RenderMode::RgbArray);
//! assert_eq!(frame.dimensions(), (5, 4));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`track`] | `racetrack-core` | Cells, positions, tracks, the `Env` trait |
//! | [`space`] | `racetrack-space` | Actions and the movement space |
//! | [`obs`] | `racetrack-obs` | Observation overlay, colors, rendering |
//! | [`engine`] | `racetrack-engine` | Configuration and the environment itself |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Track grid, cell codes and positions (`racetrack-core`).
///
/// Also hosts the generic [`track::Env`] trait and the
/// [`track::presets::sample_track`] generator.
pub use racetrack_core as track;

/// Actions and their validity rules (`racetrack-space`).
pub use racetrack_space as space;

/// Observation overlay and frame rendering (`racetrack-obs`).
pub use racetrack_obs as obs;

/// Environment configuration and the transition engine (`racetrack-engine`).
pub use racetrack_engine as engine;

/// Common imports for typical use.
///
/// ```rust
/// use racetrack::prelude::*;
/// ```
pub mod prelude {
    // Track
    pub use racetrack_core::{Cell, Env, Position, Tile, Track, Transition};

    // Actions
    pub use racetrack_space::{Action, MovementSpace};

    // Rendering
    pub use racetrack_obs::{ColorMap, RenderMode, RgbImage};

    // Engine
    pub use racetrack_engine::{
        EnvConfig, Phase, RaceTrackEnv, StepInfo, StepOutcome, StepStatus, Termination,
    };

    // Errors
    pub use racetrack_core::TrackError;
    pub use racetrack_engine::{ConfigError, ResetError, StepError};
    pub use racetrack_obs::RenderError;
    pub use racetrack_space::{ActionViolation, SpaceError};
}
