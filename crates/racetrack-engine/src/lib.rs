//! Transition engine for the race track environment.
//!
//! [`RaceTrackEnv`] owns the episode state (position, speed, pending oil
//! skid, observation overlay) and advances it one [`Action`] at a time.
//! Each step sweeps the cells between the old and new position and
//! resolves the outcome in a fixed order: goal, out of track, oil,
//! regular movement.
//!
//! [`Action`]: racetrack_space::Action

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod crossing;
pub mod env;
pub mod error;
pub mod info;

pub use config::{ConfigError, EnvConfig};
pub use crossing::{crossed_cells, CrossedCells};
pub use env::{RaceTrackEnv, StepOutcome, GOAL_REWARD, STEP_REWARD};
pub use error::{ResetError, StepError};
pub use info::{EpisodeStats, Phase, StepInfo, StepStatus, Termination};
