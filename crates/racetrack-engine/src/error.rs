//! Runtime error types for the transition engine.

use std::error::Error;
use std::fmt;

use racetrack_core::Position;
use racetrack_space::{Action, ActionViolation};

use crate::info::Termination;

/// Errors from starting an episode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetError {
    /// The bottom row has no track cell to start on.
    NoStartCell,
    /// An explicit start position lies off the grid.
    StartOutOfBounds {
        /// The requested start.
        position: Position,
    },
}

impl fmt::Display for ResetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStartCell => write!(f, "the bottom row has no track cell to start on"),
            Self::StartOutOfBounds { position } => {
                write!(f, "start position {position} is off the track")
            }
        }
    }
}

impl Error for ResetError {}

/// Errors from [`RaceTrackEnv::step`](crate::RaceTrackEnv::step).
///
/// All of these are contract violations by the caller. Reaching the goal
/// or leaving the track is not an error; it is reported through the
/// step's `done` flag and status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// `step` was called before the first `reset`.
    NotReset,
    /// `step` was called after the episode ended.
    EpisodeTerminated {
        /// How the episode ended.
        reason: Termination,
    },
    /// The action, after the engine set its speed, is not legal.
    InvalidAction {
        /// The action as checked, with the engine-assigned speed.
        action: Action,
        /// The first rule it breaks.
        violation: ActionViolation,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReset => write!(f, "step called before reset"),
            Self::EpisodeTerminated { reason } => {
                write!(f, "step called after the episode ended ({reason})")
            }
            Self::InvalidAction { action, violation } => {
                write!(f, "invalid action [{action}]: {violation}")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidAction { violation, .. } => Some(violation),
            _ => None,
        }
    }
}
