//! Error types for movement space construction.

use std::fmt;

/// Errors arising from [`MovementSpace`](crate::MovementSpace) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// The minimum speed is negative.
    NegativeMinSpeed {
        /// The configured minimum.
        min_speed: i32,
    },
    /// The maximum speed is below the minimum.
    InvertedSpeedRange {
        /// The configured minimum.
        min_speed: i32,
        /// The configured maximum.
        max_speed: i32,
    },
    /// No speed increments were accepted.
    NoIncrements,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeMinSpeed { min_speed } => {
                write!(f, "min_speed must be >= 0, got {min_speed}")
            }
            Self::InvertedSpeedRange {
                min_speed,
                max_speed,
            } => write!(
                f,
                "max_speed {max_speed} is below min_speed {min_speed}"
            ),
            Self::NoIncrements => write!(f, "at least one speed increment must be accepted"),
        }
    }
}

impl std::error::Error for SpaceError {}
