//! The action type and the ways it can be invalid.

use std::fmt;

/// One driving decision.
///
/// `increment` is the requested change of speed. `speed` is the speed the
/// move is made at; the engine overwrites it with the clamped result of
/// applying `increment`, so callers only need it right for
/// [`MovementSpace::contains`](crate::MovementSpace::contains) checks of
/// their own. `vertical` is a row delta and must not be positive: the
/// car never drives back towards the start line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    /// Requested change of speed.
    pub increment: i32,
    /// Speed the move is made at.
    pub speed: i32,
    /// Column delta; negative is left.
    pub horizontal: i32,
    /// Row delta; `<= 0`.
    pub vertical: i32,
}

impl Action {
    /// Build an action whose `speed` is the distance it covers.
    pub fn new(increment: i32, horizontal: i32, vertical: i32) -> Self {
        let mut action = Self {
            increment,
            speed: 0,
            horizontal,
            vertical,
        };
        action.speed = action.distance();
        action
    }

    /// Straight up the track by `distance` rows.
    pub fn forward(increment: i32, distance: i32) -> Self {
        Self::new(increment, 0, -distance)
    }

    /// L1 length of the move, saturating at `i32::MAX`.
    pub fn distance(&self) -> i32 {
        let d = self
            .horizontal
            .unsigned_abs()
            .saturating_add(self.vertical.unsigned_abs());
        i32::try_from(d).unwrap_or(i32::MAX)
    }

    /// The same action at a different speed.
    pub fn with_speed(self, speed: i32) -> Self {
        Self { speed, ..self }
    }

    /// The same movement with the speed increment stripped.
    pub fn without_increment(self) -> Self {
        Self {
            increment: 0,
            ..self
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "increment {:+} at speed {} (horizontal {:+}, vertical {:+})",
            self.increment, self.speed, self.horizontal, self.vertical
        )
    }
}

/// The first validity rule an [`Action`] breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionViolation {
    /// The increment is not one of the accepted increments.
    IncrementNotAccepted {
        /// The offending increment.
        increment: i32,
    },
    /// The speed lies outside `[min, max]`.
    SpeedOutOfRange {
        /// The offending speed.
        speed: i32,
        /// Lowest legal speed.
        min: i32,
        /// Highest legal speed.
        max: i32,
    },
    /// The move points back towards the start line.
    MovesBackwards {
        /// The offending vertical delta.
        vertical: i32,
    },
    /// The move does not spend exactly the speed budget.
    DistanceMismatch {
        /// L1 length of the move.
        distance: i32,
        /// Speed it should equal.
        speed: i32,
    },
}

impl fmt::Display for ActionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncrementNotAccepted { increment } => {
                write!(f, "speed increment {increment} is not accepted")
            }
            Self::SpeedOutOfRange { speed, min, max } => {
                write!(f, "speed {speed} outside [{min}, {max}]")
            }
            Self::MovesBackwards { vertical } => {
                write!(f, "vertical move {vertical} points backwards")
            }
            Self::DistanceMismatch { distance, speed } => {
                write!(f, "move covers {distance} cells but speed is {speed}")
            }
        }
    }
}

impl std::error::Error for ActionViolation {}
