//! The space of legal actions.

use crate::action::{Action, ActionViolation};
use crate::error::SpaceError;
use rand::Rng;
use smallvec::SmallVec;

/// Legal speed range and speed increments for a car.
///
/// # Examples
///
/// ```
/// use racetrack_space::{Action, MovementSpace};
///
/// let space = MovementSpace::default(); // speeds 1..=4, increments {-1, 0, 1}
/// assert!(space.contains(&Action::new(0, 1, -1)));
/// assert!(!space.contains(&Action::new(2, 0, -1))); // increment not accepted
/// assert!(!space.contains(&Action::new(0, 0, 1)));  // backwards
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovementSpace {
    min_speed: i32,
    max_speed: i32,
    increments: SmallVec<[i32; 4]>,
}

impl MovementSpace {
    /// Default highest speed.
    pub const DEFAULT_MAX_SPEED: i32 = 4;
    /// Default lowest speed.
    pub const DEFAULT_MIN_SPEED: i32 = 1;
    /// Default speed increments.
    pub const DEFAULT_INCREMENTS: [i32; 3] = [-1, 0, 1];

    /// Create a space with speeds in `[min_speed, max_speed]`.
    ///
    /// Sampling picks uniformly over `increments` as given, so a repeated
    /// increment is proportionally more likely.
    pub fn new(
        min_speed: i32,
        max_speed: i32,
        increments: impl IntoIterator<Item = i32>,
    ) -> Result<Self, SpaceError> {
        if min_speed < 0 {
            return Err(SpaceError::NegativeMinSpeed { min_speed });
        }
        if max_speed < min_speed {
            return Err(SpaceError::InvertedSpeedRange {
                min_speed,
                max_speed,
            });
        }
        let increments: SmallVec<[i32; 4]> = increments.into_iter().collect();
        if increments.is_empty() {
            return Err(SpaceError::NoIncrements);
        }
        Ok(Self {
            min_speed,
            max_speed,
            increments,
        })
    }

    /// Lowest legal speed.
    pub fn min_speed(&self) -> i32 {
        self.min_speed
    }

    /// Highest legal speed.
    pub fn max_speed(&self) -> i32 {
        self.max_speed
    }

    /// Accepted speed increments.
    pub fn increments(&self) -> &[i32] {
        &self.increments
    }

    /// Clamp `speed` into `[min_speed, max_speed]`.
    pub fn clamp_speed(&self, speed: i32) -> i32 {
        speed.clamp(self.min_speed, self.max_speed)
    }

    /// Draw a random legal action for a car currently at `current_speed`.
    ///
    /// The increment is uniform over the accepted increments. The clamped
    /// new speed is split between the axes: the vertical share is uniform
    /// in `[0, speed]`, the horizontal share takes the rest and points left
    /// or right with equal probability.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, current_speed: i32) -> Action {
        let increment = self.increments[rng.gen_range(0..self.increments.len())];
        let speed = self.clamp_speed(current_speed + increment);
        let vertical = rng.gen_range(0..=speed);
        let sign = if rng.gen_bool(0.5) { 1 } else { -1 };
        Action {
            increment,
            speed,
            horizontal: (speed - vertical) * sign,
            vertical: -vertical,
        }
    }

    /// Whether `action` satisfies every validity rule.
    pub fn contains(&self, action: &Action) -> bool {
        self.check(action).is_ok()
    }

    /// Check `action`, reporting the first rule it breaks.
    ///
    /// Rules are checked in order: accepted increment, speed range,
    /// forward-only movement, exact speed budget.
    pub fn check(&self, action: &Action) -> Result<(), ActionViolation> {
        if !self.increments.contains(&action.increment) {
            return Err(ActionViolation::IncrementNotAccepted {
                increment: action.increment,
            });
        }
        if action.speed < self.min_speed || action.speed > self.max_speed {
            return Err(ActionViolation::SpeedOutOfRange {
                speed: action.speed,
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if action.vertical > 0 {
            return Err(ActionViolation::MovesBackwards {
                vertical: action.vertical,
            });
        }
        if action.distance() != action.speed {
            return Err(ActionViolation::DistanceMismatch {
                distance: action.distance(),
                speed: action.speed,
            });
        }
        Ok(())
    }
}

impl Default for MovementSpace {
    fn default() -> Self {
        Self {
            min_speed: Self::DEFAULT_MIN_SPEED,
            max_speed: Self::DEFAULT_MAX_SPEED,
            increments: SmallVec::from_slice(&Self::DEFAULT_INCREMENTS),
        }
    }
}
