//! Step diagnostics and episode bookkeeping.

use std::fmt;

use racetrack_core::Position;

use crate::crossing::CrossedCells;

/// How a step was resolved. The first matching rule wins, in the order
/// the variants are declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// A goal cell was crossed. Terminal, reward 0.
    GoalCrossed,
    /// The car left the grid or crossed an out-of-bounds cell. Terminal.
    OutOfTrack,
    /// An oil cell was crossed; the next step is a forced skid.
    OilCrossed,
    /// Nothing notable was crossed.
    RegularMovement,
}

impl StepStatus {
    /// The human-readable status tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalCrossed => "Goal crossed",
            Self::OutOfTrack => "Out of track",
            Self::OilCrossed => "Oil crossed",
            Self::RegularMovement => "Regular movement",
        }
    }

    /// The episode ending this status causes, if any.
    pub fn termination(self) -> Option<Termination> {
        match self {
            Self::GoalCrossed => Some(Termination::GoalReached),
            Self::OutOfTrack => Some(Termination::OutOfTrack),
            Self::OilCrossed | Self::RegularMovement => None,
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an episode ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The car crossed the goal line.
    GoalReached,
    /// The car left the track.
    OutOfTrack,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoalReached => f.write_str("goal reached"),
            Self::OutOfTrack => f.write_str("out of track"),
        }
    }
}

/// Where the engine is in its episode lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed but never reset.
    NeedsReset,
    /// An episode is in progress.
    Running,
    /// The episode has ended; only `reset` is allowed.
    Terminated(Termination),
}

/// Diagnostics for one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepInfo {
    /// Whether visited cells stay marked in the observation.
    pub keep_car_trace: bool,
    /// Whether the submitted action was replaced by an oil skid.
    pub action_overridden: bool,
    /// Speed increment actually applied.
    pub speed_increment: i32,
    /// Speed after the step.
    pub speed: i32,
    /// Position before the step.
    pub from: Position,
    /// Position after the step; may be off the grid.
    pub to: Position,
    /// Column delta of the move.
    pub horizontal: i32,
    /// Row delta of the move.
    pub vertical: i32,
    /// Cells swept by the move, row-major.
    pub crossed: CrossedCells,
    /// How the step was resolved.
    pub status: StepStatus,
}

/// Running totals for the current episode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EpisodeStats {
    /// Steps taken.
    pub steps: u32,
    /// Sum of rewards.
    pub total_reward: i32,
    /// Steps that crossed oil.
    pub oil_crossings: u32,
    /// Steps whose action was replaced by a skid.
    pub skids: u32,
}
