//! The race track environment.
//!
//! [`RaceTrackEnv`] is the user-facing API. After [`reset()`](RaceTrackEnv::reset)
//! each call to [`step()`](RaceTrackEnv::step) applies one action and
//! returns the new position, the reward, whether the episode is over and
//! a [`StepInfo`] describing how the move was resolved.
//!
//! # Ownership model
//!
//! The environment owns its track, its observation overlay and its RNG.
//! Nothing is shared between instances, so `RaceTrackEnv` is [`Send`];
//! all mutating methods take `&mut self`.
//!
//! # Oil
//!
//! Crossing oil stores the action that crossed it. The next `step` ignores
//! whatever the caller submits and replays the stored movement with a
//! speed increment of zero, then control returns to the caller.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use racetrack_core::{Cell, Env, Position, Track, Transition};
use racetrack_obs::{Observation, RenderError, RenderMode, Renderer, RgbImage};
use racetrack_space::{Action, MovementSpace};

use crate::config::{ConfigError, EnvConfig};
use crate::crossing::crossed_cells;
use crate::error::{ResetError, StepError};
use crate::info::{EpisodeStats, Phase, StepInfo, StepStatus};

// Compile-time assertion: RaceTrackEnv is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<RaceTrackEnv>();
    }
};

/// Reward for every step that does not reach the goal.
pub const STEP_REWARD: i32 = -1;
/// Reward for the step that reaches the goal.
pub const GOAL_REWARD: i32 = 0;

/// Result of a successful [`RaceTrackEnv::step()`] call.
pub type StepOutcome = Transition<Position, StepInfo>;

// ── RaceTrackEnv ────────────────────────────────────────────────

/// A car on a grid race track.
///
/// # Example
///
/// ```
/// use racetrack_core::Track;
/// use racetrack_engine::{EnvConfig, RaceTrackEnv, StepStatus};
/// use racetrack_space::Action;
///
/// let track = Track::parse_ascii("GGG\n...\n...").unwrap();
/// let mut env = RaceTrackEnv::new(EnvConfig::with_track(track)).unwrap();
/// let start = env.reset().unwrap();
/// assert_eq!(start.row, 2);
///
/// let out = env.step(Action::forward(0, 1)).unwrap();
/// assert_eq!(out.info.status, StepStatus::RegularMovement);
/// assert_eq!(out.reward, -1);
/// assert!(!out.done);
/// ```
pub struct RaceTrackEnv {
    track: Track,
    space: MovementSpace,
    renderer: Renderer,
    keep_car_trace: bool,
    seed: u64,
    rng: ChaCha8Rng,
    position: Position,
    speed: i32,
    skid: Option<Action>,
    observation: Observation,
    phase: Phase,
    stats: EpisodeStats,
}

impl RaceTrackEnv {
    /// Create an environment from an [`EnvConfig`].
    ///
    /// The environment starts in [`Phase::NeedsReset`]; call
    /// [`reset()`](Self::reset) before stepping.
    pub fn new(config: EnvConfig) -> Result<Self, ConfigError> {
        let space = config.movement_space()?;
        let observation = Observation::from_track(&config.track);
        let position = Position::new(config.track.start_row(), 0);
        Ok(Self {
            space,
            renderer: Renderer::new(config.color_map, config.render_delay),
            keep_car_trace: config.keep_car_trace,
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            position,
            speed: config.min_speed,
            skid: None,
            observation,
            phase: Phase::NeedsReset,
            stats: EpisodeStats::default(),
            track: config.track,
        })
    }

    /// Start a new episode on a random track cell of the bottom row.
    ///
    /// Speed returns to the minimum, any pending skid is dropped and the
    /// observation is redrawn with only the start cell marked.
    pub fn reset(&mut self) -> Result<Position, ResetError> {
        let start = *self
            .track
            .start_positions()
            .choose(&mut self.rng)
            .ok_or(ResetError::NoStartCell)?;
        self.begin_episode(start);
        Ok(start)
    }

    /// Start a new episode at `start`, which may be any cell on the grid.
    pub fn reset_at(&mut self, start: Position) -> Result<Position, ResetError> {
        if !self.track.contains(start) {
            return Err(ResetError::StartOutOfBounds { position: start });
        }
        self.begin_episode(start);
        Ok(start)
    }

    fn begin_episode(&mut self, start: Position) {
        self.position = start;
        self.speed = self.space.min_speed();
        self.skid = None;
        self.observation = Observation::with_car(&self.track, start);
        self.phase = Phase::Running;
        self.stats = EpisodeStats::default();
        tracing::debug!(start = %start, speed = self.speed, "episode reset");
    }

    /// Reseed the RNG used for start positions and sampled actions.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Apply `action` and advance one step.
    ///
    /// The engine sets the action's speed to the clamped result of
    /// `current speed + increment` before checking it. A rejected action
    /// leaves the environment as it was, except that a pending skid is
    /// spent: the next call uses the caller's action again.
    ///
    /// # Errors
    ///
    /// [`StepError::NotReset`] before the first reset,
    /// [`StepError::EpisodeTerminated`] once the episode is over, and
    /// [`StepError::InvalidAction`] if the action breaks a validity rule.
    pub fn step(&mut self, action: Action) -> Result<StepOutcome, StepError> {
        match self.phase {
            Phase::NeedsReset => return Err(StepError::NotReset),
            Phase::Terminated(reason) => return Err(StepError::EpisodeTerminated { reason }),
            Phase::Running => {}
        }

        // A skid is consumed even if its replay is rejected.
        let skid = self.skid.take();
        let overridden = skid.is_some();
        let action = match skid {
            Some(stored) => stored.without_increment(),
            None => action,
        };
        let speed = self
            .space
            .clamp_speed(self.speed.saturating_add(action.increment));
        let action = action.with_speed(speed);
        if let Err(violation) = self.space.check(&action) {
            tracing::warn!(action = %action, violation = %violation, "rejected action");
            return Err(StepError::InvalidAction { action, violation });
        }

        if !self.keep_car_trace {
            self.observation.restore(&self.track, self.position);
        }

        let from = self.position;
        let to = from.offset(action.vertical, action.horizontal);
        let crossed = crossed_cells(&self.track, from, to);
        tracing::trace!(from = %from, to = %to, crossed = ?crossed, "swept cells");

        let on_grid = self.track.contains(to);
        let status = if crossed.contains(&Cell::Goal) {
            StepStatus::GoalCrossed
        } else if !on_grid || crossed.contains(&Cell::OutOfBounds) {
            if on_grid {
                self.observation.mark_car(to);
            }
            StepStatus::OutOfTrack
        } else if crossed.contains(&Cell::Oil) {
            self.observation.mark_car(to);
            self.skid = Some(action);
            StepStatus::OilCrossed
        } else {
            self.observation.mark_car(to);
            StepStatus::RegularMovement
        };
        let reward = match status {
            StepStatus::GoalCrossed => GOAL_REWARD,
            _ => STEP_REWARD,
        };

        self.position = to;
        self.speed = speed;
        if let Some(reason) = status.termination() {
            self.phase = Phase::Terminated(reason);
        }
        self.stats.steps += 1;
        self.stats.total_reward += reward;
        if status == StepStatus::OilCrossed {
            self.stats.oil_crossings += 1;
        }
        if overridden {
            self.stats.skids += 1;
        }
        tracing::debug!(
            status = %status,
            from = %from,
            to = %to,
            speed,
            reward,
            skid = overridden,
            "step"
        );

        Ok(Transition {
            state: to,
            reward,
            done: status.termination().is_some(),
            info: StepInfo {
                keep_car_trace: self.keep_car_trace,
                action_overridden: overridden,
                speed_increment: action.increment,
                speed,
                from,
                to,
                horizontal: action.horizontal,
                vertical: action.vertical,
                crossed,
                status,
            },
        })
    }

    /// Draw a random legal action at the current speed.
    ///
    /// Sampled actions are always legal, but a pending oil skid will
    /// still override them on the next step.
    pub fn sample_action(&mut self) -> Action {
        self.space.sample(&mut self.rng, self.speed)
    }

    /// Draw the current observation.
    ///
    /// In [`RenderMode::Human`] this blocks for the configured render
    /// delay; keep it off any hot path.
    pub fn render(&self, mode: RenderMode) -> RgbImage {
        self.renderer.render(&self.observation, mode)
    }

    /// [`render()`](Self::render) with the mode given by name
    /// (`"human"` or `"rgb_array"`).
    pub fn render_named(&self, mode: &str) -> Result<RgbImage, RenderError> {
        Ok(self.render(mode.parse()?))
    }

    /// Current position. Off the grid after leaving the track.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current speed.
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the next step will be an oil skid.
    pub fn skid_pending(&self) -> bool {
        self.skid.is_some()
    }

    /// Totals for the current episode.
    pub fn stats(&self) -> EpisodeStats {
        self.stats
    }

    /// The canonical track.
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// The movement space actions are checked against.
    pub fn space(&self) -> &MovementSpace {
        &self.space
    }

    /// The observation overlay.
    pub fn observation(&self) -> &Observation {
        &self.observation
    }

    /// Whether visited cells stay marked.
    pub fn keeps_car_trace(&self) -> bool {
        self.keep_car_trace
    }

    /// The current RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Env for RaceTrackEnv {
    type Action = Action;
    type State = Position;
    type Info = StepInfo;
    type ResetError = ResetError;
    type StepError = StepError;

    fn reset(&mut self) -> Result<Position, ResetError> {
        RaceTrackEnv::reset(self)
    }

    fn step(&mut self, action: Action) -> Result<StepOutcome, StepError> {
        RaceTrackEnv::step(self, action)
    }

    fn sample_action(&mut self) -> Action {
        RaceTrackEnv::sample_action(self)
    }
}

impl std::fmt::Debug for RaceTrackEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RaceTrackEnv")
            .field("rows", &self.track.rows())
            .field("cols", &self.track.cols())
            .field("position", &self.position)
            .field("speed", &self.speed)
            .field("phase", &self.phase)
            .field("skid_pending", &self.skid.is_some())
            .field("seed", &self.seed)
            .finish()
    }
}
