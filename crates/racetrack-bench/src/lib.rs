//! Benchmark profiles and rollout helpers for the race track environment.
//!
//! - [`reference_config`]: the 100x50 sample track with default speeds
//! - [`run_episode`]: drive any [`Env`] with its own sampled actions

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use racetrack_core::presets::sample_track;
use racetrack_core::Env;
use racetrack_engine::EnvConfig;

/// Sample track generated from `seed`, default speeds, no render delay.
pub fn reference_config(seed: u64) -> EnvConfig {
    let mut config = EnvConfig::with_track(sample_track(seed));
    config.render_delay = Duration::ZERO;
    config.seed = seed;
    config
}

/// Summary of one finished rollout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rollout {
    /// Steps taken.
    pub steps: u32,
    /// Sum of rewards.
    pub total_reward: i32,
    /// Whether the episode ended on its own before `max_steps`.
    pub finished: bool,
}

/// Reset `env` and step it with sampled actions until it ends or
/// `max_steps` is reached.
pub fn run_episode<E>(env: &mut E, max_steps: u32) -> Result<Rollout, EpisodeError<E>>
where
    E: Env,
{
    env.reset().map_err(EpisodeError::Reset)?;
    let mut rollout = Rollout {
        steps: 0,
        total_reward: 0,
        finished: false,
    };
    while rollout.steps < max_steps {
        let action = env.sample_action();
        let out = env.step(action).map_err(EpisodeError::Step)?;
        rollout.steps += 1;
        rollout.total_reward += out.reward;
        if out.done {
            rollout.finished = true;
            break;
        }
    }
    Ok(rollout)
}

/// Failure inside [`run_episode`].
#[derive(Debug)]
pub enum EpisodeError<E: Env> {
    /// The environment could not be reset.
    Reset(E::ResetError),
    /// A step was rejected.
    Step(E::StepError),
}

impl<E: Env> std::fmt::Display for EpisodeError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reset(e) => write!(f, "reset failed: {e}"),
            Self::Step(e) => write!(f, "step failed: {e}"),
        }
    }
}
