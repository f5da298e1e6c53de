//! Integration test: full episodes on the fixture tracks.
//!
//! Each test drives a `RaceTrackEnv` through a scripted sequence of
//! actions and checks position, reward, termination and the observation
//! overlay after every step.

use std::time::Duration;

use proptest::prelude::*;

use racetrack_core::presets::sample_track;
use racetrack_core::{Cell, Position, Tile, Track};
use racetrack_engine::{
    EnvConfig, Phase, RaceTrackEnv, StepError, StepStatus, Termination, GOAL_REWARD, STEP_REWARD,
};
use racetrack_obs::{ColorMap, RenderMode};
use racetrack_space::{Action, ActionViolation};
use racetrack_test_utils::tracks;

fn env_on(track: Track) -> RaceTrackEnv {
    let mut config = EnvConfig::with_track(track);
    config.render_delay = Duration::ZERO;
    RaceTrackEnv::new(config).unwrap()
}

// ── Scripted episodes ────────────────────────────────────────────────

#[test]
fn regular_move_on_open_track() {
    let mut env = env_on(tracks::three_by_three());
    let start = env.reset_at(Position::new(2, 1)).unwrap();

    let out = env.step(Action::forward(0, 1)).unwrap();
    assert_eq!(out.state, Position::new(1, 1));
    assert_eq!(out.reward, STEP_REWARD);
    assert!(!out.done);
    assert_eq!(out.info.status, StepStatus::RegularMovement);
    assert_eq!(out.info.crossed.as_slice(), &[Cell::Track, Cell::Track]);
    assert_eq!(out.info.from, start);
    assert_eq!(out.info.speed, 1);
    assert!(!out.info.action_overridden);

    assert_eq!(env.observation().car_positions(), vec![out.state]);
    assert_eq!(env.observation().get(start), Some(Tile::Track));
}

#[test]
fn leaving_through_the_top_is_out_of_track() {
    let mut env = env_on(tracks::three_by_three());
    env.reset_at(Position::new(0, 1)).unwrap();

    let out = env.step(Action::forward(0, 1)).unwrap();
    assert_eq!(out.state, Position::new(-1, 1));
    assert!(out.info.crossed.is_empty());
    assert_eq!(out.info.status, StepStatus::OutOfTrack);
    assert_eq!(out.reward, STEP_REWARD);
    assert!(out.done);
    assert_eq!(env.phase(), Phase::Terminated(Termination::OutOfTrack));
    // The car left the grid, so nothing is marked.
    assert!(env.observation().car_positions().is_empty());
}

#[test]
fn overshooting_the_right_edge_is_out_of_track() {
    let mut env = env_on(tracks::three_by_three());
    env.reset_at(Position::new(2, 2)).unwrap();

    let out = env.step(Action::new(0, 1, 0)).unwrap();
    assert_eq!(out.state, Position::new(2, 3));
    assert_eq!(out.info.crossed.as_slice(), &[Cell::Track]);
    assert_eq!(out.info.status, StepStatus::OutOfTrack);
    assert!(out.done);
}

#[test]
fn standing_on_a_single_goal_cell() {
    let mut config = EnvConfig::with_track(tracks::single_goal());
    config.min_speed = 0;
    let mut env = RaceTrackEnv::new(config).unwrap();
    env.reset_at(Position::new(0, 0)).unwrap();
    assert_eq!(env.speed(), 0);

    let out = env.step(Action::new(0, 0, 0)).unwrap();
    assert_eq!(out.info.crossed.as_slice(), &[Cell::Goal]);
    assert_eq!(out.info.status, StepStatus::GoalCrossed);
    assert_eq!(out.reward, GOAL_REWARD);
    assert!(out.done);
    assert_eq!(env.phase(), Phase::Terminated(Termination::GoalReached));
}

#[test]
fn single_goal_cell_has_no_random_start() {
    let mut env = env_on(tracks::single_goal());
    assert!(env.reset().is_err());
}

#[test]
fn crossing_a_wall_marks_the_destination() {
    let mut env = env_on(tracks::inner_wall());
    env.reset_at(Position::new(3, 1)).unwrap();

    let out = env.step(Action::forward(0, 1)).unwrap();
    assert_eq!(out.info.status, StepStatus::OutOfTrack);
    assert!(out.done);
    assert_eq!(
        env.observation().car_positions(),
        vec![Position::new(2, 1)]
    );
}

#[test]
fn goal_is_reached_through_intermediate_cells() {
    let mut env = env_on(tracks::long_straight());
    env.reset_at(Position::new(8, 3)).unwrap();

    let script = [(1, 2), (1, 3), (0, 3)];
    let mut last = None;
    for (increment, distance) in script {
        last = Some(env.step(Action::forward(increment, distance)).unwrap());
    }
    let out = last.unwrap();
    assert_eq!(out.state, Position::new(0, 3));
    assert_eq!(out.info.status, StepStatus::GoalCrossed);
    assert_eq!(env.stats().steps, 3);
    assert_eq!(env.stats().total_reward, 2 * STEP_REWARD + GOAL_REWARD);
}

// ── Oil ──────────────────────────────────────────────────────────────

#[test]
fn oil_forces_a_skid_on_the_next_step() {
    let mut env = env_on(tracks::oil_strip());
    env.reset_at(Position::new(3, 2)).unwrap();

    let out = env.step(Action::forward(1, 2)).unwrap();
    assert_eq!(out.state, Position::new(1, 2));
    assert_eq!(out.info.status, StepStatus::OilCrossed);
    assert!(!out.done);
    assert!(env.skid_pending());

    // Whatever is submitted, the stored movement repeats at the same speed.
    let out = env.step(Action::new(-1, 1, 0)).unwrap();
    assert!(out.info.action_overridden);
    assert_eq!(out.info.speed_increment, 0);
    assert_eq!(out.info.speed, 2);
    assert_eq!((out.info.horizontal, out.info.vertical), (0, -2));
    assert_eq!(out.state, Position::new(-1, 2));
    assert_eq!(out.info.status, StepStatus::OutOfTrack);
    assert!(!env.skid_pending());

    let stats = env.stats();
    assert_eq!(stats.oil_crossings, 1);
    assert_eq!(stats.skids, 1);
}

#[test]
fn skid_replays_even_an_invalid_submission() {
    let mut env = env_on(tracks::oil_strip());
    env.reset_at(Position::new(2, 2)).unwrap();

    let out = env.step(Action::forward(0, 1)).unwrap();
    assert_eq!(out.info.status, StepStatus::OilCrossed);

    // Backwards would normally be rejected; the skid takes over instead.
    let out = env.step(Action::new(0, 0, 1)).unwrap();
    assert!(out.info.action_overridden);
    assert_eq!(out.state, Position::new(0, 2));
    assert_eq!(out.info.status, StepStatus::GoalCrossed);
}

#[test]
fn rejected_skid_returns_control_to_the_caller() {
    let mut config = EnvConfig::with_track(tracks::oil_strip());
    config.accepted_increments = vec![-1, 1];
    config.render_delay = Duration::ZERO;
    let mut env = RaceTrackEnv::new(config).unwrap();
    env.reset_at(Position::new(3, 2)).unwrap();

    let out = env.step(Action::forward(1, 2)).unwrap();
    assert_eq!(out.info.status, StepStatus::OilCrossed);

    // The replay has increment 0, which this space does not accept.
    let err = env.step(Action::forward(-1, 1)).unwrap_err();
    assert!(matches!(
        err,
        StepError::InvalidAction {
            violation: ActionViolation::IncrementNotAccepted { increment: 0 },
            ..
        }
    ));
    assert!(!env.skid_pending());
    assert_eq!(env.position(), Position::new(1, 2));

    let out = env.step(Action::forward(-1, 1)).unwrap();
    assert!(!out.info.action_overridden);
    assert_eq!(out.state, Position::new(0, 2));
    assert_eq!(out.info.status, StepStatus::GoalCrossed);
}

#[test]
fn reset_clears_a_pending_skid() {
    let mut env = env_on(tracks::oil_strip());
    env.reset_at(Position::new(2, 2)).unwrap();
    env.step(Action::forward(0, 1)).unwrap();
    assert!(env.skid_pending());

    env.reset_at(Position::new(3, 1)).unwrap();
    assert!(!env.skid_pending());
    let out = env.step(Action::forward(0, 1)).unwrap();
    assert!(!out.info.action_overridden);
}

// ── Misuse ───────────────────────────────────────────────────────────

#[test]
fn misuse_is_reported_not_panicked() {
    let mut env = env_on(tracks::three_by_three());
    assert_eq!(
        env.step(Action::forward(0, 1)).unwrap_err(),
        StepError::NotReset
    );

    env.reset_at(Position::new(2, 0)).unwrap();
    let err = env.step(Action::forward(2, 1)).unwrap_err();
    assert!(matches!(
        err,
        StepError::InvalidAction {
            violation: ActionViolation::IncrementNotAccepted { increment: 2 },
            ..
        }
    ));
    // Extreme values are rejected, not overflowed.
    let extreme = Action {
        increment: i32::MAX,
        speed: 1,
        horizontal: 0,
        vertical: -1,
    };
    assert!(matches!(
        env.step(extreme),
        Err(StepError::InvalidAction {
            violation: ActionViolation::IncrementNotAccepted { increment: i32::MAX },
            ..
        })
    ));
    let extreme = Action {
        increment: 0,
        speed: 1,
        horizontal: i32::MIN,
        vertical: i32::MIN,
    };
    assert!(matches!(
        env.step(extreme),
        Err(StepError::InvalidAction {
            violation: ActionViolation::DistanceMismatch {
                distance: i32::MAX,
                speed: 1
            },
            ..
        })
    ));
    assert_eq!(env.position(), Position::new(2, 0));

    // The episode is still usable.
    env.step(Action::forward(0, 1)).unwrap();
    env.step(Action::forward(0, 1)).unwrap();
    assert!(matches!(
        env.step(Action::forward(0, 1)),
        Err(StepError::EpisodeTerminated {
            reason: Termination::GoalReached
        })
    ));
}

// ── Reset and trace ──────────────────────────────────────────────────

#[test]
fn reset_after_play_matches_fresh_reset() {
    let start = Position::new(8, 2);

    let mut played = env_on(tracks::long_straight());
    played.reset().unwrap();
    played.step(Action::forward(1, 2)).unwrap();
    played.step(Action::new(0, 1, -1)).unwrap();
    played.reset_at(start).unwrap();

    let mut fresh = env_on(tracks::long_straight());
    fresh.reset_at(start).unwrap();

    assert_eq!(played.position(), fresh.position());
    assert_eq!(played.speed(), fresh.speed());
    assert_eq!(played.phase(), fresh.phase());
    assert_eq!(played.observation(), fresh.observation());
    assert_eq!(played.stats(), fresh.stats());
}

#[test]
fn rendered_trace_shows_every_visited_cell() {
    let mut config = EnvConfig::with_track(tracks::long_straight());
    config.keep_car_trace = true;
    let mut env = RaceTrackEnv::new(config).unwrap();
    env.reset_at(Position::new(8, 1)).unwrap();
    env.step(Action::forward(0, 1)).unwrap();
    env.step(Action::forward(1, 2)).unwrap();

    let frame = env.render(RenderMode::RgbArray);
    assert_eq!(frame.dimensions(), (7, 9));
    for row in [5, 7, 8] {
        assert_eq!(frame.get_pixel(1, row).0, ColorMap::CAR, "row {row}");
    }
    // Swept but not landed on.
    assert_eq!(frame.get_pixel(1, 6).0, ColorMap::TRACK);
    assert_eq!(frame.get_pixel(0, 0).0, ColorMap::OUT_OF_BOUNDS);
    assert_eq!(frame.get_pixel(1, 0).0, ColorMap::GOAL);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn reset_lands_on_bottom_row_track(track_seed in any::<u64>(), env_seed in any::<u64>()) {
        let track = sample_track(track_seed);
        let bottom = track.start_row();
        let mut config = EnvConfig::with_track(track);
        config.seed = env_seed;
        let mut env = RaceTrackEnv::new(config).unwrap();

        let start = env.reset().unwrap();
        prop_assert_eq!(start.row, bottom);
        prop_assert_eq!(env.track().get(start), Some(Cell::Track));
        prop_assert_eq!(env.observation().car_positions(), vec![start]);
        prop_assert_eq!(env.speed(), env.space().min_speed());
    }
}
