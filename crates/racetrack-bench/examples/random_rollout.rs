//! Random rollouts on the sample track.
//!
//! Demonstrates: config → RaceTrackEnv → reset → sample/step until done →
//! print the final overlay. Rejected actions are logged through the
//! default fmt subscriber.

use racetrack_bench::reference_config;
use racetrack_engine::{RaceTrackEnv, StepStatus};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Race Track Random Rollout ===\n");

    let mut config = reference_config(42);
    config.keep_car_trace = true;
    let mut env = RaceTrackEnv::new(config).unwrap();

    let mut goals = 0;
    for episode in 0..10 {
        let start = env.reset().unwrap();
        let mut last = None;
        loop {
            let action = env.sample_action();
            let out = env.step(action).unwrap();
            let done = out.done;
            last = Some(out);
            if done {
                break;
            }
        }
        let out = last.unwrap();
        if out.info.status == StepStatus::GoalCrossed {
            goals += 1;
        }
        let stats = env.stats();
        println!(
            "  episode {:>2}: start={} end={} steps={:>3} reward={:>4} oil={} ({})",
            episode + 1,
            start,
            out.state,
            stats.steps,
            stats.total_reward,
            stats.oil_crossings,
            out.info.status,
        );
    }
    println!("\n{goals}/10 episodes reached the goal\n");

    println!("Trace of the last episode:");
    println!("{}", env.observation().to_ascii());
}
