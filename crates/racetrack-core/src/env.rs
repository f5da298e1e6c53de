//! The reinforcement-learning environment contract.

/// What one call to [`Env::step`] reports back.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<S, I> {
    /// State after the step.
    pub state: S,
    /// Reward earned by the step.
    pub reward: i32,
    /// Whether the episode has ended.
    pub done: bool,
    /// Diagnostics describing how the step was resolved.
    pub info: I,
}

/// A resettable, steppable environment.
///
/// Callers [`reset`](Env::reset) once, then [`step`](Env::step) until a
/// transition reports `done`, then reset again. Implementations decide
/// what happens when that protocol is broken; the race track engine
/// reports it as an error.
pub trait Env {
    /// Action submitted to `step`.
    type Action;
    /// State returned by `reset` and `step`.
    type State;
    /// Per-step diagnostics.
    type Info;
    /// Error from `reset`.
    type ResetError: std::error::Error;
    /// Error from `step`.
    type StepError: std::error::Error;

    /// Start a new episode and return its initial state.
    fn reset(&mut self) -> Result<Self::State, Self::ResetError>;

    /// Apply `action` and advance one step.
    fn step(
        &mut self,
        action: Self::Action,
    ) -> Result<Transition<Self::State, Self::Info>, Self::StepError>;

    /// Draw a random legal action for the current state.
    fn sample_action(&mut self) -> Self::Action;
}
