//! Agent.
use super::{Env, Policy, Step};
use crate::record::Record;
use anyhow::Result;
use log::trace;
use std::path::Path;

/// Represents a policy that learns online from its own interaction with an environment.
///
/// Learning happens one transition at a time in [`Agent::observe`]; per-episode
/// bookkeeping (statistics, exploration schedules) happens in [`Agent::end_episode`].
/// [`Agent::train_episode`] ties the two together over one complete episode.
pub trait Agent<E: Env>: Policy<E> {
    /// Set the policy to training mode.
    fn train(&mut self);

    /// Set the policy to evaluation mode.
    fn eval(&mut self);

    /// Return if it is in training mode.
    fn is_train(&self) -> bool;

    /// Learns from the transition `(prev_obs, step.act, step.reward, step.obs)`.
    fn observe(&mut self, prev_obs: &E::Obs, step: &Step<E>) -> Result<()>;

    /// Called exactly once after the terminal step of a training episode.
    fn end_episode(&mut self, total_reward: f32, n_steps: usize);

    /// Returns aggregated statistics of training so far.
    ///
    /// The record is empty if no episode has been completed. This method must
    /// not change the state of the agent.
    fn stats_record(&self) -> Record;

    /// Runs a complete training episode on `env`.
    ///
    /// Resets the environment, then alternates [`Policy::sample`],
    /// [`Env::step`] and [`Agent::observe`] until the episode terminates.
    /// Returns the total reward and the number of steps of the episode.
    /// An error from the environment aborts the episode before
    /// [`Agent::end_episode`] is called.
    fn train_episode(&mut self, env: &mut E) -> Result<(f32, usize)> {
        let mut prev_obs = env.reset()?;
        let mut total_reward = 0f32;
        let mut n_steps = 0;

        loop {
            let act = self.sample(&prev_obs)?;
            let (step, _) = env.step(&act)?;
            self.observe(&prev_obs, &step)?;
            total_reward += step.reward;
            n_steps += 1;
            if step.is_done() {
                break;
            }
            prev_obs = step.obs;
        }

        trace!("Episode finished, {} steps, reward = {}", n_steps, total_reward);
        self.end_episode(total_reward, n_steps);
        Ok((total_reward, n_steps))
    }

    /// Save the parameters of the agent in the given directory.
    fn save_params(&self, path: &Path) -> Result<()>;

    /// Load the parameters of the agent from the given directory.
    fn load_params(&mut self, path: &Path) -> Result<()>;
}
