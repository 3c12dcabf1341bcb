//! Environment.
use super::{Act, Info, Obs, Step};
use crate::record::Record;
use anyhow::Result;

/// Represents an environment, typically an episodic MDP.
///
/// An episode starts with [`Env::reset`] and ends at the first [`Step`] whose
/// `is_terminated` flag is set. Stepping a terminated episode must fail with
/// [`JackqError::EpisodeAlreadyTerminated`] until the next reset.
///
/// [`JackqError::EpisodeAlreadyTerminated`]: crate::error::JackqError::EpisodeAlreadyTerminated
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performes an environment step.
    ///
    /// The returned [`Record`] holds loggable values of the step.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;

    /// Starts a new episode and returns its initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Starts a new episode determined by the given index.
    ///
    /// The index is used in an arbitrary way, typically as an offset of the
    /// random seed so that evaluation episodes are reproducible. [`DefaultEvaluator`]
    /// calls this method with the episode number.
    ///
    /// [`DefaultEvaluator`]: crate::DefaultEvaluator
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs>;

    /// Returns `true` if the current episode has terminated.
    fn is_done(&self) -> bool;
}
