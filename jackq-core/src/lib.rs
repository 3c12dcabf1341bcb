#![warn(missing_docs)]
//! Core traits and the episodic training loop for tabular reinforcement learning.
//!
//! An environment implements [`Env`], an agent implements [`Agent`] (and thus
//! [`Policy`]), and [`Trainer`] drives the two through whole episodes,
//! reporting statistics into a [`Recorder`](record::Recorder).
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Agent, Configurable, DiscreteAct, DiscreteObs, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};

mod trainer;
pub use trainer::{StopSignal, Trainer, TrainerConfig};

#[cfg(test)]
mod dummy;
