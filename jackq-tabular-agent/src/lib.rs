//! Tabular agents for environments with discrete observations and actions.
//!
//! The agents in this crate keep one value per state-action pair, so they
//! apply to any [`Env`](jackq_core::Env) whose observation implements
//! [`DiscreteObs`](jackq_core::DiscreteObs) and whose action implements
//! [`DiscreteAct`](jackq_core::DiscreteAct).
pub mod qlearning;
pub use qlearning::{
    EpisodeHistory, EpsilonGreedy, QLearning, QLearningConfig, QLearningStats, QTable,
};
