//! Configuration of Q-learning agent.
use anyhow::Result;
use jackq_core::error::JackqError;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

fn default_history_window() -> usize {
    1000
}

fn default_seed() -> u64 {
    42
}

fn default_train() -> bool {
    true
}

/// Constructs [QLearning](super::QLearning).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct QLearningConfig {
    pub(super) num_states: usize,
    pub(super) num_actions: usize,
    pub(super) alpha: f32,
    pub(super) gamma: f32,
    pub(super) epsilon: f32,
    pub(super) epsilon_decay: f32,
    pub(super) epsilon_min: f32,
    #[serde(default = "default_history_window")]
    pub(super) history_window: usize,
    #[serde(default = "default_seed")]
    pub(super) seed: u64,
    #[serde(default = "default_train")]
    pub(super) train: bool,
}

impl Default for QLearningConfig {
    /// Hyperparameters for the blackjack task.
    fn default() -> Self {
        Self {
            num_states: 18,
            num_actions: 2,
            alpha: 0.1,
            gamma: 0.95,
            epsilon: 1.0,
            epsilon_decay: 0.995,
            epsilon_min: 0.01,
            history_window: default_history_window(),
            seed: default_seed(),
            train: default_train(),
        }
    }
}

impl QLearningConfig {
    /// Sets the number of states.
    pub fn num_states(mut self, v: usize) -> Self {
        self.num_states = v;
        self
    }

    /// Sets the number of actions.
    pub fn num_actions(mut self, v: usize) -> Self {
        self.num_actions = v;
        self
    }

    /// Learning rate.
    pub fn alpha(mut self, v: f32) -> Self {
        self.alpha = v;
        self
    }

    /// Discount factor.
    pub fn gamma(mut self, v: f32) -> Self {
        self.gamma = v;
        self
    }

    /// Initial exploration rate.
    pub fn epsilon(mut self, v: f32) -> Self {
        self.epsilon = v;
        self
    }

    /// Per-episode decay factor of the exploration rate.
    pub fn epsilon_decay(mut self, v: f32) -> Self {
        self.epsilon_decay = v;
        self
    }

    /// Floor of the exploration rate.
    pub fn epsilon_min(mut self, v: f32) -> Self {
        self.epsilon_min = v;
        self
    }

    /// The number of recent episodes the statistics are computed over.
    pub fn history_window(mut self, v: usize) -> Self {
        self.history_window = v;
        self
    }

    /// Seed of the random number generator used for exploration.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Whether the agent starts in training mode.
    pub fn train(mut self, v: bool) -> Self {
        self.train = v;
        self
    }

    /// Checks that every hyperparameter is in its valid range.
    pub fn check(&self) -> Result<(), JackqError> {
        let err = |msg: String| Err(JackqError::ConfigurationError(msg));

        if self.num_states == 0 || self.num_actions == 0 {
            return err(format!(
                "table must be non-empty, got {} states and {} actions",
                self.num_states, self.num_actions
            ));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return err(format!("alpha must be in [0, 1], got {}", self.alpha));
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return err(format!("gamma must be in [0, 1], got {}", self.gamma));
        }
        if !(self.epsilon_decay > 0.0 && self.epsilon_decay <= 1.0) {
            return err(format!(
                "epsilon_decay must be in (0, 1], got {}",
                self.epsilon_decay
            ));
        }
        if !(self.epsilon_min > 0.0) {
            return err(format!(
                "epsilon_min must be positive, got {}",
                self.epsilon_min
            ));
        }
        if !(self.epsilon_min <= self.epsilon && self.epsilon <= 1.0) {
            return err(format!(
                "epsilon must be in [epsilon_min, 1] = [{}, 1], got {}",
                self.epsilon_min, self.epsilon
            ));
        }
        if self.history_window == 0 {
            return err("history_window must be positive".to_string());
        }

        Ok(())
    }

    /// Loads [QLearningConfig] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path_ = path.as_ref().to_owned();
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let c = serde_yaml::from_reader(rdr)?;
        info!("Load config of Q-learning agent from {}", path_.display());
        Ok(c)
    }

    /// Saves [QLearningConfig].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path_ = path.as_ref().to_owned();
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        info!("Save config of Q-learning agent into {}", path_.display());
        Ok(())
    }
}
