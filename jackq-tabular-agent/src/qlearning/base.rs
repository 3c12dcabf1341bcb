//! Tabular Q-learning agent.
use super::{
    config::QLearningConfig,
    explorer::EpsilonGreedy,
    history::{EpisodeHistory, QLearningStats},
    table::QTable,
};
use anyhow::Result;
use jackq_core::{
    error::JackqError, record::Record, Agent, Configurable, DiscreteAct, DiscreteObs, Env, Policy,
    Step,
};
use log::{info, trace};
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    marker::PhantomData,
    path::Path,
};

const PARAMS_FILE: &str = "q_table.bin";

/// Parameters written by [`Agent::save_params`].
#[derive(Serialize, Deserialize)]
struct QLearningParams {
    q_table: QTable,
    epsilon: f32,
    total_episodes: usize,
}

/// Tabular Q-learning agent with epsilon-greedy exploration.
///
/// The agent learns online: every transition observed during
/// [`Agent::train_episode`] updates one entry of the table with
///
/// ```text
/// Q[s, a] <- Q[s, a] + alpha * (target - Q[s, a])
/// target  =  r                              if the episode ended
///            r + gamma * max_a' Q[s', a']   otherwise
/// ```
///
/// and epsilon decays once per completed episode.
pub struct QLearning<E>
where
    E: Env,
    E::Obs: DiscreteObs,
    E::Act: DiscreteAct,
{
    q_table: QTable,
    alpha: f32,
    gamma: f32,
    explorer: EpsilonGreedy,
    history: EpisodeHistory,
    train: bool,
    config: QLearningConfig,
    rng: SmallRng,
    phantom: PhantomData<E>,
}

impl<E> QLearning<E>
where
    E: Env,
    E::Obs: DiscreteObs,
    E::Act: DiscreteAct,
{
    /// Selects an action for `obs`.
    ///
    /// If `training` is `true` the action is epsilon-greedy, otherwise greedy.
    /// Ties between equal values go to the lowest action index.
    pub fn action(&mut self, obs: &E::Obs, training: bool) -> Result<E::Act> {
        let row = self.q_table.row(obs.index())?;
        let ix = if training {
            self.explorer.action(row, &mut self.rng)
        } else {
            super::table::argmax(row)
        };
        E::Act::from_index(ix).ok_or_else(|| JackqError::InvalidActionIndex(ix).into())
    }

    /// Applies one Q-learning update and returns the TD error.
    ///
    /// When `done` is `true` the target is the reward alone and `next_obs`
    /// is not looked at.
    pub fn update(
        &mut self,
        obs: &E::Obs,
        act: &E::Act,
        reward: f32,
        next_obs: &E::Obs,
        done: bool,
    ) -> Result<f32> {
        let (s, a) = (obs.index(), act.index());
        let current = self.q_table.get(s, a)?;
        let target = if done {
            reward
        } else {
            reward + self.gamma * self.q_table.max(next_obs.index())?
        };
        let td_error = target - current;
        self.q_table.set(s, a, current + self.alpha * td_error)?;
        Ok(td_error)
    }

    /// `epsilon = max(epsilon * epsilon_decay, epsilon_min)`.
    pub fn decay_epsilon(&mut self) {
        self.explorer.decay();
    }

    /// Current exploration rate.
    pub fn epsilon(&self) -> f32 {
        self.explorer.epsilon
    }

    /// The number of completed training episodes.
    pub fn total_episodes(&self) -> usize {
        self.history.total_episodes()
    }

    /// Training statistics, `None` before the first episode.
    pub fn stats(&self) -> Option<QLearningStats> {
        QLearningStats::new(&self.history, self.explorer.epsilon)
    }

    /// The greedy action index of every state.
    pub fn policy(&self) -> Vec<usize> {
        let [n_states, _] = self.q_table.shape();
        (0..n_states)
            .map(|s| self.q_table.row(s).map(super::table::argmax).unwrap_or(0))
            .collect()
    }

    /// The action-value table.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Forgets everything learned: zeroes the table, clears the history
    /// and restores the initial exploration rate and random seed.
    pub fn reset_learning(&mut self) {
        self.q_table.reset();
        self.history.clear();
        self.explorer.epsilon = self.config.epsilon;
        self.rng = SmallRng::seed_from_u64(self.config.seed);
        info!("Reset the Q-table");
    }
}

impl<E> Policy<E> for QLearning<E>
where
    E: Env,
    E::Obs: DiscreteObs,
    E::Act: DiscreteAct,
{
    /// Epsilon-greedy in training mode, greedy in evaluation mode.
    fn sample(&mut self, obs: &E::Obs) -> Result<E::Act> {
        self.action(obs, self.train)
    }
}

impl<E> Configurable<E> for QLearning<E>
where
    E: Env,
    E::Obs: DiscreteObs,
    E::Act: DiscreteAct,
{
    type Config = QLearningConfig;

    /// Constructs Q-learning agent with a zero-filled table.
    fn build(config: Self::Config) -> Result<Self> {
        config.check()?;

        Ok(Self {
            q_table: QTable::new(config.num_states, config.num_actions),
            alpha: config.alpha,
            gamma: config.gamma,
            explorer: EpsilonGreedy::new(
                config.epsilon,
                config.epsilon_decay,
                config.epsilon_min,
            ),
            history: EpisodeHistory::new(config.history_window),
            train: config.train,
            rng: SmallRng::seed_from_u64(config.seed),
            config,
            phantom: PhantomData,
        })
    }
}

impl<E> Agent<E> for QLearning<E>
where
    E: Env,
    E::Obs: DiscreteObs,
    E::Act: DiscreteAct,
{
    fn train(&mut self) {
        self.train = true;
    }

    fn eval(&mut self) {
        self.train = false;
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn observe(&mut self, prev_obs: &E::Obs, step: &Step<E>) -> Result<()> {
        self.update(prev_obs, &step.act, step.reward, &step.obs, step.is_done())?;
        Ok(())
    }

    /// Runs a training episode with epsilon-greedy actions, whatever the
    /// current train/eval mode.
    fn train_episode(&mut self, env: &mut E) -> Result<(f32, usize)> {
        let mut prev_obs = env.reset()?;
        let mut total_reward = 0f32;
        let mut n_steps = 0;

        loop {
            let act = self.action(&prev_obs, true)?;
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

    fn end_episode(&mut self, total_reward: f32, n_steps: usize) {
        self.history.push(total_reward, n_steps);
        self.decay_epsilon();
    }

    fn stats_record(&self) -> Record {
        match self.stats() {
            Some(stats) => Record::from(&stats),
            None => Record::empty(),
        }
    }

    fn save_params(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        let file = File::create(path.join(PARAMS_FILE))?;
        let params = QLearningParams {
            q_table: self.q_table.clone(),
            epsilon: self.explorer.epsilon,
            total_episodes: self.history.total_episodes(),
        };
        bincode::serialize_into(BufWriter::new(file), &params)?;
        Ok(())
    }

    /// Loads the table, epsilon and episode count; the recent-episode window
    /// is not stored, so [`QLearning::stats`] is `None` until the next episode.
    fn load_params(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path.join(PARAMS_FILE))?;
        let params: QLearningParams = bincode::deserialize_from(BufReader::new(file))?;

        let expected = self.q_table.shape();
        let found = params.q_table.shape();
        if expected != found || !params.q_table.is_consistent() {
            return Err(JackqError::ParamShapeMismatch { expected, found }.into());
        }
        if let Some(v) = params.q_table.as_slice().iter().find(|v| !v.is_finite()) {
            return Err(JackqError::InvalidParamValue(format!("Q-value {}", v)).into());
        }
        if !params.epsilon.is_finite() {
            return Err(JackqError::InvalidParamValue(format!("epsilon {}", params.epsilon)).into());
        }

        self.q_table = params.q_table;
        self.explorer.epsilon = params
            .epsilon
            .clamp(self.explorer.epsilon_min, self.config.epsilon);
        self.history.clear();
        self.history.set_total_episodes(params.total_episodes);
        Ok(())
    }
}
