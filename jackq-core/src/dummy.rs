//! Minimal environment and agent used in tests of this crate.
use crate::{
    error::JackqError,
    record::{Record, RecordValue},
    Act, Agent, Env, Obs, Policy, Step, StopSignal,
};
use anyhow::Result;
use std::{fs, path::Path};

/// Position of the walker.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkObs(pub usize);

impl Obs for WalkObs {}

/// The only action: one step forward.
#[derive(Clone, Debug)]
pub struct WalkAct;

impl Act for WalkAct {}

/// Walks forward one cell per step; the episode ends at cell `len` with reward 1.
pub struct WalkEnv {
    len: usize,
    pos: usize,
    done: bool,
}

impl Env for WalkEnv {
    type Config = usize;
    type Obs = WalkObs;
    type Act = WalkAct;
    type Info = ();

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            len: *config,
            pos: 0,
            done: true,
        })
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        if self.done {
            return Err(JackqError::EpisodeAlreadyTerminated.into());
        }
        self.pos += 1;
        self.done = self.pos >= self.len;
        let reward = if self.done { 1.0 } else { 0.0 };
        let step = Step::new(WalkObs(self.pos), a.clone(), reward, self.done, ());
        Ok((step, Record::empty()))
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.pos = 0;
        self.done = false;
        Ok(WalkObs(0))
    }

    fn reset_with_index(&mut self, _ix: usize) -> Result<Self::Obs> {
        self.reset()
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

/// Counts transitions and episodes, optionally raising a stop signal.
#[derive(Default)]
pub struct CountingAgent {
    /// Training mode.
    pub train: bool,

    /// The number of observed transitions.
    pub observed: usize,

    /// The number of finished episodes.
    pub episodes: usize,

    /// Raises the signal when `episodes` reaches the given count.
    pub stop_after: Option<(usize, StopSignal)>,
}

impl Policy<WalkEnv> for CountingAgent {
    fn sample(&mut self, _obs: &WalkObs) -> Result<WalkAct> {
        Ok(WalkAct)
    }
}

impl Agent<WalkEnv> for CountingAgent {
    fn train(&mut self) {
        self.train = true;
    }

    fn eval(&mut self) {
        self.train = false;
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn observe(&mut self, _prev_obs: &WalkObs, _step: &Step<WalkEnv>) -> Result<()> {
        self.observed += 1;
        Ok(())
    }

    fn end_episode(&mut self, _total_reward: f32, _n_steps: usize) {
        self.episodes += 1;
        if let Some((n, stop)) = &self.stop_after {
            if self.episodes == *n {
                stop.stop();
            }
        }
    }

    fn stats_record(&self) -> Record {
        if self.episodes == 0 {
            return Record::empty();
        }
        Record::from_slice(&[(
            "total_episodes",
            RecordValue::Scalar(self.episodes as f32),
        )])
    }

    fn save_params(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        fs::write(path.join("agent.txt"), self.episodes.to_string())?;
        Ok(())
    }

    fn load_params(&mut self, path: &Path) -> Result<()> {
        self.episodes = fs::read_to_string(path.join("agent.txt"))?.trim().parse()?;
        Ok(())
    }
}
