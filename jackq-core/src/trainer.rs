//! Train [`Agent`].
mod config;
mod stop;
use crate::{
    record::{Record, RecordValue::Scalar, Recorder},
    Agent, Env, Evaluator,
};
use anyhow::Result;
pub use config::TrainerConfig;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
pub use stop::StopSignal;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Manages the episodic training loop.
///
/// # Training loop
///
/// 0. Given an environment implementing [`Env`], an agent implementing [`Agent`],
///    a [`Recorder`] and an [`Evaluator`].
/// 1. Set the agent to training mode, `episodes = 0`.
/// 2. If the [`StopSignal`] is set or `episodes == max_episodes`, finish.
/// 3. Run one complete episode with [`Agent::train_episode`], `episodes += 1`.
/// 4. If `episodes % record_interval == 0`, read [`Agent::stats_record`], add
///    `"episode"` and write it to the recorder.
/// 5. If `episodes % eval_interval == 0`, evaluate the greedy policy and add
///    `"eval_reward"`. If the result is the best so far, the agent's parameters
///    are saved in `(model_dir)/best`.
/// 6. If `episodes % save_interval == 0`, the agent's parameters are saved in
///    `(model_dir)/(episodes)`.
/// 7. Back to step 2.
///
/// The stop signal is checked only between episodes, so the agent is never
/// left in the middle of an episode.
///
/// # Interaction of objects
///
/// ```mermaid
/// graph LR
///     T[Trainer]-->|train_episode|A[Agent]
///     A-->|Env::Act|B[Env]
///     B-->|"Step&lt;E: Env&gt;"|A
///     A-->|stats_record|T
///     T-->|Record|R[Recorder]
/// ```
pub struct Trainer {
    /// The number of episodes to train.
    max_episodes: usize,

    /// Interval of reporting statistics in episodes.
    record_interval: usize,

    /// Interval of evaluation in episodes.
    eval_interval: usize,

    /// Interval of saving the model in episodes.
    save_interval: usize,

    /// Where to save the trained model.
    model_dir: Option<String>,

    /// Cooperative stop flag.
    stop: StopSignal,
}

fn is_due(episodes: usize, interval: usize) -> bool {
    interval > 0 && episodes % interval == 0
}

impl Trainer {
    /// Constructs a trainer.
    pub fn build(config: TrainerConfig) -> Self {
        Self {
            max_episodes: config.max_episodes,
            record_interval: config.record_interval,
            eval_interval: config.eval_interval,
            save_interval: config.save_interval,
            model_dir: config.model_dir,
            stop: StopSignal::new(),
        }
    }

    /// Replaces the stop signal with one shared with a controller.
    pub fn with_stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    /// Returns a handle of the stop signal of this trainer.
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    fn save_model<E: Env, A: Agent<E>>(agent: &A, model_dir: PathBuf) {
        match agent.save_params(&model_dir) {
            Ok(()) => info!("Saved the model in {:?}.", &model_dir),
            Err(e) => warn!("Failed to save model in {:?}: {}", &model_dir, e),
        }
    }

    /// Train the agent.
    ///
    /// Returns the number of completed episodes, which is less than
    /// `max_episodes` if training was stopped.
    pub fn train<E, A, D>(
        &mut self,
        env: &mut E,
        agent: &mut A,
        recorder: &mut dyn Recorder,
        evaluator: &mut D,
    ) -> Result<usize>
    where
        E: Env,
        A: Agent<E>,
        D: Evaluator<E>,
    {
        let mut max_eval_reward = f32::MIN;
        let mut episodes: usize = 0;
        agent.train();
        info!("Start training for {} episodes", self.max_episodes);

        while episodes < self.max_episodes {
            if self.stop.is_stopped() {
                info!("Training stopped after {} episodes", episodes);
                break;
            }

            let (reward, n_steps) = agent.train_episode(env)?;
            episodes += 1;
            debug!(
                "Episode {}: reward = {}, steps = {}",
                episodes, reward, n_steps
            );

            let mut record = Record::empty();

            if is_due(episodes, self.record_interval) {
                record.merge_inplace(agent.stats_record());
            }

            if is_due(episodes, self.eval_interval) {
                agent.eval();
                let eval_reward = evaluator.evaluate(agent)?;
                agent.train();
                record.insert("eval_reward", Scalar(eval_reward));

                if eval_reward > max_eval_reward {
                    max_eval_reward = eval_reward;
                    if let Some(model_dir) = &self.model_dir {
                        Self::save_model(agent, Path::new(model_dir).join("best"));
                    }
                }
            }

            if is_due(episodes, self.save_interval) {
                if let Some(model_dir) = &self.model_dir {
                    let dir = Path::new(model_dir).join(episodes.to_string());
                    Self::save_model(agent, dir);
                }
            }

            if !record.is_empty() {
                record.insert("episode", Scalar(episodes as f32));
                info!("{}", record);
                recorder.write(record);
            }
        }

        recorder.flush(episodes);
        Ok(episodes)
    }
}
