//! Tabular reinforcement learning on a simplified blackjack game.
//!
//! jackq consists of the following crates:
//!
//! * [jackq-core](jackq_core) provides basic traits generic to environments and
//!   reinforcement learning (RL) agents, records and recorders, and the episodic
//!   [`Trainer`](jackq_core::Trainer) which can be stopped from another thread
//!   through a [`StopSignal`](jackq_core::StopSignal).
//! * [jackq-blackjack-env](jackq_blackjack_env) is single-round blackjack as an MDP:
//!   the player hits or stands, the dealer draws to 17, and the reward is +1, 0 or -1.
//! * [jackq-tabular-agent](jackq_tabular_agent) includes the tabular Q-learning agent
//!   with epsilon-greedy exploration.
//! * [jackq](crate) re-exports the crates above and has a runnable example,
//!   `q_blackjack`, which trains and evaluates the agent.
//!
//! ```no_run
//! use anyhow::Result;
//! use jackq::{
//!     jackq_blackjack_env::{BlackjackEnv, BlackjackEnvConfig},
//!     jackq_core::{record::NullRecorder, Configurable, DefaultEvaluator, Env, Trainer, TrainerConfig},
//!     jackq_tabular_agent::QLearningConfig,
//!     BlackjackQLearning,
//! };
//!
//! fn main() -> Result<()> {
//!     let env_config = BlackjackEnvConfig::default();
//!     let mut env = BlackjackEnv::build(&env_config, 0)?;
//!     let mut agent = BlackjackQLearning::build(QLearningConfig::default())?;
//!     let mut evaluator = DefaultEvaluator::<BlackjackEnv>::new(&env_config, 1, 1000)?;
//!
//!     let mut trainer = Trainer::build(TrainerConfig::default().max_episodes(50_000));
//!     trainer.train(&mut env, &mut agent, &mut NullRecorder::new(), &mut evaluator)?;
//!
//!     println!("{}", jackq::q_table_report(&agent)?);
//!     Ok(())
//! }
//! ```
mod report;
pub use jackq_blackjack_env;
pub use jackq_core;
pub use jackq_tabular_agent;
pub use report::q_table_report;

/// Q-learning agent on [`BlackjackEnv`](jackq_blackjack_env::BlackjackEnv).
pub type BlackjackQLearning = jackq_tabular_agent::QLearning<jackq_blackjack_env::BlackjackEnv>;
