use anyhow::Result;
use clap::Parser;
use jackq::{
    jackq_blackjack_env::{BlackjackEnv, BlackjackEnvConfig},
    jackq_core::{
        record::BufferedRecorder, Agent, Configurable, DefaultEvaluator, Env as _, Evaluator as _,
        StopSignal, Trainer, TrainerConfig,
    },
    jackq_tabular_agent::QLearningConfig,
    q_table_report, BlackjackQLearning,
};
use serde::Serialize;
use std::{path::Path, thread, time::Duration};

const ALPHA: f32 = 0.1;
const GAMMA: f32 = 0.95;
const EPSILON_DECAY: f32 = 0.995;
const EPSILON_MIN: f32 = 0.01;
const N_EPISODES_PER_EVAL: usize = 1000;
const MODEL_DIR: &str = "./jackq/examples/model/q_blackjack";

mod config {
    use super::*;

    #[derive(Serialize)]
    pub struct QBlackjackConfig {
        pub env_config: BlackjackEnvConfig,
        pub agent_config: QLearningConfig,
        pub trainer_config: TrainerConfig,
    }

    impl QBlackjackConfig {
        pub fn new(args: &Args, model_dir: &str) -> Result<Self> {
            let agent_config = agent_config(args)?;
            let trainer_config = TrainerConfig::default()
                .max_episodes(args.episodes)
                .record_interval(args.record_interval)
                .eval_interval(args.record_interval)
                .model_dir(model_dir);
            Ok(Self {
                env_config: BlackjackEnvConfig::default(),
                agent_config,
                trainer_config,
            })
        }
    }

    /// The agent configuration shared by training and evaluation.
    pub fn agent_config(args: &Args) -> Result<QLearningConfig> {
        match &args.agent_config {
            Some(path) => QLearningConfig::load(path),
            None => Ok(create_agent_config(args.seed)),
        }
    }

    pub fn create_agent_config(seed: u64) -> QLearningConfig {
        QLearningConfig::default()
            .alpha(ALPHA)
            .gamma(GAMMA)
            .epsilon(1.0)
            .epsilon_decay(EPSILON_DECAY)
            .epsilon_min(EPSILON_MIN)
            .seed(seed)
    }
}
use config::{agent_config, QBlackjackConfig};

/// Train/eval Q-learning agent in blackjack
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The number of training episodes
    #[arg(long, default_value_t = 50_000)]
    episodes: usize,

    /// Random seed of the agent; the environment uses the same value
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Where trained parameters are saved
    #[arg(long)]
    model_dir: Option<String>,

    /// Evaluate the saved agent, not train
    #[arg(short, long, default_value_t = false)]
    eval: bool,

    /// Interval of reporting statistics and evaluation, in episodes
    #[arg(long, default_value_t = 1000)]
    record_interval: usize,

    /// Stop training after this many seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// YAML file of the agent configuration
    #[arg(long)]
    agent_config: Option<String>,
}

fn train(args: &Args, model_dir: &str) -> Result<BlackjackQLearning> {
    let config = QBlackjackConfig::new(args, model_dir)?;
    log::info!("Config:\n{}", serde_yaml::to_string(&config)?);

    let mut env = BlackjackEnv::build(&config.env_config, args.seed as i64)?;
    let mut agent = BlackjackQLearning::build(config.agent_config)?;
    let mut recorder = BufferedRecorder::new();
    let mut evaluator = DefaultEvaluator::<BlackjackEnv>::new(
        &config.env_config,
        args.seed as i64 + 1,
        N_EPISODES_PER_EVAL,
    )?;

    let stop = StopSignal::new();
    if let Some(secs) = args.time_limit {
        let stop = stop.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(secs));
            stop.stop();
        });
    }

    let mut trainer = Trainer::build(config.trainer_config).with_stop_signal(stop);
    let episodes = trainer.train(&mut env, &mut agent, &mut recorder, &mut evaluator)?;
    agent.save_params(Path::new(model_dir))?;
    println!("Trained {} episodes", episodes);
    if let Some(record) = recorder.last() {
        println!("Last record: {}", record);
    }

    Ok(agent)
}

/// Evaluates the best saved agent, or the final one when no evaluation
/// has been saved as the best.
fn eval(args: &Args, model_dir: &str) -> Result<f32> {
    let env_config = BlackjackEnvConfig::default();
    let best_dir = Path::new(model_dir).join("best");
    let params_dir = if best_dir.is_dir() {
        best_dir.as_path()
    } else {
        Path::new(model_dir)
    };
    log::info!("Load parameters from {}", params_dir.display());

    let mut agent = {
        let mut agent = BlackjackQLearning::build(agent_config(args)?)?;
        agent.load_params(params_dir)?;
        agent.eval();
        agent
    };
    println!("{}", q_table_report(&agent)?);

    let r = DefaultEvaluator::<BlackjackEnv>::new(&env_config, args.seed as i64 + 1, N_EPISODES_PER_EVAL)?
        .evaluate(&mut agent)?;
    println!("Average return of the greedy policy: {:.4}", r);
    Ok(r)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let model_dir = args.model_dir.clone().unwrap_or_else(|| MODEL_DIR.to_string());

    if args.eval {
        eval(&args, &model_dir)?;
    } else {
        let agent = train(&args, &model_dir)?;
        println!("{}", q_table_report(&agent)?);
        eval(&args, &model_dir)?;
    }

    Ok(())
}
