use anyhow::Result;
use jackq_blackjack_env::{BlackjackAct, BlackjackEnv, BlackjackEnvConfig, BlackjackObs};
use jackq_core::{
    record::BufferedRecorder, util::eval_with_recorder, Configurable, DefaultEvaluator, Env as _,
    Evaluator, Policy,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::Deserialize;

/// Hits below a threshold; with probability `p_random` acts at random instead.
#[derive(Clone, Deserialize)]
struct ThresholdPolicyConfig {
    threshold: u8,
    p_random: f64,
}

struct ThresholdPolicy {
    threshold: u8,
    p_random: f64,
    rng: SmallRng,
}

impl Policy<BlackjackEnv> for ThresholdPolicy {
    fn sample(&mut self, obs: &BlackjackObs) -> Result<BlackjackAct> {
        let act = if self.rng.gen_bool(self.p_random) {
            BlackjackAct::ALL[self.rng.gen_range(0..2)]
        } else if obs.hand_total() < self.threshold {
            BlackjackAct::Hit
        } else {
            BlackjackAct::Stand
        };
        Ok(act)
    }
}

impl Configurable<BlackjackEnv> for ThresholdPolicy {
    type Config = ThresholdPolicyConfig;

    fn build(config: Self::Config) -> Result<Self> {
        Ok(Self {
            threshold: config.threshold,
            p_random: config.p_random,
            rng: SmallRng::seed_from_u64(42),
        })
    }
}

/// Plays rounds with rendering and prints the final record of each round.
fn play_rounds(policy: &mut ThresholdPolicy, n_rounds: usize) -> Result<Vec<f32>> {
    let env_config = BlackjackEnvConfig::default().render(true);
    let mut env = BlackjackEnv::build(&env_config, 42)?;
    let mut recorder = BufferedRecorder::new();
    let returns = eval_with_recorder(&mut env, policy, n_rounds, &mut recorder)?;
    for record in recorder.iter().filter(|r| r.get("result").is_some()) {
        println!("{}", record);
    }
    Ok(returns)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut policy = ThresholdPolicy::build(ThresholdPolicyConfig {
        threshold: 17,
        p_random: 0.1,
    })?;

    // Five rounds with the table shown after every step
    let returns = play_rounds(&mut policy, 5)?;
    println!("Returns of the rendered rounds: {:?}", returns);

    // Average return over many rounds
    let r = DefaultEvaluator::<BlackjackEnv>::new(&BlackjackEnvConfig::default(), 0, 10_000)?
        .evaluate(&mut policy)?;
    println!("Average return of the threshold policy: {:.3}", r);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_rounds_returns_every_round() -> Result<()> {
        let mut policy = ThresholdPolicy::build(ThresholdPolicyConfig {
            threshold: 17,
            p_random: 0.0,
        })?;
        let returns = play_rounds(&mut policy, 5)?;

        assert_eq!(returns.len(), 5);
        assert!(returns.iter().all(|r| [-1.0, 0.0, 1.0].contains(r)));
        Ok(())
    }
}
