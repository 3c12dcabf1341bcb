//! Utilities for interaction of agents and environments.
use crate::{
    record::{RecordValue, Recorder},
    Env, Policy,
};
use anyhow::Result;
use log::info;

/// Run episodes with a policy and write every step to a recorder.
///
/// Each record holds the values reported by the environment for the step,
/// plus `"episode"`, `"step"` and `"reward"`. Returns the return of each episode.
pub fn eval_with_recorder<E, P, R>(
    env: &mut E,
    policy: &mut P,
    n_episodes: usize,
    recorder: &mut R,
) -> Result<Vec<f32>>
where
    E: Env,
    P: Policy<E>,
    R: Recorder + ?Sized,
{
    let mut rs = Vec::with_capacity(n_episodes);

    for episode in 0..n_episodes {
        let mut prev_obs = env.reset()?;
        let mut count_step = 0;
        let mut r_total = 0.0;

        loop {
            let act = policy.sample(&prev_obs)?;
            let (step, mut record) = env.step(&act)?;
            r_total += step.reward;

            record.insert("reward", RecordValue::Scalar(step.reward));
            record.insert("episode", RecordValue::Scalar(episode as _));
            record.insert("step", RecordValue::Scalar(count_step as _));
            recorder.write(record);

            if step.is_done() {
                break;
            }
            prev_obs = step.obs;
            count_step += 1;
        }

        info!("Episode {:?}, {:?} steps, reward = {:?}", episode, count_step + 1, r_total);
        rs.push(r_total);
    }

    Ok(rs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dummy::{CountingAgent, WalkEnv},
        record::BufferedRecorder,
    };

    #[test]
    fn test_eval_with_recorder_writes_every_step() -> Result<()> {
        let mut env = WalkEnv::build(&3, 0)?;
        let mut policy = CountingAgent::default();
        let mut recorder = BufferedRecorder::new();

        let rs = eval_with_recorder(&mut env, &mut policy, 2, &mut recorder)?;

        assert_eq!(rs, vec![1.0, 1.0]);
        assert_eq!(recorder.len(), 6);
        let last = recorder.last().unwrap();
        assert_eq!(last.get_scalar("episode")?, 1.0);
        assert_eq!(last.get_scalar("step")?, 2.0);
        assert_eq!(last.get_scalar("reward")?, 1.0);
        Ok(())
    }
}
