use crate::BlackjackQLearning;
use anyhow::Result;
use jackq_blackjack_env::{hand_total_of, BlackjackAct};
use jackq_core::DiscreteAct;
use std::fmt::Write;

/// Formats the Q-table of a blackjack agent, one line per player total,
/// with the greedy action of each state.
pub fn q_table_report(agent: &BlackjackQLearning) -> Result<String> {
    let q = agent.q_table();
    let [n_states, _] = q.shape();
    let mut s = String::new();

    writeln!(s, "{:>5} {:>10} {:>10}  {}", "hand", "Q(HIT)", "Q(STAND)", "best")?;
    for state in 0..n_states {
        let hand = hand_total_of(state)?;
        let best = q.argmax(state)?;
        let best = BlackjackAct::from_index(best)
            .map(|a| a.to_string())
            .unwrap_or_default();
        writeln!(
            s,
            "{:>5} {:>10.4} {:>10.4}  {}",
            hand,
            q.get(state, BlackjackAct::Hit.index())?,
            q.get(state, BlackjackAct::Stand.index())?,
            best
        )?;
    }

    if let Some(stats) = agent.stats() {
        write!(
            s,
            "episodes = {}, avg reward = {:.4}, avg steps = {:.2}, win rate = {:.4}, epsilon = {:.4}",
            stats.total_episodes,
            stats.avg_reward_recent,
            stats.avg_steps_recent,
            stats.win_rate,
            stats.epsilon
        )?;
    }

    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jackq_core::Configurable;
    use jackq_tabular_agent::QLearningConfig;

    #[test]
    fn test_report_of_fresh_agent() -> Result<()> {
        let agent = BlackjackQLearning::build(QLearningConfig::default())?;
        let report = q_table_report(&agent)?;
        let lines = report.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 19);
        assert!(lines[1].trim_start().starts_with("4 "));
        assert!(lines[18].trim_start().starts_with("21 "));
        assert!(lines[1..].iter().all(|l| l.ends_with("HIT")));
        Ok(())
    }

    #[test]
    fn test_report_fails_for_foreign_state_space() -> Result<()> {
        let agent = BlackjackQLearning::build(QLearningConfig::default().num_states(30))?;
        assert!(q_table_report(&agent).is_err());
        Ok(())
    }
}
