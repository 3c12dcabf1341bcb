//! Episode history and training statistics.
use jackq_core::record::{Record, RecordValue};
use std::collections::VecDeque;

/// Recent episode outcomes plus a lifetime episode counter.
///
/// Holds the `(total_reward, steps)` of at most `window` latest episodes;
/// the oldest entry is evicted first.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeHistory {
    window: usize,
    recent: VecDeque<(f32, usize)>,
    total_episodes: usize,
}

impl EpisodeHistory {
    /// Creates an empty history keeping at most `window` episodes.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            recent: VecDeque::with_capacity(window),
            total_episodes: 0,
        }
    }

    /// Appends the outcome of a finished episode.
    pub fn push(&mut self, total_reward: f32, steps: usize) {
        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        self.recent.push_back((total_reward, steps));
        self.total_episodes += 1;
    }

    /// The number of episodes in the window.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    /// Returns `true` if the window is empty.
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// The number of episodes pushed since construction or the last [`clear`](Self::clear).
    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    pub(super) fn set_total_episodes(&mut self, n: usize) {
        self.total_episodes = n;
    }

    /// Iterates over `(total_reward, steps)` from the oldest episode in the window.
    pub fn iter(&self) -> impl Iterator<Item = &(f32, usize)> {
        self.recent.iter()
    }

    /// Mean total reward over the window.
    pub fn mean_reward(&self) -> Option<f32> {
        self.mean_of(|(r, _)| *r)
    }

    /// Mean episode length over the window.
    pub fn mean_steps(&self) -> Option<f32> {
        self.mean_of(|(_, n)| *n as f32)
    }

    /// Fraction of episodes in the window with a positive total reward.
    pub fn win_rate(&self) -> Option<f32> {
        self.mean_of(|(r, _)| if *r > 0.0 { 1.0 } else { 0.0 })
    }

    fn mean_of(&self, f: impl Fn(&(f32, usize)) -> f32) -> Option<f32> {
        if self.recent.is_empty() {
            None
        } else {
            Some(self.recent.iter().map(f).sum::<f32>() / self.recent.len() as f32)
        }
    }

    /// Forgets every episode and resets the counter.
    pub fn clear(&mut self) {
        self.recent.clear();
        self.total_episodes = 0;
    }
}

/// Training statistics of [`QLearning`](super::QLearning).
#[derive(Debug, Clone, PartialEq)]
pub struct QLearningStats {
    /// Episodes completed since construction or reset.
    pub total_episodes: usize,

    /// Mean total reward over the recent window.
    pub avg_reward_recent: f32,

    /// Mean episode length over the recent window.
    pub avg_steps_recent: f32,

    /// Fraction of won episodes in the recent window.
    pub win_rate: f32,

    /// Current exploration rate.
    pub epsilon: f32,
}

impl QLearningStats {
    pub(super) fn new(history: &EpisodeHistory, epsilon: f32) -> Option<Self> {
        Some(Self {
            total_episodes: history.total_episodes(),
            avg_reward_recent: history.mean_reward()?,
            avg_steps_recent: history.mean_steps()?,
            win_rate: history.win_rate()?,
            epsilon,
        })
    }
}

impl From<&QLearningStats> for Record {
    fn from(stats: &QLearningStats) -> Self {
        Record::from_slice(&[
            (
                "total_episodes",
                RecordValue::Scalar(stats.total_episodes as f32),
            ),
            (
                "avg_reward_recent",
                RecordValue::Scalar(stats.avg_reward_recent),
            ),
            ("avg_steps_recent", RecordValue::Scalar(stats.avg_steps_recent)),
            ("win_rate", RecordValue::Scalar(stats.win_rate)),
            ("epsilon", RecordValue::Scalar(stats.epsilon)),
        ])
    }
}
