//! Exploration strategy of Q-learning.
use super::table::argmax;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Epsilon-greedy explorer with multiplicative decay.
///
/// Epsilon decays once per episode and never goes below `epsilon_min`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EpsilonGreedy {
    /// Current probability of a random action.
    pub epsilon: f32,

    /// Factor applied to epsilon by [`EpsilonGreedy::decay`].
    pub epsilon_decay: f32,

    /// Floor of epsilon.
    pub epsilon_min: f32,
}

impl EpsilonGreedy {
    /// Constructs epsilon-greedy explorer.
    pub fn new(epsilon: f32, epsilon_decay: f32, epsilon_min: f32) -> Self {
        Self {
            epsilon,
            epsilon_decay,
            epsilon_min,
        }
    }

    /// Takes an action index based on the action values of a state.
    ///
    /// With probability epsilon the action is uniform over all actions,
    /// otherwise it is the greedy one. No random number is drawn when
    /// epsilon is zero.
    pub fn action(&self, q_row: &[f32], rng: &mut impl Rng) -> usize {
        if self.epsilon > 0.0 && rng.gen::<f32>() < self.epsilon {
            rng.gen_range(0..q_row.len())
        } else {
            argmax(q_row)
        }
    }

    /// `epsilon = max(epsilon * epsilon_decay, epsilon_min)`.
    pub fn decay(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.epsilon_min);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_decay_100_times() {
        let mut explorer = EpsilonGreedy::new(1.0, 0.995, 0.01);
        for _ in 0..100 {
            explorer.decay();
        }
        assert!((explorer.epsilon - 0.606).abs() < 1e-3);
    }

    #[test]
    fn test_decay_is_floored() {
        let mut explorer = EpsilonGreedy::new(1.0, 0.5, 0.1);
        let mut prev = explorer.epsilon;
        for _ in 0..50 {
            explorer.decay();
            assert!(explorer.epsilon <= prev);
            assert!(explorer.epsilon >= 0.1);
            prev = explorer.epsilon;
        }
        assert_eq!(explorer.epsilon, 0.1);
    }

    #[test]
    fn test_zero_epsilon_is_greedy() {
        let explorer = EpsilonGreedy::new(0.0, 0.995, 0.0);
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..1000 {
            assert_eq!(explorer.action(&[0.1, 0.7], &mut rng), 1);
            assert_eq!(explorer.action(&[0.2, 0.2], &mut rng), 0);
        }
    }

    #[test]
    fn test_full_epsilon_explores_every_action() {
        let explorer = EpsilonGreedy::new(1.0, 0.995, 0.01);
        let mut rng = SmallRng::seed_from_u64(0);
        let mut counts = [0usize; 2];
        for _ in 0..1000 {
            counts[explorer.action(&[0.0, 1.0], &mut rng)] += 1;
        }
        assert!(counts[0] > 300 && counts[1] > 300);
    }
}
