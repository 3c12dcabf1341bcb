//! Action-value table.
use jackq_core::error::JackqError;
use serde::{Deserialize, Serialize};

/// Index of the largest value; the lowest index wins ties.
pub(super) fn argmax(xs: &[f32]) -> usize {
    let mut best = 0;
    for (i, &x) in xs.iter().enumerate().skip(1) {
        if x > xs[best] {
            best = i;
        }
    }
    best
}

/// Table of action values, one row per state.
///
/// Values are stored state-major in a flat vector and are zero at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    n_states: usize,
    n_actions: usize,
    values: Vec<f32>,
}

impl QTable {
    /// Creates a zero-filled table.
    pub fn new(n_states: usize, n_actions: usize) -> Self {
        Self {
            n_states,
            n_actions,
            values: vec![0f32; n_states * n_actions],
        }
    }

    /// `[n_states, n_actions]`.
    pub fn shape(&self) -> [usize; 2] {
        [self.n_states, self.n_actions]
    }

    /// Values of all state-action pairs, state-major.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    fn offset(&self, state: usize, action: usize) -> Result<usize, JackqError> {
        if state >= self.n_states {
            return Err(JackqError::InvalidStateIndex(state));
        }
        if action >= self.n_actions {
            return Err(JackqError::InvalidActionIndex(action));
        }
        Ok(state * self.n_actions + action)
    }

    /// Value of `(state, action)`.
    pub fn get(&self, state: usize, action: usize) -> Result<f32, JackqError> {
        Ok(self.values[self.offset(state, action)?])
    }

    /// Overwrites the value of `(state, action)`.
    pub fn set(&mut self, state: usize, action: usize, value: f32) -> Result<(), JackqError> {
        let ix = self.offset(state, action)?;
        self.values[ix] = value;
        Ok(())
    }

    /// Values of all actions in `state`.
    pub fn row(&self, state: usize) -> Result<&[f32], JackqError> {
        if state >= self.n_states {
            return Err(JackqError::InvalidStateIndex(state));
        }
        let start = state * self.n_actions;
        Ok(&self.values[start..start + self.n_actions])
    }

    /// Greedy action in `state`.
    pub fn argmax(&self, state: usize) -> Result<usize, JackqError> {
        self.row(state).map(argmax)
    }

    /// Largest action value in `state`.
    pub fn max(&self, state: usize) -> Result<f32, JackqError> {
        let row = self.row(state)?;
        Ok(row[argmax(row)])
    }

    /// Sets every value back to zero.
    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(|v| *v = 0.0);
    }

    /// Whether the number of values agrees with the shape, which a table
    /// read from a file does not guarantee.
    pub(super) fn is_consistent(&self) -> bool {
        self.values.len() == self.n_states * self.n_actions
    }
}
