//! Observation for [BlackjackEnv](crate::BlackjackEnv)
use jackq_core::{error::JackqError, DiscreteObs, Obs};

/// Smallest player total distinguished by the state encoding.
pub const MIN_HAND_TOTAL: u8 = 4;

/// Largest player total distinguished by the state encoding.
pub const MAX_HAND_TOTAL: u8 = 21;

/// The number of states.
pub const N_STATES: usize = (MAX_HAND_TOTAL - MIN_HAND_TOTAL + 1) as usize;

/// Encodes a player total as a state index.
///
/// Totals below 4 or above 21 are clamped, so the encoding is lossy outside
/// `4..=21` and exact inside it.
pub fn state_of(hand_total: u8) -> usize {
    (hand_total.clamp(MIN_HAND_TOTAL, MAX_HAND_TOTAL) - MIN_HAND_TOTAL) as usize
}

/// Decodes a state index into the player total, the inverse of [`state_of`] on `4..=21`.
pub fn hand_total_of(state: usize) -> Result<u8, JackqError> {
    if state < N_STATES {
        Ok(state as u8 + MIN_HAND_TOTAL)
    } else {
        Err(JackqError::InvalidStateIndex(state))
    }
}

/// Observation for [BlackjackEnv](crate::BlackjackEnv): the encoded player total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlackjackObs(usize);

impl BlackjackObs {
    /// Observation of the given state index.
    pub fn new(state: usize) -> Result<Self, JackqError> {
        hand_total_of(state)?;
        Ok(Self(state))
    }

    /// Observation of the given player total, clamped into `4..=21`.
    pub fn from_hand_total(hand_total: u8) -> Self {
        Self(state_of(hand_total))
    }

    /// The state index in `0..N_STATES`.
    pub fn state(&self) -> usize {
        self.0
    }

    /// The (clamped) player total.
    pub fn hand_total(&self) -> u8 {
        self.0 as u8 + MIN_HAND_TOTAL
    }
}

impl Obs for BlackjackObs {}

impl DiscreteObs for BlackjackObs {
    fn index(&self) -> usize {
        self.0
    }
}
