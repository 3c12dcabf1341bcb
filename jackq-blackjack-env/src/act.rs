//! Action for [BlackjackEnv](crate::BlackjackEnv)
use jackq_core::{Act, DiscreteAct};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action for [BlackjackEnv](crate::BlackjackEnv).
///
/// The discriminant is the column of the action in a value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlackjackAct {
    /// Draw another card.
    Hit = 0,

    /// Stop drawing and let the dealer play.
    Stand = 1,
}

impl BlackjackAct {
    /// All actions in index order.
    pub const ALL: [BlackjackAct; 2] = [BlackjackAct::Hit, BlackjackAct::Stand];
}

impl Act for BlackjackAct {}

impl DiscreteAct for BlackjackAct {
    fn index(&self) -> usize {
        *self as usize
    }

    fn from_index(ix: usize) -> Option<Self> {
        Self::ALL.get(ix).copied()
    }
}

impl fmt::Display for BlackjackAct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlackjackAct::Hit => write!(f, "HIT"),
            BlackjackAct::Stand => write!(f, "STAND"),
        }
    }
}
