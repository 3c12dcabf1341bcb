//! Core functionalities.
mod agent;
mod env;
mod policy;
mod step;
pub use agent::Agent;
pub use env::Env;
pub use policy::{Configurable, Policy};
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Environments in this library are not vectorized, so an [`Obs`] is always
/// a single observation.
pub trait Obs: Clone + Debug {}

/// An action of an environment.
pub trait Act: Clone + Debug {}

/// An observation taking one of finitely many values.
///
/// Tabular agents use [`DiscreteObs::index`] as the row of their value table.
pub trait DiscreteObs: Obs {
    /// Index of the observation in `0..n_states`.
    fn index(&self) -> usize;
}

/// An action taking one of finitely many values.
pub trait DiscreteAct: Act + Sized {
    /// Index of the action in `0..n_actions`.
    fn index(&self) -> usize;

    /// Returns the action of the given index, or `None` if out of range.
    fn from_index(ix: usize) -> Option<Self>;
}
