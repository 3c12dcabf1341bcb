//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
///
/// Functions at trait boundaries return [`anyhow::Result`]; use
/// `err.downcast_ref::<JackqError>()` to inspect the kind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JackqError {
    /// The environment was stepped after its episode had ended.
    #[error("Episode already terminated, call reset() first")]
    EpisodeAlreadyTerminated,

    /// A hyperparameter is out of its valid range.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A state index outside of the state space.
    #[error("Invalid state index: {0}")]
    InvalidStateIndex(usize),

    /// An action index outside of the action set.
    #[error("Invalid action index: {0}")]
    InvalidActionIndex(usize),

    /// Loaded parameters do not match the shape of the agent.
    #[error("Parameter shape mismatch: expected {expected:?}, found {found:?}")]
    ParamShapeMismatch {
        /// Shape of the agent.
        expected: [usize; 2],
        /// Shape found in the file.
        found: [usize; 2],
    },

    /// Loaded parameters contain a value outside of its valid range.
    #[error("Invalid parameter value: {0}")]
    InvalidParamValue(String),

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
