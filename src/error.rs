//! Error conditions surfaced by the engine.

use thiserror::Error;

/// Everything that can go wrong inside the engine.
///
/// All conditions are synchronous and deterministic; retrying the same
/// call with the same inputs yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A word or feedback pattern is malformed (wrong length or alphabet),
    /// or a configuration value is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The supplied word list violates the dictionary contract.
    #[error("invalid dictionary: {0}")]
    InvalidDictionary(String),

    /// An operation was attempted on a finished game.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// No dictionary word is consistent with the feedback history.
    /// Usually a typo in manually entered feedback, or a target missing
    /// from the dictionary.
    #[error("no candidate words remain: {0}")]
    ExhaustedCandidates(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;
