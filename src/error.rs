//! Error types for evolve-query.
//!
//! A single [`Error`] enum covers the engine, the scoring oracle and the
//! interactive session. Every variant except
//! [`UnsupportedRecombinationMode`](Error::UnsupportedRecombinationMode)
//! is recoverable by the caller.

use thiserror::Error;

use crate::ga::RecombinationMode;

/// Errors raised by the evolutionary engine and its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// A sample asked for more distinct terms than are eligible.
    #[error("insufficient vocabulary: requested {requested} terms, {available} available")]
    InsufficientVocabulary { requested: usize, available: usize },

    /// Mutation was attempted without candidate terms.
    #[error("cannot mutate with an empty word pool")]
    EmptyWordPool,

    /// The scoring oracle result lacks a numeric score.
    #[error("malformed explanation: {0}")]
    MalformedExplanation(String),

    /// More individuals were requested for removal than exist.
    #[error("out of range: cannot remove {requested} of {size} individuals")]
    OutOfRange { requested: usize, size: usize },

    /// The population has no implementation for this recombination mode.
    #[error("recombination mode {0:?} not implemented")]
    UnsupportedRecombinationMode(RecombinationMode),

    /// Crossover between two individuals is not available.
    #[error("crossover between individuals is not supported")]
    CrossoverUnsupported,

    /// No document has been indexed yet.
    #[error("index is empty")]
    EmptyIndex,

    /// The oracle does not know the requested document id.
    #[error("unknown document id: {0}")]
    UnknownDocument(String),

    /// The operator input stream ended before a choice was made.
    #[error("input closed before an action was chosen")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error signals a programming or configuration mistake
    /// that must end the run instead of being recovered.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::UnsupportedRecombinationMode(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_recombination_mode_is_fatal() {
        assert!(Error::UnsupportedRecombinationMode(RecombinationMode::Crossover).is_fatal());
        assert!(!Error::EmptyWordPool.is_fatal());
        assert!(!Error::OutOfRange { requested: 4, size: 3 }.is_fatal());
        assert!(!Error::CrossoverUnsupported.is_fatal());
    }

    #[test]
    fn test_messages() {
        let err = Error::InsufficientVocabulary {
            requested: 3,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient vocabulary: requested 3 terms, 1 available"
        );
        assert_eq!(
            Error::UnsupportedRecombinationMode(RecombinationMode::Crossover).to_string(),
            "recombination mode Crossover not implemented"
        );
    }
}
