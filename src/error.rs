//! Error types for the CipherCraft engine.

use thiserror::Error;

use crate::engine::AlgorithmId;

/// A key parameter that was rejected before any transformation ran.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The parameter must be an integer (Caesar shift, rail count).
    #[error("{algorithm} parameter must be an integer, got {raw:?}")]
    NotAnInteger { algorithm: AlgorithmId, raw: String },
    /// Monoalphabetic key does not contain exactly 26 letters.
    #[error("key must be exactly 26 letters (provided {count} letters)")]
    WrongLength { count: usize },
    /// Monoalphabetic key repeats at least one letter.
    #[error("key must contain 26 unique letters, repeated: {letters}")]
    DuplicateLetters { letters: String },
    /// Keyword is empty once non-letters are removed.
    #[error("{algorithm} key must contain at least one letter")]
    EmptyKey { algorithm: AlgorithmId },
    /// Column order is not a permutation of `1..=N`.
    #[error("column order must be a permutation of 1..N: {detail}")]
    InvalidPermutation { detail: String },
    /// Rail count below the minimum of 2.
    #[error("rail count must be at least 2, got {rails}")]
    TooFewRails { rails: i64 },
}

impl ValidationError {
    /// Returns the algorithm whose parameter was rejected.
    pub fn algorithm(&self) -> AlgorithmId {
        match self {
            ValidationError::NotAnInteger { algorithm, .. }
            | ValidationError::EmptyKey { algorithm } => *algorithm,
            ValidationError::WrongLength { .. } | ValidationError::DuplicateLetters { .. } => {
                AlgorithmId::Monoalphabetic
            }
            ValidationError::InvalidPermutation { .. } => AlgorithmId::Transposition,
            ValidationError::TooFewRails { .. } => AlgorithmId::RailFence,
        }
    }
}

/// Errors returned by [`run`](crate::engine::run).
///
/// Once a key is validated every cipher is total, so the only failure is a
/// rejected parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ValidationError),
}

impl EngineError {
    /// Stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::InvalidParameter(_) => "invalid_parameter",
        }
    }
}

/// An operation or algorithm identifier that names nothing we support.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what}: {value:?}")]
pub struct ParseIdError {
    pub what: &'static str,
    pub value: String,
}
