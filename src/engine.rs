//! Algorithm dispatcher.
//!
//! [`run`] turns a [`TransformRequest`] into a [`TransformResult`]:
//!
//! ```text
//! request ─► validate key ─► canonicalize text ─► cipher ─► format ─► result
//!                 │
//!                 └─► EngineError::InvalidParameter
//! ```
//!
//! The engine holds no state between calls; every request is independent and
//! may run in parallel with any other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, ParseIdError};
use crate::format::{self, FormatOptions, TransformResult};
use crate::key;
use crate::text::CanonicalText;

/// Whether to encrypt or decrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    /// Lowercase identifier, `"encode"` or `"decode"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseIdError;

    /// Accepts `encode`/`encrypt` and `decode`/`decrypt`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encode" | "encrypt" => Ok(Direction::Encode),
            "decode" | "decrypt" => Ok(Direction::Decode),
            _ => Err(ParseIdError {
                what: "operation",
                value: s.to_string(),
            }),
        }
    }
}

/// The closed set of supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmId {
    Caesar,
    Monoalphabetic,
    Playfair,
    Vigenere,
    Transposition,
    RailFence,
}

impl AlgorithmId {
    /// Every algorithm, in presentation order.
    pub const ALL: [AlgorithmId; 6] = [
        AlgorithmId::Caesar,
        AlgorithmId::Monoalphabetic,
        AlgorithmId::Playfair,
        AlgorithmId::Vigenere,
        AlgorithmId::Transposition,
        AlgorithmId::RailFence,
    ];

    /// Canonical lowercase identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Caesar => "caesar",
            AlgorithmId::Monoalphabetic => "monoalphabetic",
            AlgorithmId::Playfair => "playfair",
            AlgorithmId::Vigenere => "vigenere",
            AlgorithmId::Transposition => "transposition",
            AlgorithmId::RailFence => "railfence",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = match s.trim().to_ascii_lowercase().as_str() {
            "caesar" => AlgorithmId::Caesar,
            "monoalphabetic" | "mono" | "substitution" => AlgorithmId::Monoalphabetic,
            "playfair" => AlgorithmId::Playfair,
            "vigenere" | "vigenère" => AlgorithmId::Vigenere,
            "transposition" | "columnar" => AlgorithmId::Transposition,
            "railfence" | "rail-fence" | "rail_fence" => AlgorithmId::RailFence,
            _ => {
                return Err(ParseIdError {
                    what: "algorithm",
                    value: s.to_string(),
                });
            }
        };
        Ok(id)
    }
}

/// One self-contained transformation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    pub direction: Direction,
    pub algorithm: AlgorithmId,
    /// Raw key parameter as typed by the user.
    pub key: String,
    pub text: String,
}

impl TransformRequest {
    pub fn new(
        direction: Direction,
        algorithm: AlgorithmId,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        TransformRequest {
            direction,
            algorithm,
            key: key.into(),
            text: text.into(),
        }
    }
}

/// Runs a request with default formatting (no steps, no grouping).
///
/// # Errors
/// Returns [`EngineError::InvalidParameter`] when the key is rejected; no
/// cipher runs in that case.
///
/// # Examples
///
/// ```
/// use ciphercraft::engine::{run, AlgorithmId, Direction, TransformRequest};
///
/// let request = TransformRequest::new(Direction::Encode, AlgorithmId::Caesar, "3", "abc");
/// assert_eq!(run(&request).unwrap().result, "DEF");
/// ```
pub fn run(request: &TransformRequest) -> Result<TransformResult, EngineError> {
    run_with(request, &FormatOptions::default())
}

/// Runs a request with explicit formatting options.
///
/// # Errors
/// Same as [`run`].
pub fn run_with(
    request: &TransformRequest,
    options: &FormatOptions,
) -> Result<TransformResult, EngineError> {
    tracing::debug!(
        algorithm = %request.algorithm,
        direction = %request.direction,
        text_len = request.text.len(),
        "transform request"
    );

    let key = key::validate(request.algorithm, &request.key).map_err(|e| {
        tracing::debug!(algorithm = %request.algorithm, reason = %e, "key rejected");
        EngineError::InvalidParameter(e)
    })?;

    let text = CanonicalText::new(&request.text);
    let output = key.cipher().transform(&text, request.direction);

    Ok(format::format(
        &output,
        request.direction,
        request.algorithm,
        options,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_direction_aliases() {
        assert_eq!("encrypt".parse::<Direction>().unwrap(), Direction::Encode);
        assert_eq!("Decode".parse::<Direction>().unwrap(), Direction::Decode);
        assert!("scramble".parse::<Direction>().is_err());
    }

    #[test]
    fn test_algorithm_ids_roundtrip_display() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.to_string().parse::<AlgorithmId>().unwrap(), id);
        }
        assert_eq!(
            "rail-fence".parse::<AlgorithmId>().unwrap(),
            AlgorithmId::RailFence
        );
        assert_eq!(
            "enigma".parse::<AlgorithmId>(),
            Err(ParseIdError {
                what: "algorithm",
                value: "enigma".to_string()
            })
        );
    }

    #[test]
    fn test_run_encodes_and_uppercases() {
        let request = TransformRequest::new(
            Direction::Encode,
            AlgorithmId::Vigenere,
            "lemon",
            "attack at dawn",
        );
        let result = run(&request).unwrap();
        assert_eq!(result.result, "LXFOPV EF RNHR");
        assert!(result.steps.is_none());
    }

    #[test]
    fn test_run_short_circuits_on_bad_key() {
        let request = TransformRequest::new(
            Direction::Encode,
            AlgorithmId::Monoalphabetic,
            "ABC",
            "text",
        );
        assert_eq!(
            run(&request),
            Err(EngineError::InvalidParameter(
                ValidationError::WrongLength { count: 3 }
            ))
        );
    }

    #[test]
    fn test_run_with_steps() {
        let request = TransformRequest::new(Direction::Decode, AlgorithmId::Caesar, "3", "DEF");
        let options = FormatOptions {
            show_steps: true,
            group_size: None,
        };
        let result = run_with(&request, &options).unwrap();
        assert_eq!(result.result, "ABC");
        assert_eq!(result.steps.map(|s| s.len()), Some(4));
    }

    #[test]
    fn test_direction_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Direction::Encode).unwrap(),
            "\"encode\""
        );
    }
}
