//! CipherCraft classical cipher engine.
//!
//! A stateless engine for six historical ciphers used in cipher training:
//! Caesar, monoalphabetic substitution, Playfair, Vigenère, keyed columnar
//! transposition and rail fence. These are teaching ciphers and offer no
//! security.
//!
//! # Architecture
//!
//! ```text
//! CanonicalText   (text — case folding, letter/other classification)
//!     ↓
//! ValidatedKey    (key — the only place a parameter can be rejected)
//!     ↓ is a
//! Cipher          (ciphers — six total, invertible strategies)
//!     ↓
//! TransformResult (format — uppercase result, optional display steps)
//! ```
//!
//! [`engine::run`] wires these together for one request; [`server`] exposes
//! the same call over HTTP.
//!
//! # Examples
//!
//! Encrypt and decrypt with Vigenère:
//!
//! ```
//! use ciphercraft::engine::{run, AlgorithmId, Direction, TransformRequest};
//!
//! let encoded = run(&TransformRequest::new(
//!     Direction::Encode,
//!     AlgorithmId::Vigenere,
//!     "LEMON",
//!     "Attack at dawn",
//! ))
//! .unwrap();
//! assert_eq!(encoded.result, "LXFOPV EF RNHR");
//!
//! let decoded = run(&TransformRequest::new(
//!     Direction::Decode,
//!     AlgorithmId::Vigenere,
//!     "LEMON",
//!     encoded.result,
//! ))
//! .unwrap();
//! assert_eq!(decoded.result, "ATTACK AT DAWN");
//! ```
//!
//! Rejected keys never reach a cipher:
//!
//! ```
//! use ciphercraft::engine::{run, AlgorithmId, Direction, TransformRequest};
//! use ciphercraft::error::{EngineError, ValidationError};
//!
//! let request = TransformRequest::new(Direction::Encode, AlgorithmId::RailFence, "1", "text");
//! assert_eq!(
//!     run(&request),
//!     Err(EngineError::InvalidParameter(ValidationError::TooFewRails { rails: 1 }))
//! );
//! ```

#![deny(clippy::all)]

pub mod ciphers;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod key;
pub mod server;
pub mod text;

pub use engine::{AlgorithmId, Direction, TransformRequest, run};
pub use error::{EngineError, ValidationError};
pub use format::TransformResult;
