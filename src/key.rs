//! Key parameter validation.
//!
//! [`validate`] is the single point where a raw, user-supplied key parameter
//! is parsed and rejected. A successful parse yields a [`ValidatedKey`] that
//! already is the cipher for its algorithm, so nothing downstream checks the
//! key again.

use crate::ciphers::{
    Caesar, Cipher, ColumnarTransposition, Playfair, RailFence, Substitution, Vigenere,
};
use crate::engine::AlgorithmId;
use crate::error::ValidationError;
use crate::text::{ALPHABET_LEN, index_letter, letter_indices};

/// An algorithm-specific, already-checked key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedKey {
    Caesar(Caesar),
    Monoalphabetic(Substitution),
    Playfair(Playfair),
    Vigenere(Vigenere),
    Transposition(ColumnarTransposition),
    RailFence(RailFence),
}

impl ValidatedKey {
    /// Returns the algorithm this key belongs to.
    pub fn algorithm(&self) -> AlgorithmId {
        match self {
            ValidatedKey::Caesar(_) => AlgorithmId::Caesar,
            ValidatedKey::Monoalphabetic(_) => AlgorithmId::Monoalphabetic,
            ValidatedKey::Playfair(_) => AlgorithmId::Playfair,
            ValidatedKey::Vigenere(_) => AlgorithmId::Vigenere,
            ValidatedKey::Transposition(_) => AlgorithmId::Transposition,
            ValidatedKey::RailFence(_) => AlgorithmId::RailFence,
        }
    }

    /// Returns the cipher strategy backed by this key.
    pub fn cipher(&self) -> &dyn Cipher {
        match self {
            ValidatedKey::Caesar(c) => c,
            ValidatedKey::Monoalphabetic(c) => c,
            ValidatedKey::Playfair(c) => c,
            ValidatedKey::Vigenere(c) => c,
            ValidatedKey::Transposition(c) => c,
            ValidatedKey::RailFence(c) => c,
        }
    }
}

/// Parses and validates `raw` as a key for `algorithm`.
///
/// # Errors
/// Returns the [`ValidationError`] describing why the parameter does not fit
/// the algorithm. Validation has no side effects.
///
/// # Examples
///
/// ```
/// use ciphercraft::engine::AlgorithmId;
/// use ciphercraft::error::ValidationError;
/// use ciphercraft::key::validate;
///
/// assert!(validate(AlgorithmId::Transposition, "5 4 2 3 1 7 6").is_ok());
/// assert!(matches!(
///     validate(AlgorithmId::Transposition, "1 2 2"),
///     Err(ValidationError::InvalidPermutation { .. })
/// ));
/// ```
pub fn validate(algorithm: AlgorithmId, raw: &str) -> Result<ValidatedKey, ValidationError> {
    let key = match algorithm {
        AlgorithmId::Caesar => ValidatedKey::Caesar(Caesar::new(parse_integer(algorithm, raw)?)),
        AlgorithmId::Monoalphabetic => ValidatedKey::Monoalphabetic(parse_alphabet(raw)?),
        AlgorithmId::Playfair => {
            if raw.trim().is_empty() {
                return Err(ValidationError::EmptyKey { algorithm });
            }
            ValidatedKey::Playfair(Playfair::new(raw))
        }
        AlgorithmId::Vigenere => {
            let letters = letter_indices(raw);
            if letters.is_empty() {
                return Err(ValidationError::EmptyKey { algorithm });
            }
            ValidatedKey::Vigenere(Vigenere::from_indices(letters))
        }
        AlgorithmId::Transposition => {
            ValidatedKey::Transposition(ColumnarTransposition::from_ranks(parse_ranks(raw)?))
        }
        AlgorithmId::RailFence => {
            let rails = parse_integer(algorithm, raw)?;
            if rails < 2 {
                return Err(ValidationError::TooFewRails { rails });
            }
            // A count that does not fit in usize exceeds any text length and
            // behaves like a single rail per letter.
            ValidatedKey::RailFence(RailFence::new(usize::try_from(rails).unwrap_or(usize::MAX)))
        }
    };
    Ok(key)
}

fn parse_integer(algorithm: AlgorithmId, raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            algorithm,
            raw: raw.to_string(),
        })
}

/// Requires exactly 26 letters with each of `A..=Z` used once.
fn parse_alphabet(raw: &str) -> Result<Substitution, ValidationError> {
    let letters = letter_indices(raw);
    if letters.len() != ALPHABET_LEN as usize {
        return Err(ValidationError::WrongLength {
            count: letters.len(),
        });
    }

    let mut seen = [0usize; ALPHABET_LEN as usize];
    for &l in &letters {
        seen[l as usize] += 1;
    }
    let repeated: String = (0..ALPHABET_LEN)
        .filter(|&l| seen[l as usize] > 1)
        .map(index_letter)
        .collect();
    if !repeated.is_empty() {
        return Err(ValidationError::DuplicateLetters { letters: repeated });
    }

    let mut forward = [0u8; ALPHABET_LEN as usize];
    forward.copy_from_slice(&letters);
    Ok(Substitution::from_permutation(forward))
}

/// Parses a space-separated permutation of `1..=N` into zero-based ranks.
fn parse_ranks(raw: &str) -> Result<Vec<usize>, ValidationError> {
    let invalid = |detail: String| ValidationError::InvalidPermutation { detail };

    let mut ranks = Vec::new();
    for token in raw.split_whitespace() {
        let value: usize = token
            .parse()
            .map_err(|_| invalid(format!("{token:?} is not a positive integer")))?;
        if value == 0 {
            return Err(invalid("column numbers start at 1".to_string()));
        }
        ranks.push(value - 1);
    }
    if ranks.is_empty() {
        return Err(invalid("no column numbers given".to_string()));
    }

    let n = ranks.len();
    let mut seen = vec![false; n];
    for &rank in &ranks {
        if rank >= n {
            return Err(invalid(format!("{} is larger than {n}", rank + 1)));
        }
        if seen[rank] {
            return Err(invalid(format!("{} appears more than once", rank + 1)));
        }
        seen[rank] = true;
    }
    Ok(ranks)
}
