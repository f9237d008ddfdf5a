//! Vigenère polyalphabetic cipher.

use super::Cipher;
use crate::text::{ALPHABET_LEN, CanonicalText, indices_to_string};

/// Adds a repeating keyword to the letters of the text.
///
/// The keyword advances only on letters, so punctuation and spaces are
/// passed through without consuming a key letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    key: Vec<u8>,
}

impl Vigenere {
    /// Builds the cipher from non-empty keyword alphabet indices.
    pub(crate) fn from_indices(key: Vec<u8>) -> Self {
        debug_assert!(!key.is_empty());
        Vigenere { key }
    }

    /// Returns the keyword in uppercase.
    pub fn key(&self) -> String {
        indices_to_string(&self.key)
    }

    fn offset(&self, ordinal: usize) -> u8 {
        self.key[ordinal % self.key.len()]
    }
}

impl Cipher for Vigenere {
    fn encode(&self, text: &CanonicalText) -> String {
        text.map_letters(|n, i| i + self.offset(n))
    }

    fn decode(&self, text: &CanonicalText) -> String {
        text.map_letters(|n, i| i + ALPHABET_LEN - self.offset(n))
    }
}
