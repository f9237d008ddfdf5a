//! Monoalphabetic substitution cipher.

use super::Cipher;
use crate::text::{ALPHABET_LEN, CanonicalText, indices_to_string};

const N: usize = ALPHABET_LEN as usize;

/// Maps each plaintext letter to the letter at the same position of a
/// 26-letter key alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    forward: [u8; N],
    inverse: [u8; N],
}

impl Substitution {
    /// Builds the cipher from a permutation of the alphabet indices.
    ///
    /// `forward[i]` is the ciphertext letter for plaintext letter `i`. The
    /// caller guarantees `forward` is a permutation of `0..26`; the key
    /// validator is the only producer.
    pub(crate) fn from_permutation(forward: [u8; N]) -> Self {
        let mut inverse = [0u8; N];
        for (plain, &cipher) in forward.iter().enumerate() {
            inverse[cipher as usize] = plain as u8;
        }
        Substitution { forward, inverse }
    }

    /// Returns the cipher alphabet, e.g. `"QWERTYUIOPASDFGHJKLZXCVBNM"`.
    pub fn key(&self) -> String {
        indices_to_string(&self.forward)
    }
}

impl Cipher for Substitution {
    fn encode(&self, text: &CanonicalText) -> String {
        text.map_letters(|_, i| self.forward[i as usize])
    }

    fn decode(&self, text: &CanonicalText) -> String {
        text.map_letters(|_, i| self.inverse[i as usize])
    }
}
