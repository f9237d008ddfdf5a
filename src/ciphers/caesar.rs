//! Caesar shift cipher.

use super::Cipher;
use crate::text::{ALPHABET_LEN, CanonicalText};

/// Shifts every letter by a fixed amount; non-letters pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: u8,
}

impl Caesar {
    /// Creates a Caesar cipher, normalizing `shift` into `0..26`.
    ///
    /// Negative shifts wrap, so `-1` and `25` are the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ciphercraft::ciphers::{Caesar, Cipher};
    /// use ciphercraft::text::CanonicalText;
    ///
    /// let caesar = Caesar::new(3);
    /// assert_eq!(caesar.encode(&CanonicalText::new("xyz!")), "ABC!");
    /// assert_eq!(Caesar::new(-23), caesar);
    /// ```
    pub fn new(shift: i64) -> Self {
        Caesar {
            shift: shift.rem_euclid(ALPHABET_LEN as i64) as u8,
        }
    }

    /// Returns the normalized shift in `0..26`.
    pub fn shift(&self) -> u8 {
        self.shift
    }
}

impl Cipher for Caesar {
    fn encode(&self, text: &CanonicalText) -> String {
        text.map_letters(|_, i| i + self.shift)
    }

    fn decode(&self, text: &CanonicalText) -> String {
        text.map_letters(|_, i| i + ALPHABET_LEN - self.shift)
    }
}
