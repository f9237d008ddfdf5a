//! Rail fence (zig-zag) transposition.

use super::Cipher;
use crate::text::{CanonicalText, indices_to_string};

/// Writes letters diagonally across a number of rails and reads them rail
/// by rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    /// Creates a rail fence with the given number of rails.
    ///
    /// Any count is accepted here. With one rail, or at least as many rails
    /// as letters, the zig-zag never turns and the letters come out in their
    /// original order. The key validator rejects counts below 2 before they
    /// reach this point.
    ///
    /// # Examples
    ///
    /// ```
    /// use ciphercraft::ciphers::{Cipher, RailFence};
    /// use ciphercraft::text::CanonicalText;
    ///
    /// let fence = RailFence::new(3);
    /// let text = CanonicalText::new("WE ARE DISCOVERED");
    /// assert_eq!(fence.encode(&text), "WECRERDSOEEAIVD");
    /// ```
    pub fn new(rails: usize) -> Self {
        RailFence { rails }
    }

    /// Returns the rail count.
    pub fn rails(&self) -> usize {
        self.rails
    }

    fn is_degenerate(&self, len: usize) -> bool {
        self.rails < 2 || self.rails >= len
    }

    /// Rail index visited by each position of a text of length `len`.
    fn pattern(&self, len: usize) -> Vec<usize> {
        let mut pattern = Vec::with_capacity(len);
        let mut rail = 0;
        let mut down = true;
        for _ in 0..len {
            pattern.push(rail);
            if rail == 0 {
                down = true;
            } else if rail == self.rails - 1 {
                down = false;
            }
            if down {
                rail += 1;
            } else {
                rail -= 1;
            }
        }
        pattern
    }
}

impl Cipher for RailFence {
    fn encode(&self, text: &CanonicalText) -> String {
        let letters = text.letters();
        if self.is_degenerate(letters.len()) {
            return indices_to_string(&letters);
        }

        let mut fence: Vec<Vec<u8>> = vec![Vec::new(); self.rails];
        for (&letter, rail) in letters.iter().zip(self.pattern(letters.len())) {
            fence[rail].push(letter);
        }
        indices_to_string(&fence.concat())
    }

    fn decode(&self, text: &CanonicalText) -> String {
        let letters = text.letters();
        if self.is_degenerate(letters.len()) {
            return indices_to_string(&letters);
        }

        let pattern = self.pattern(letters.len());
        let mut counts = vec![0usize; self.rails];
        for &rail in &pattern {
            counts[rail] += 1;
        }

        // Start offset of each rail's segment in the ciphertext.
        let mut cursors = Vec::with_capacity(self.rails);
        let mut start = 0;
        for count in counts {
            cursors.push(start);
            start += count;
        }

        let mut out = Vec::with_capacity(letters.len());
        for rail in pattern {
            out.push(letters[cursors[rail]]);
            cursors[rail] += 1;
        }
        indices_to_string(&out)
    }
}
