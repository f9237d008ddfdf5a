//! Playfair digraph cipher over a 5×5 keyed grid.
//!
//! `J` shares a cell with `I`, so the grid holds 25 letters. Only letters
//! take part; everything else is stripped before pairing.
//!
//! Encoding is lossy on purpose: doubled letters inside a pair are split with
//! a filler and an odd final letter is padded, so decoding returns the
//! filler-expanded text (`HELLO` decodes back as `HELXLO`).

use super::{Cipher, FILLER, SECOND_FILLER};
use crate::text::{ALPHABET_LEN, CanonicalText, index_letter, letter_indices};

const SIDE: usize = 5;
const CELLS: usize = SIDE * SIDE;
const I: u8 = 8;
const J: u8 = 9;

/// Keyed 5×5 Playfair grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    grid: [u8; CELLS],
    /// `(row, column)` of every letter; `J` points at the `I` cell.
    positions: [(usize, usize); ALPHABET_LEN as usize],
}

impl Playfair {
    /// Builds the grid from a keyword.
    ///
    /// Letters of the keyword are placed first in order of first occurrence
    /// (with `J` folded into `I`), followed by the rest of the alphabet.
    /// Non-letters in the keyword are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ciphercraft::ciphers::Playfair;
    ///
    /// let grid = Playfair::new("playfair example");
    /// assert_eq!(grid.rows()[0], "PLAYF");
    /// assert_eq!(grid.rows()[1], "IREXM");
    /// ```
    pub fn new(keyword: &str) -> Self {
        let mut grid = [0u8; CELLS];
        let mut placed = [false; ALPHABET_LEN as usize];
        placed[J as usize] = true;

        let mut len = 0;
        let keyed = letter_indices(keyword).into_iter().map(fold_j);
        for letter in keyed.chain(0..ALPHABET_LEN) {
            if placed[letter as usize] {
                continue;
            }
            placed[letter as usize] = true;
            grid[len] = letter;
            len += 1;
        }

        let mut positions = [(0, 0); ALPHABET_LEN as usize];
        for (cell, &letter) in grid.iter().enumerate() {
            positions[letter as usize] = (cell / SIDE, cell % SIDE);
        }
        positions[J as usize] = positions[I as usize];

        Playfair { grid, positions }
    }

    /// Returns the grid as five strings of five letters.
    pub fn rows(&self) -> Vec<String> {
        self.grid
            .chunks(SIDE)
            .map(|row| row.iter().map(|&l| index_letter(l)).collect())
            .collect()
    }

    fn at(&self, row: usize, col: usize) -> u8 {
        self.grid[row * SIDE + col]
    }

    /// Substitutes one digraph. `step` is 1 to encode and `SIDE - 1` to
    /// decode, which moves right/down or left/up with wraparound.
    fn substitute(&self, a: u8, b: u8, step: usize) -> (u8, u8) {
        let (r1, c1) = self.positions[a as usize];
        let (r2, c2) = self.positions[b as usize];
        if r1 == r2 {
            (
                self.at(r1, (c1 + step) % SIDE),
                self.at(r2, (c2 + step) % SIDE),
            )
        } else if c1 == c2 {
            (
                self.at((r1 + step) % SIDE, c1),
                self.at((r2 + step) % SIDE, c2),
            )
        } else {
            (self.at(r1, c2), self.at(r2, c1))
        }
    }

    fn apply(&self, pairs: &[(u8, u8)], step: usize) -> String {
        let mut out = String::with_capacity(pairs.len() * 2);
        for &(a, b) in pairs {
            let (x, y) = self.substitute(a, b, step);
            out.push(index_letter(x));
            out.push(index_letter(y));
        }
        out
    }
}

impl Cipher for Playfair {
    fn encode(&self, text: &CanonicalText) -> String {
        self.apply(&plaintext_digraphs(&folded_letters(text)), 1)
    }

    fn decode(&self, text: &CanonicalText) -> String {
        let letters = folded_letters(text);
        let pairs: Vec<(u8, u8)> = letters
            .chunks(2)
            .map(|pair| {
                let a = pair[0];
                (a, pair.get(1).copied().unwrap_or_else(|| filler_for(a)))
            })
            .collect();
        self.apply(&pairs, SIDE - 1)
    }
}

fn fold_j(letter: u8) -> u8 {
    if letter == J { I } else { letter }
}

fn folded_letters(text: &CanonicalText) -> Vec<u8> {
    text.letters().into_iter().map(fold_j).collect()
}

fn filler_for(letter: u8) -> u8 {
    if letter == FILLER {
        SECOND_FILLER
    } else {
        FILLER
    }
}

/// Splits letters into digraphs, breaking doubled letters and padding an
/// odd tail with a filler.
fn plaintext_digraphs(letters: &[u8]) -> Vec<(u8, u8)> {
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        match letters.get(i + 1) {
            Some(&b) if b != a => {
                pairs.push((a, b));
                i += 2;
            }
            _ => {
                pairs.push((a, filler_for(a)));
                i += 1;
            }
        }
    }
    pairs
}
