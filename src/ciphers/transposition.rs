//! Keyed columnar transposition.
//!
//! Letters are written row by row into a grid with one column per key entry,
//! the last row padded with [`FILLER`](super::FILLER). Columns are then read
//! top to bottom in the order given by the key's ranks: the column labelled
//! `1` first, then `2`, and so on.

use super::{Cipher, FILLER};
use crate::text::{CanonicalText, indices_to_string};

/// Columnar transposition keyed by a permutation of `1..=N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnarTransposition {
    /// Rank (zero-based) of each grid column, as written in the key.
    ranks: Vec<usize>,
    /// Grid columns in read-out order.
    read_order: Vec<usize>,
}

impl ColumnarTransposition {
    /// Builds the cipher from zero-based column ranks.
    ///
    /// The caller guarantees `ranks` is a non-empty permutation of
    /// `0..ranks.len()`.
    pub(crate) fn from_ranks(ranks: Vec<usize>) -> Self {
        let mut read_order = vec![0; ranks.len()];
        for (column, &rank) in ranks.iter().enumerate() {
            read_order[rank] = column;
        }
        ColumnarTransposition { ranks, read_order }
    }

    /// Number of grid columns.
    pub fn columns(&self) -> usize {
        self.ranks.len()
    }

    /// Returns the key as written, e.g. `[5, 4, 2, 3, 1, 7, 6]`.
    pub fn key(&self) -> Vec<usize> {
        self.ranks.iter().map(|r| r + 1).collect()
    }
}

impl Cipher for ColumnarTransposition {
    fn encode(&self, text: &CanonicalText) -> String {
        let n = self.columns();
        let mut grid = text.letters();
        let rows = grid.len().div_ceil(n);
        grid.resize(rows * n, FILLER);

        let mut out = Vec::with_capacity(grid.len());
        for &column in &self.read_order {
            out.extend((0..rows).map(|row| grid[row * n + column]));
        }
        indices_to_string(&out)
    }

    /// Rebuilds the grid column by column and reads it row-major.
    ///
    /// Ciphertext whose length is not a multiple of the column count is
    /// treated as an unpadded grid whose last row is short. Padded input has
    /// up to `N - 1` trailing fillers removed, which also eats genuine
    /// trailing `X`s of the plaintext.
    fn decode(&self, text: &CanonicalText) -> String {
        let n = self.columns();
        let letters = text.letters();
        let rows = letters.len().div_ceil(n);
        let full_columns = match letters.len() % n {
            0 => n,
            r => r,
        };

        let mut grid: Vec<Option<u8>> = vec![None; rows * n];
        let mut source = letters.iter();
        for &column in &self.read_order {
            let height = if column < full_columns { rows } else { rows - 1 };
            for row in 0..height {
                grid[row * n + column] = source.next().copied();
            }
        }

        let mut out: Vec<u8> = grid.into_iter().flatten().collect();
        if letters.len() % n == 0 {
            let mut trimmed = 0;
            while trimmed < n - 1 && out.last() == Some(&FILLER) {
                out.pop();
                trimmed += 1;
            }
        }
        indices_to_string(&out)
    }
}
