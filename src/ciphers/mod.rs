//! The six classical cipher strategies.
//!
//! Each strategy is a validated key type implementing [`Cipher`]. Building
//! the key is the only step that can fail (see [`crate::key`]); once a key
//! exists, encoding and decoding are total over any input.
//!
//! ```text
//! substitution family (non-letters kept in place)
//!     Caesar, Substitution, Vigenere
//! grid / route family (non-letters stripped)
//!     Playfair, ColumnarTransposition, RailFence
//! ```

pub mod caesar;
pub mod playfair;
pub mod rail_fence;
pub mod substitution;
pub mod transposition;
pub mod vigenere;

pub use caesar::Caesar;
pub use playfair::Playfair;
pub use rail_fence::RailFence;
pub use substitution::Substitution;
pub use transposition::ColumnarTransposition;
pub use vigenere::Vigenere;

use crate::engine::Direction;
use crate::text::CanonicalText;

/// Letter used to pad incomplete blocks and split doubled Playfair letters.
pub const FILLER: u8 = b'X' - b'A';

/// Filler used when the letter being split or padded is itself [`FILLER`].
pub const SECOND_FILLER: u8 = b'Q' - b'A';

/// A keyed, invertible text transformation.
pub trait Cipher {
    /// Encrypts canonical text. The result is uppercase.
    fn encode(&self, text: &CanonicalText) -> String;

    /// Decrypts canonical text. The result is uppercase.
    fn decode(&self, text: &CanonicalText) -> String;

    /// Runs [`encode`](Self::encode) or [`decode`](Self::decode).
    fn transform(&self, text: &CanonicalText, direction: Direction) -> String {
        match direction {
            Direction::Encode => self.encode(text),
            Direction::Decode => self.decode(text),
        }
    }
}
