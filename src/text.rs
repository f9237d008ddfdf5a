//! Text canonicalization shared by every cipher.
//!
//! Input text is folded to uppercase and split into a sequence of
//! [`Symbol`]s: ASCII letters become alphabet indices (`A` = 0 .. `Z` = 25),
//! everything else is kept verbatim as [`Symbol::Other`]. Ciphers then pick
//! their own policy for the non-letter symbols: substitution ciphers rebuild
//! the interleaved text through [`CanonicalText::map_letters`], grid and
//! route ciphers work on the letter projection from [`CanonicalText::letters`].

/// Number of letters in the Latin alphabet used by every cipher.
pub const ALPHABET_LEN: u8 = 26;

/// One classified character of canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Alphabet index in `0..26`.
    Letter(u8),
    /// Any character that is not an ASCII letter, kept as written.
    Other(char),
}

/// Case-folded, classified view of an input string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalText {
    symbols: Vec<Symbol>,
}

impl CanonicalText {
    /// Canonicalizes `text`. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use ciphercraft::text::CanonicalText;
    ///
    /// let text = CanonicalText::new("Hi, Bob!");
    /// assert_eq!(text.letters_string(), "HIBOB");
    /// assert_eq!(text.to_string(), "HI, BOB!");
    /// ```
    pub fn new(text: &str) -> Self {
        let symbols = text
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Symbol::Letter(letter_index(c))
                } else {
                    Symbol::Other(c)
                }
            })
            .collect();
        CanonicalText { symbols }
    }

    /// Returns the classified symbols in input order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns the alphabetic projection as alphabet indices.
    pub fn letters(&self) -> Vec<u8> {
        self.symbols
            .iter()
            .filter_map(|s| match s {
                Symbol::Letter(i) => Some(*i),
                Symbol::Other(_) => None,
            })
            .collect()
    }

    /// Returns the alphabetic projection as an uppercase string.
    pub fn letters_string(&self) -> String {
        self.letters().into_iter().map(index_letter).collect()
    }

    /// Number of letters in the text, ignoring everything else.
    pub fn letter_count(&self) -> usize {
        self.symbols
            .iter()
            .filter(|s| matches!(s, Symbol::Letter(_)))
            .count()
    }

    /// Rebuilds the text with every letter replaced through `f`, leaving
    /// non-letters at their original positions.
    ///
    /// `f` receives the ordinal of the letter among letters only (so a
    /// keyword cipher can advance its key without counting punctuation)
    /// and the alphabet index, and returns the new alphabet index.
    pub fn map_letters<F>(&self, mut f: F) -> String
    where
        F: FnMut(usize, u8) -> u8,
    {
        let mut ordinal = 0;
        let mut out = String::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            match *symbol {
                Symbol::Letter(i) => {
                    out.push(index_letter(f(ordinal, i) % ALPHABET_LEN));
                    ordinal += 1;
                }
                Symbol::Other(c) => out.push(c),
            }
        }
        out
    }
}

impl std::fmt::Display for CanonicalText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self.map_letters(|_, i| i);
        f.write_str(&text)
    }
}

/// Converts an ASCII letter of either case to its alphabet index.
///
/// Callers must only pass ASCII letters.
pub(crate) fn letter_index(c: char) -> u8 {
    (c.to_ascii_uppercase() as u8) - b'A'
}

/// Converts an alphabet index (`0..26`) to its uppercase letter.
pub(crate) fn index_letter(i: u8) -> char {
    (b'A' + i) as char
}

/// Strips non-letters from `raw` and folds the rest to alphabet indices.
pub(crate) fn letter_indices(raw: &str) -> Vec<u8> {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(letter_index)
        .collect()
}

/// Renders alphabet indices as an uppercase string.
pub(crate) fn indices_to_string(indices: &[u8]) -> String {
    indices.iter().map(|&i| index_letter(i)).collect()
}
