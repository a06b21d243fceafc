//! Dictionary word representation
//!
//! A `Word` is a validated five-letter lowercase word. It keeps an index of the
//! slots each letter occupies so the matcher can answer repeated-letter
//! questions without rescanning.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of slots in every word, feedback row and constraint set
pub const WORD_LEN: usize = 5;

/// A five-letter word with per-letter slot tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
    slots: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "word must contain only the letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Upper case input is folded to lower case.
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("cranes").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let mut slots: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (slot, &ch) in chars.iter().enumerate() {
            slots.entry(ch).or_default().push(slot);
        }

        Ok(Self { text, chars, slots })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a slot (0-4)
    ///
    /// # Panics
    /// Panics if `slot >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn char_at(&self, slot: usize) -> u8 {
        self.chars[slot]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.slots.contains_key(&letter)
    }

    /// Get all slots where a letter appears, in ascending order
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.slots.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Check whether the letter at `slot` appears again at a later slot
    #[must_use]
    pub fn repeats_after(&self, slot: usize) -> bool {
        self.positions_of(self.chars[slot])
            .iter()
            .any(|&other| other > slot)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("CrAnE").unwrap(), Word::new("crane").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("cranes"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(matches!(Word::new("cran"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(Word::new("cr ne").is_err());
        assert!(matches!(Word::new("créne"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crimp").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(2), b'i');
        assert_eq!(word.char_at(4), b'p');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'a'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.positions_of(b'e'), &[2, 3]);
        assert_eq!(word.positions_of(b's'), &[0]);
        assert_eq!(word.positions_of(b'z'), &[] as &[usize]);
    }

    #[test]
    fn repeats_after_only_looks_forward() {
        let word = Word::new("speed").unwrap();
        assert!(word.repeats_after(2));
        assert!(!word.repeats_after(3));
        assert!(!word.repeats_after(0));

        let unique = Word::new("crane").unwrap();
        assert!((0..WORD_LEN).all(|slot| !unique.repeats_after(slot)));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
