//! Letter constraints for one row of the search
//!
//! Each slot carries a (possibly empty) list of allowed letters, and a single
//! global set marks letters excluded from every unconstrained slot.

use super::word::WORD_LEN;
use std::fmt;

const ALPHABET: usize = 26;

/// Allowed letters per slot plus a global exclusion set
///
/// An empty `must_be` slot places no positive constraint: any letter not in
/// `cannot_be` may go there. Constraints only ever narrow. There is no removal
/// operation, and each search branch owns its own copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    must_be: [Vec<u8>; WORD_LEN],
    cannot_be: [bool; ALPHABET],
}

#[inline]
fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
    usize::from(letter - b'a')
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `slot` to `letter`
    ///
    /// The letter is also added to the global exclusion set. Slot checks use
    /// `must_be` first, so this only affects other, unconstrained slots.
    pub fn record_green(&mut self, letter: u8, slot: usize) {
        self.must_be[slot] = vec![letter];
        self.exclude(letter);
    }

    /// Exclude `letter` from every unconstrained slot
    pub fn record_gray(&mut self, letter: u8) {
        self.exclude(letter);
    }

    /// Replace the allowed letters for `slot`
    pub fn record_yellow(&mut self, slot: usize, allowed: Vec<u8>) {
        self.must_be[slot] = allowed;
    }

    fn exclude(&mut self, letter: u8) {
        self.cannot_be[letter_index(letter)] = true;
    }

    /// Allowed letters for a slot; empty means unconstrained
    #[inline]
    #[must_use]
    pub fn must_be(&self, slot: usize) -> &[u8] {
        &self.must_be[slot]
    }

    #[inline]
    #[must_use]
    pub fn is_excluded(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.cannot_be[letter_index(letter)]
    }

    /// Excluded letters in alphabetical order
    pub fn excluded_letters(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(|&letter| self.is_excluded(letter))
    }

    /// No slot constraint and no exclusion
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.must_be.iter().all(Vec::is_empty) && !self.cannot_be.contains(&true)
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let excluded: String = self.excluded_letters().map(char::from).collect();
        write!(f, "cannot_be: {excluded} must_be:")?;
        for allowed in &self.must_be {
            if allowed.is_empty() {
                write!(f, " *")?;
            } else {
                write!(f, " {}", String::from_utf8_lossy(allowed))?;
            }
        }
        Ok(())
    }
}
