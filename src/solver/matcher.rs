//! Candidate word filtering against a constraint set

use crate::core::{ConstraintSet, WORD_LEN, Word};

/// Check whether `word` is consistent with `con` for the given solution
///
/// For every slot the letter must be one of the slot's allowed letters, or, if
/// the slot is unconstrained, must not be globally excluded. A letter that
/// occurs in the solution must also not appear again later in `word`; this is a
/// coarse duplicate-letter guard, not a full multiplicity model.
///
/// # Examples
/// ```
/// use reverse_wordle::core::{ConstraintSet, Word};
/// use reverse_wordle::solver::matches;
///
/// let solution = Word::new("crane").unwrap();
/// let mut con = ConstraintSet::new();
/// con.record_green(b'c', 0);
///
/// assert!(matches(&Word::new("clump").unwrap(), &con, &solution));
/// assert!(!matches(&Word::new("plumb").unwrap(), &con, &solution));
/// ```
#[must_use]
pub fn matches(word: &Word, con: &ConstraintSet, solution: &Word) -> bool {
    (0..WORD_LEN).all(|slot| slot_matches(word, con, solution, slot))
}

fn slot_matches(word: &Word, con: &ConstraintSet, solution: &Word, slot: usize) -> bool {
    let letter = word.char_at(slot);
    let allowed = con.must_be(slot);

    let fits = if allowed.is_empty() {
        !con.is_excluded(letter)
    } else {
        allowed.contains(&letter)
    };

    fits && !(solution.has_letter(letter) && word.repeats_after(slot))
}
