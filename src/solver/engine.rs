//! Constraint derivation from feedback rows
//!
//! Turns one row's feedback, the adjacent row nearer the solution, and the word
//! already placed on that adjacent row into updates on a `ConstraintSet`.

use crate::core::{ConstraintSet, Feedback, FeedbackGrid, Tile, Word};
use std::fmt;

/// Programming errors in the search driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Row 0 holds the solution and has no neighbour nearer the solution
    SolutionRow,
    /// Row index is past the last feedback row
    RowOutOfRange { row: usize, guess_rows: usize },
    /// A yellow tile needs the feedback of the adjacent row, and row 1 only
    /// borders the solution word
    NoAdjacentFeedback { row: usize, slot: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SolutionRow => {
                write!(f, "invariant violated: cannot derive constraints for the solution row")
            }
            Self::RowOutOfRange { row, guess_rows } => write!(
                f,
                "invariant violated: row {row} is outside the {guess_rows} feedback rows"
            ),
            Self::NoAdjacentFeedback { row, slot } => write!(
                f,
                "invariant violated: yellow tile at row {row} slot {slot} has no adjacent feedback row"
            ),
        }
    }
}

impl std::error::Error for SolveError {}

/// Derives per-row constraints from a feedback grid
#[derive(Debug, Clone, Copy)]
pub struct ConstraintEngine<'g> {
    grid: &'g FeedbackGrid,
}

impl<'g> ConstraintEngine<'g> {
    #[must_use]
    pub const fn new(grid: &'g FeedbackGrid) -> Self {
        Self { grid }
    }

    #[must_use]
    pub const fn grid(&self) -> &'g FeedbackGrid {
        self.grid
    }

    /// Letters a yellow tile on `cur` may stand for
    ///
    /// Collects `next_word[k]` for every slot `k` that is green or yellow on
    /// `next`, skipping slots the current row already resolved: green on both
    /// rows, green on `next` over yellow on `cur`, or yellow on both. The
    /// result does not depend on which yellow slot asks.
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::{Feedback, Word};
    /// use reverse_wordle::solver::ConstraintEngine;
    ///
    /// let cur = Feedback::parse("g-y--").unwrap();
    /// let next = Feedback::parse("gg-yg").unwrap();
    /// let word = Word::new("crimp").unwrap();
    /// assert_eq!(ConstraintEngine::derive_yellow(&cur, &next, &word), b"rmp");
    /// ```
    #[must_use]
    pub fn derive_yellow(cur: &Feedback, next: &Feedback, next_word: &Word) -> Vec<u8> {
        cur.tiles()
            .iter()
            .zip(next.tiles())
            .zip(next_word.chars())
            .filter_map(|((&here, &there), &letter)| {
                let resolved = matches!(
                    (there, here),
                    (Tile::Green, Tile::Green | Tile::Yellow) | (Tile::Yellow, Tile::Yellow)
                );
                (there.is_present() && !resolved).then_some(letter)
            })
            .collect()
    }

    /// Fold the feedback of grid row `row` into `con`
    ///
    /// `parent_word` is the word placed on row `row - 1`. Green slots pin that
    /// word's letter, gray slots exclude it, and yellow slots take the set from
    /// [`Self::derive_yellow`]. `con` is left untouched on error.
    ///
    /// # Errors
    /// Returns `SolveError` if `row` is the solution row or past the last
    /// feedback row, or if a yellow tile sits on row 1, whose only neighbour
    /// is the solution word.
    pub fn integrate_row(
        &self,
        row: usize,
        parent_word: &Word,
        con: &mut ConstraintSet,
    ) -> Result<(), SolveError> {
        if row == 0 {
            return Err(SolveError::SolutionRow);
        }
        let cur = self.grid.feedback(row).ok_or(SolveError::RowOutOfRange {
            row,
            guess_rows: self.grid.guess_rows(),
        })?;

        let first_yellow = cur.tiles().iter().position(|&t| t == Tile::Yellow);
        let yellow = match (self.grid.feedback(row - 1), first_yellow) {
            (_, None) => Vec::new(),
            (Some(next), Some(_)) => Self::derive_yellow(&cur, &next, parent_word),
            (None, Some(slot)) => return Err(SolveError::NoAdjacentFeedback { row, slot }),
        };

        for (slot, &tile) in cur.tiles().iter().enumerate() {
            let letter = parent_word.char_at(slot);
            match tile {
                Tile::Green => con.record_green(letter, slot),
                Tile::Gray => con.record_gray(letter),
                Tile::Yellow => con.record_yellow(slot, yellow.clone()),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(s: &str) -> Feedback {
        Feedback::parse(s).unwrap()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn derive_yellow_skips_resolved_slots() {
        // slot 0 is green on both rows, slot 2 is green over yellow
        let allowed =
            ConstraintEngine::derive_yellow(&feedback("g-y--"), &feedback("gggyy"), &word("crimp"));
        assert_eq!(allowed, b"rmp");
    }

    #[test]
    fn derive_yellow_skips_green_over_yellow() {
        let allowed =
            ConstraintEngine::derive_yellow(&feedback("y----"), &feedback("g---g"), &word("stare"));
        assert_eq!(allowed, b"e");
    }

    #[test]
    fn derive_yellow_keeps_yellow_over_green() {
        // next yellow over current green is not in the skip list
        let allowed =
            ConstraintEngine::derive_yellow(&feedback("g-y--"), &feedback("y----"), &word("lunar"));
        assert_eq!(allowed, b"l");
    }

    #[test]
    fn derive_yellow_ignores_gray_next_tiles() {
        let allowed =
            ConstraintEngine::derive_yellow(&feedback("--y--"), &feedback("-----"), &word("crane"));
        assert!(allowed.is_empty());
    }

    #[test]
    fn derive_yellow_is_deterministic() {
        let cur = feedback("-yy-g");
        let next = feedback("yg-gy");
        let w = word("plumb");
        let first = ConstraintEngine::derive_yellow(&cur, &next, &w);
        let second = ConstraintEngine::derive_yellow(&cur, &next, &w);
        assert_eq!(first, second);
    }

    #[test]
    fn integrate_first_row_against_solution() {
        let grid = FeedbackGrid::from_lines(["crane", "g-g--"]).unwrap();
        let engine = ConstraintEngine::new(&grid);
        let mut con = ConstraintSet::new();

        engine.integrate_row(1, grid.solution(), &mut con).unwrap();

        assert_eq!(con.must_be(0), b"c");
        assert!(con.must_be(1).is_empty());
        assert_eq!(con.must_be(2), b"a");
        assert!(con.must_be(3).is_empty());
        // green letters and gray letters are all globally excluded
        let excluded: Vec<u8> = con.excluded_letters().collect();
        assert_eq!(excluded, b"acenr");
    }

    #[test]
    fn yellow_on_first_row_is_an_invariant_violation() {
        let grid = FeedbackGrid::from_lines(["crane", "g-y--"]).unwrap();
        let engine = ConstraintEngine::new(&grid);
        let mut con = ConstraintSet::new();

        assert_eq!(
            engine.integrate_row(1, grid.solution(), &mut con),
            Err(SolveError::NoAdjacentFeedback { row: 1, slot: 2 })
        );
        assert!(con.is_empty());
    }

    #[test]
    fn integrate_uses_parent_word_letters() {
        let grid = FeedbackGrid::from_lines(["crane", "ggggg", "y--gg"]).unwrap();
        let engine = ConstraintEngine::new(&grid);
        let mut con = ConstraintSet::new();

        engine.integrate_row(2, &word("crane"), &mut con).unwrap();

        assert_eq!(con.must_be(3), b"n");
        assert_eq!(con.must_be(4), b"e");
        // next row is all green, current row resolved slots 3 and 4
        assert_eq!(con.must_be(0), b"ra");
        assert!(con.is_excluded(b'r'));
        assert!(con.is_excluded(b'a'));
    }

    #[test]
    fn integrate_twice_does_not_narrow_further() {
        let grid = FeedbackGrid::from_lines(["crane", "ggggg", "gy-y-"]).unwrap();
        let engine = ConstraintEngine::new(&grid);
        let parent = word("crane");

        let mut once = ConstraintSet::new();
        engine.integrate_row(2, &parent, &mut once).unwrap();

        let mut twice = once.clone();
        engine.integrate_row(2, &parent, &mut twice).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn integrate_solution_row_is_an_invariant_violation() {
        let grid = FeedbackGrid::from_lines(["crane", "g-y--"]).unwrap();
        let engine = ConstraintEngine::new(&grid);
        let mut con = ConstraintSet::new();

        assert_eq!(
            engine.integrate_row(0, grid.solution(), &mut con),
            Err(SolveError::SolutionRow)
        );
    }

    #[test]
    fn integrate_past_last_row_is_an_invariant_violation() {
        let grid = FeedbackGrid::from_lines(["crane", "g-y--"]).unwrap();
        let engine = ConstraintEngine::new(&grid);
        let mut con = ConstraintSet::new();

        assert_eq!(
            engine.integrate_row(2, grid.solution(), &mut con),
            Err(SolveError::RowOutOfRange {
                row: 2,
                guess_rows: 1
            })
        );
        assert!(con.is_empty());
    }
}
