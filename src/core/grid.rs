//! The puzzle being reversed: a solution word plus the feedback rows

use super::feedback::{Feedback, FeedbackError};
use super::word::{Word, WordError};
use std::fmt;

/// Most guess rows a Wordle board can hold
pub const MAX_GUESS_ROWS: usize = 6;

/// Error type for malformed puzzle input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    MissingSolution,
    InvalidSolution(WordError),
    InvalidRow { row: usize, source: FeedbackError },
    NoGuessRows,
    TooManyRows(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSolution => write!(f, "puzzle is empty, expected a solution word"),
            Self::InvalidSolution(e) => write!(f, "invalid solution word: {e}"),
            Self::InvalidRow { row, source } => write!(f, "row {row}: {source}"),
            Self::NoGuessRows => write!(f, "puzzle has no feedback rows"),
            Self::TooManyRows(n) => {
                write!(f, "puzzle has {n} feedback rows, at most {MAX_GUESS_ROWS} allowed")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSolution(e) => Some(e),
            Self::InvalidRow { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Solution word and feedback rows
///
/// Row 0 is the solution itself; rows `1..=guess_rows()` are feedback. A row's
/// neighbour nearer the solution is the row with the next lower index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackGrid {
    solution: Word,
    rows: Vec<Feedback>,
}

impl FeedbackGrid {
    /// Build a grid from already parsed parts
    ///
    /// # Errors
    /// Returns `GridError` if there are no rows or more than six.
    pub fn new(solution: Word, rows: Vec<Feedback>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::NoGuessRows);
        }
        if rows.len() > MAX_GUESS_ROWS {
            return Err(GridError::TooManyRows(rows.len()));
        }
        Ok(Self { solution, rows })
    }

    /// Parse a grid from text lines: the solution word, then one feedback row
    /// per line. Trailing blank lines are ignored; a blank line inside the
    /// grid is a malformed row.
    ///
    /// # Errors
    /// Returns `GridError` describing the first malformed line.
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::FeedbackGrid;
    ///
    /// let grid = FeedbackGrid::from_lines(["crane", "g-y--", "ggggg"]).unwrap();
    /// assert_eq!(grid.solution().text(), "crane");
    /// assert_eq!(grid.guess_rows(), 2);
    /// ```
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lines: Vec<&str> = lines.into_iter().map(str::trim).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        let mut lines = lines.into_iter();

        let solution = lines.next().ok_or(GridError::MissingSolution)?;
        let solution = Word::new(solution).map_err(GridError::InvalidSolution)?;

        let rows = lines
            .enumerate()
            .map(|(i, line)| {
                Feedback::parse(line).map_err(|source| GridError::InvalidRow { row: i + 1, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(solution, rows)
    }

    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Number of feedback rows, excluding the solution row
    #[inline]
    #[must_use]
    pub fn guess_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of grid rows, including the solution row
    #[inline]
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.rows.len() + 1
    }

    /// Feedback for grid row `row`
    ///
    /// Returns `None` for row 0, which holds the solution word rather than
    /// feedback, and past the last row.
    #[must_use]
    pub fn feedback(&self, row: usize) -> Option<Feedback> {
        row.checked_sub(1).and_then(|i| self.rows.get(i)).copied()
    }

    /// Feedback rows in grid order, excluding the solution row
    #[must_use]
    pub fn rows(&self) -> &[Feedback] {
        &self.rows
    }
}
