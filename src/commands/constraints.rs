//! Single-row constraint inspection
//!
//! Shows what one feedback row demands of its words, given the word placed on
//! the adjacent row nearer the solution.

use crate::core::{ConstraintSet, Feedback, FeedbackGrid, Word};
use crate::solver::{ConstraintEngine, matches};
use anyhow::{Context, Result, bail};

/// Constraints derived for one row and the words that satisfy them
#[derive(Debug)]
pub struct ConstraintReport {
    pub row: usize,
    pub feedback: Feedback,
    pub adjacent_word: String,
    pub constraints: ConstraintSet,
    pub candidates: Vec<String>,
}

/// Derive the constraints for grid row `row`
///
/// `adjacent_word` is the word on row `row - 1`. For row 1 it defaults to the
/// solution.
///
/// # Errors
///
/// Returns an error if the row does not exist, the adjacent word is missing
/// or invalid, or the row's constraints cannot be derived.
pub fn explain_row(
    grid: &FeedbackGrid,
    dictionary: &[Word],
    row: usize,
    adjacent_word: Option<&str>,
) -> Result<ConstraintReport> {
    let Some(feedback) = grid.feedback(row) else {
        bail!("row must be between 1 and {}", grid.guess_rows());
    };

    let adjacent = match (adjacent_word, row) {
        (Some(text), _) => Word::new(text).context("invalid adjacent word")?,
        (None, 1) => grid.solution().clone(),
        (None, _) => bail!("row {row} needs the word placed on row {}", row - 1),
    };

    let mut constraints = ConstraintSet::new();
    ConstraintEngine::new(grid)
        .integrate_row(row, &adjacent, &mut constraints)
        .with_context(|| format!("cannot derive constraints for row {row}"))?;

    let candidates = dictionary
        .iter()
        .filter(|w| matches(w, &constraints, grid.solution()))
        .map(|w| w.text().to_string())
        .collect();

    Ok(ConstraintReport {
        row,
        feedback,
        adjacent_word: adjacent.text().to_string(),
        constraints,
        candidates,
    })
}
