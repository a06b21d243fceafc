//! Puzzle solving command
//!
//! Builds the search tree for a grid and collects its guess sequences.

use crate::core::{Feedback, FeedbackGrid, Word};
use crate::solver::{PathEnumerator, SearchConfig, SearchObserver, SearchTree, SolveError};
use std::time::{Duration, Instant};

/// Configuration for solving a puzzle
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    pub search: SearchConfig,
    /// Keep at most this many sequences in the result
    pub limit: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(search: SearchConfig) -> Self {
        Self {
            search,
            limit: None,
        }
    }
}

/// Result of solving a puzzle
#[derive(Debug)]
pub struct SolveResult {
    pub solution: String,
    pub rows: Vec<Feedback>,
    /// Guess sequences, one word per feedback row, in search order
    pub paths: Vec<Vec<String>>,
    /// Sequences found before `limit` was applied
    pub total_paths: usize,
    pub node_count: usize,
    pub dictionary_size: usize,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.paths.len() < self.total_paths
    }
}

/// Reconstruct every guess sequence consistent with `grid`
///
/// # Errors
///
/// Returns an error only if the search hits an internal invariant violation.
pub fn solve_grid<O>(
    grid: &FeedbackGrid,
    dictionary: &[Word],
    config: SolveConfig,
    observer: &O,
) -> Result<SolveResult, SolveError>
where
    O: SearchObserver + ?Sized,
{
    let start = Instant::now();
    let tree = SearchTree::build(grid, dictionary, config.search, observer)?;
    let duration = start.elapsed();

    let total_paths = tree.path_count();
    let paths = PathEnumerator::new(&tree)
        .take(config.limit.unwrap_or(usize::MAX))
        .map(|path| path.iter().map(|w| w.text().to_string()).collect())
        .collect();

    Ok(SolveResult {
        solution: grid.solution().text().to_string(),
        rows: grid.rows().to_vec(),
        paths,
        total_paths,
        node_count: tree.node_count(),
        dictionary_size: dictionary.len(),
        duration,
    })
}
