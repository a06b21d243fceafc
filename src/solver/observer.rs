//! Search event hooks
//!
//! The search reports what it does through an observer passed in by the
//! caller. All hooks default to doing nothing.

use crate::core::{ConstraintSet, Word};

/// Receives events from the tree search
///
/// Observers are shared across worker threads when the search runs in
/// parallel, so they must be `Sync`.
pub trait SearchObserver: Sync {
    /// Row `row` has been folded into the constraints of the node holding
    /// `parent` (the word on row `row - 1`)
    fn row_integrated(&self, _row: usize, _parent: &Word, _constraints: &ConstraintSet) {}

    /// `word` matched and was placed on row `row`
    fn node_created(&self, _row: usize, _word: &Word) {}

    /// `word` on row `row` had no complete continuation and was dropped
    fn branch_pruned(&self, _row: usize, _word: &Word) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
