//! Recursive construction of the search tree
//!
//! Each node holds a word placed on one grid row. Its children are every
//! dictionary word consistent with the constraints that the next row's
//! feedback places on it. Branches that cannot reach the last row are dropped,
//! so every leaf of a finished tree ends a complete guess sequence.

use super::engine::{ConstraintEngine, SolveError};
use super::matcher::matches;
use super::observer::SearchObserver;
use crate::core::{ConstraintSet, FeedbackGrid, Word};
use rayon::prelude::*;

/// Starting constraints for a newly created node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConstraintInheritance {
    /// Start from an empty set; each row's constraints come from that row alone
    #[default]
    Fresh,
    /// Start from a clone of the parent's derived set, so constraints
    /// accumulate down a branch
    CloneParent,
}

/// Search options
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    /// Scan the dictionary on worker threads. Output order is unchanged.
    pub parallel: bool,
    pub inheritance: ConstraintInheritance,
}

impl SearchConfig {
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            parallel: false,
            inheritance: ConstraintInheritance::Fresh,
        }
    }

    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn inheritance(mut self, inheritance: ConstraintInheritance) -> Self {
        self.inheritance = inheritance;
        self
    }
}

/// A word placed on one row, with the constraints for the row after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverNode {
    word: Word,
    constraints: ConstraintSet,
    children: Vec<SolverNode>,
}

impl SolverNode {
    #[must_use]
    pub const fn new(word: Word, constraints: ConstraintSet) -> Self {
        Self {
            word,
            constraints,
            children: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Constraints the next row's words had to satisfy
    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Continuations on the next row, in dictionary order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes below this one
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// Tree of every word sequence consistent with a feedback grid
///
/// The root holds the solution word; each level below it is one feedback row.
#[derive(Debug, Clone)]
pub struct SearchTree {
    root: SolverNode,
    guess_rows: usize,
}

impl SearchTree {
    /// Build the tree for `grid`, trying words from `dictionary` in order
    ///
    /// # Errors
    /// Returns `SolveError` only on an internal invariant violation; an
    /// unsolvable grid yields a tree with no paths.
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::{FeedbackGrid, Word};
    /// use reverse_wordle::solver::{NoopObserver, SearchConfig, SearchTree};
    ///
    /// let grid = FeedbackGrid::from_lines(["crane", "ggggg", "-----"]).unwrap();
    /// let dictionary: Vec<Word> = ["crane", "bumpy", "stick"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let tree = SearchTree::build(&grid, &dictionary, SearchConfig::default(), &NoopObserver)
    ///     .unwrap();
    /// assert_eq!(tree.path_count(), 1);
    /// ```
    pub fn build<O>(
        grid: &FeedbackGrid,
        dictionary: &[Word],
        config: SearchConfig,
        observer: &O,
    ) -> Result<Self, SolveError>
    where
        O: SearchObserver + ?Sized,
    {
        let builder = Builder {
            engine: ConstraintEngine::new(grid),
            dictionary,
            config,
            observer,
        };

        let mut root = SolverNode::new(grid.solution().clone(), ConstraintSet::new());
        builder.expand(&mut root, 1)?;

        Ok(Self {
            root,
            guess_rows: grid.guess_rows(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &SolverNode {
        &self.root
    }

    /// Length of every complete path
    #[inline]
    #[must_use]
    pub const fn guess_rows(&self) -> usize {
        self.guess_rows
    }

    /// Number of word nodes, excluding the solution root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Number of complete guess sequences
    #[must_use]
    pub fn path_count(&self) -> usize {
        fn count(node: &SolverNode, depth: usize, target: usize) -> usize {
            if node.is_leaf() {
                usize::from(depth == target)
            } else {
                node.children
                    .iter()
                    .map(|child| count(child, depth + 1, target))
                    .sum()
            }
        }

        self.root
            .children
            .iter()
            .map(|child| count(child, 1, self.guess_rows))
            .sum()
    }
}

struct Builder<'a, O: ?Sized> {
    engine: ConstraintEngine<'a>,
    dictionary: &'a [Word],
    config: SearchConfig,
    observer: &'a O,
}

impl<O> Builder<'_, O>
where
    O: SearchObserver + ?Sized,
{
    fn total_rows(&self) -> usize {
        self.engine.grid().total_rows()
    }

    /// Fold row `row` into `node` and attach every word that fits it
    fn expand(&self, node: &mut SolverNode, row: usize) -> Result<(), SolveError> {
        if row == self.total_rows() {
            return Ok(());
        }

        self.engine
            .integrate_row(row, &node.word, &mut node.constraints)?;
        self.observer
            .row_integrated(row, &node.word, &node.constraints);

        let parent: &SolverNode = node;
        let grown: Vec<Option<SolverNode>> = if self.config.parallel {
            self.dictionary
                .par_iter()
                .map(|word| self.grow(parent, word, row))
                .collect::<Result<_, _>>()?
        } else {
            self.dictionary
                .iter()
                .map(|word| self.grow(parent, word, row))
                .collect::<Result<_, _>>()?
        };

        node.children = grown.into_iter().flatten().collect();
        Ok(())
    }

    /// Place `word` on `row` under `parent` if it fits, keeping it only when
    /// at least one complete sequence runs through it
    fn grow(
        &self,
        parent: &SolverNode,
        word: &Word,
        row: usize,
    ) -> Result<Option<SolverNode>, SolveError> {
        let solution = self.engine.grid().solution();
        if !matches(word, &parent.constraints, solution) {
            return Ok(None);
        }

        let constraints = match self.config.inheritance {
            ConstraintInheritance::Fresh => ConstraintSet::new(),
            ConstraintInheritance::CloneParent => parent.constraints.clone(),
        };
        let mut child = SolverNode::new(word.clone(), constraints);
        self.observer.node_created(row, word);

        self.expand(&mut child, row + 1)?;

        if row + 1 < self.total_rows() && child.is_leaf() {
            self.observer.branch_pruned(row, word);
            return Ok(None);
        }

        Ok(Some(child))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::NoopObserver;
    use crate::solver::observer::recording::RecordingObserver;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn build(lines: &[&str], dictionary: &[&str], config: SearchConfig) -> SearchTree {
        let grid = FeedbackGrid::from_lines(lines.iter().copied()).unwrap();
        SearchTree::build(&grid, &words(dictionary), config, &NoopObserver).unwrap()
    }

    fn child_words(node: &SolverNode) -> Vec<&str> {
        node.children().iter().map(|c| c.word().text()).collect()
    }

    #[test]
    fn single_match_per_row_gives_single_chain() {
        let tree = build(
            &["crane", "ggggg", "-----"],
            &["crane", "bumpy", "stick"],
            SearchConfig::default(),
        );

        assert_eq!(tree.root().word().text(), "crane");
        assert_eq!(child_words(tree.root()), ["crane"]);
        assert_eq!(child_words(&tree.root().children()[0]), ["bumpy"]);
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.path_count(), 1);
    }

    #[test]
    fn children_follow_dictionary_order() {
        let tree = build(
            &["crane", "ggggg", "-----"],
            &["fight", "crane", "stick", "bumpy"],
            SearchConfig::default(),
        );

        let first = &tree.root().children()[0];
        assert_eq!(child_words(first), ["fight", "bumpy"]);
        assert_eq!(tree.path_count(), 2);
    }

    #[test]
    fn yellow_row_uses_word_from_adjacent_row() {
        let tree = build(
            &["crane", "ggggg", "gg--y", "-----"],
            &["bumpy", "crane", "crown", "fight"],
            SearchConfig::default(),
        );

        let crane = &tree.root().children()[0];
        assert_eq!(crane.constraints().must_be(4), b"an");
        assert_eq!(child_words(crane), ["crown"]);
        assert_eq!(child_words(&crane.children()[0]), ["bumpy", "fight"]);
        assert_eq!(tree.path_count(), 2);
    }

    #[test]
    fn dead_branches_leave_no_nodes() {
        let tree = build(
            &["crane", "ggggg", "-----"],
            &["crane", "stick"],
            SearchConfig::default(),
        );

        assert!(tree.root().is_leaf());
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.path_count(), 0);
    }

    #[test]
    fn empty_dictionary_gives_empty_tree() {
        let tree = build(&["crane", "ggggg"], &[], SearchConfig::default());
        assert_eq!(tree.path_count(), 0);
    }

    #[test]
    fn yellow_on_first_row_fails_the_build() {
        let grid = FeedbackGrid::from_lines(["crane", "g-y--"]).unwrap();
        let result = SearchTree::build(
            &grid,
            &words(&["cloth", "cabin", "cover"]),
            SearchConfig::default(),
            &NoopObserver,
        );

        assert_eq!(
            result.err(),
            Some(SolveError::NoAdjacentFeedback { row: 1, slot: 2 })
        );
    }

    #[test]
    fn parallel_build_matches_sequential() {
        let lines = ["crane", "ggggg", "gg--y", "-----"];
        let dictionary = ["bumpy", "crane", "crown", "fight", "dumpy", "light"];

        let sequential = build(&lines, &dictionary, SearchConfig::sequential());
        let parallel = build(&lines, &dictionary, SearchConfig::sequential().parallel(true));

        assert_eq!(sequential.root(), parallel.root());
        assert_eq!(parallel.path_count(), 4);
    }

    #[test]
    fn inherited_constraints_accumulate_down_a_branch() {
        let lines = ["crane", "ggggg", "gg--y", "-----"];
        let dictionary = ["bumpy", "crane", "crown", "fight"];

        let fresh = build(&lines, &dictionary, SearchConfig::default());
        let inherited = build(
            &lines,
            &dictionary,
            SearchConfig::default().inheritance(ConstraintInheritance::CloneParent),
        );

        assert_eq!(fresh.path_count(), 2);
        // the first row pins every slot, and those pins carry into later rows
        assert_eq!(inherited.path_count(), 0);
    }

    #[test]
    fn observer_sees_creation_and_pruning() {
        let grid = FeedbackGrid::from_lines(["crane", "ggggg", "-----"]).unwrap();
        let observer = RecordingObserver::default();

        SearchTree::build(
            &grid,
            &words(&["crane", "stick"]),
            SearchConfig::default(),
            &observer,
        )
        .unwrap();

        assert_eq!(
            observer.events(),
            [
                "integrate 1 crane",
                "create 1 crane",
                "integrate 2 crane",
                "prune 1 crane",
            ]
        );
    }
}
