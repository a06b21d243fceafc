//! Enumeration of complete guess sequences
//!
//! Walks a finished `SearchTree` depth-first, left to right, and yields the
//! words from the first guess row down to a leaf whenever that leaf sits on the
//! last row. Sibling order is dictionary order, so output is reproducible.

use super::tree::{SearchTree, SolverNode};
use crate::core::Word;
use std::slice;

/// Iterator over root-to-leaf word sequences of full length
///
/// The solution word at the root is not part of a path.
#[derive(Debug, Clone)]
pub struct PathEnumerator<'t> {
    stack: Vec<slice::Iter<'t, SolverNode>>,
    path: Vec<&'t Word>,
    depth: usize,
}

impl<'t> PathEnumerator<'t> {
    /// # Examples
    /// ```
    /// use reverse_wordle::core::{FeedbackGrid, Word};
    /// use reverse_wordle::solver::{NoopObserver, PathEnumerator, SearchConfig, SearchTree};
    ///
    /// let grid = FeedbackGrid::from_lines(["crane", "ggggg", "-----"]).unwrap();
    /// let dictionary: Vec<Word> = ["crane", "fight", "bumpy"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let tree = SearchTree::build(&grid, &dictionary, SearchConfig::default(), &NoopObserver)
    ///     .unwrap();
    ///
    /// let paths: Vec<String> = PathEnumerator::new(&tree)
    ///     .map(|path| path.iter().map(|w| w.text()).collect::<Vec<_>>().join(" "))
    ///     .collect();
    /// assert_eq!(paths, ["crane fight", "crane bumpy"]);
    /// ```
    #[must_use]
    pub fn new(tree: &'t SearchTree) -> Self {
        Self {
            stack: vec![tree.root().children().iter()],
            path: Vec::with_capacity(tree.guess_rows()),
            depth: tree.guess_rows(),
        }
    }

    /// Collect every path as owned strings
    #[must_use]
    pub fn into_strings(self) -> Vec<Vec<String>> {
        self.map(|path| path.iter().map(|w| w.text().to_string()).collect())
            .collect()
    }
}

impl<'t> Iterator for PathEnumerator<'t> {
    type Item = Vec<&'t Word>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(node) = self.stack.last_mut()?.next() else {
                // siblings exhausted: climb back to the parent's row
                self.stack.pop();
                self.path.pop();
                continue;
            };

            self.path.push(node.word());
            if node.is_leaf() {
                let complete = (self.path.len() == self.depth).then(|| self.path.clone());
                self.path.pop();
                if complete.is_some() {
                    return complete;
                }
            } else {
                self.stack.push(node.children().iter());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackGrid;
    use crate::solver::{NoopObserver, SearchConfig};

    fn paths(lines: &[&str], dictionary: &[&str]) -> Vec<Vec<String>> {
        let grid = FeedbackGrid::from_lines(lines.iter().copied()).unwrap();
        let dictionary: Vec<Word> = dictionary.iter().map(|w| Word::new(*w).unwrap()).collect();
        let tree =
            SearchTree::build(&grid, &dictionary, SearchConfig::default(), &NoopObserver).unwrap();
        PathEnumerator::new(&tree).into_strings()
    }

    #[test]
    fn single_path() {
        let found = paths(&["crane", "ggggg", "-----"], &["stick", "bumpy", "crane"]);
        assert_eq!(found, [["crane", "bumpy"]]);
    }

    #[test]
    fn paths_are_depth_first_in_dictionary_order() {
        let found = paths(
            &["crane", "ggggg", "gg--y", "-----"],
            &["light", "crown", "crane", "bumpy"],
        );
        assert_eq!(
            found,
            [["crane", "crown", "light"], ["crane", "crown", "bumpy"]]
        );
    }

    #[test]
    fn no_paths_when_a_row_has_no_match() {
        let found = paths(&["crane", "ggggg", "-----"], &["crane", "stick"]);
        assert!(found.is_empty());
    }

    #[test]
    fn paths_have_one_word_per_feedback_row() {
        let found = paths(
            &["crane", "ggggg", "gg--y", "-----"],
            &["bumpy", "crane", "crown", "fight", "dumpy"],
        );
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|path| path.len() == 3));
    }

    #[test]
    fn enumeration_is_repeatable() {
        let lines = ["crane", "ggggg", "-----"];
        let dictionary = ["fight", "crane", "bumpy", "dumpy", "light"];
        assert_eq!(paths(&lines, &dictionary), paths(&lines, &dictionary));
    }

    #[test]
    fn count_matches_tree_statistics() {
        let grid = FeedbackGrid::from_lines(["crane", "ggggg", "-----"]).unwrap();
        let dictionary: Vec<Word> = ["fight", "crane", "bumpy"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let tree =
            SearchTree::build(&grid, &dictionary, SearchConfig::default(), &NoopObserver).unwrap();

        assert_eq!(PathEnumerator::new(&tree).count(), tree.path_count());
    }
}
