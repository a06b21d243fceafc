//! Search observers that report to the terminal

use super::formatters::{format_cannot_be, format_must_be};
use crate::core::{ConstraintSet, Word};
use crate::solver::SearchObserver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Traces every search step to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct VerboseObserver;

impl SearchObserver for VerboseObserver {
    fn row_integrated(&self, row: usize, parent: &Word, constraints: &ConstraintSet) {
        eprintln!(
            "{} row {row} after {}",
            "solve".bright_black(),
            parent.text().bright_white().bold()
        );
        eprintln!("      must_be:   {}", format_must_be(constraints).cyan());
        eprintln!("      cannot_be: {}", format_cannot_be(constraints).red());
    }

    fn node_created(&self, row: usize, word: &Word) {
        eprintln!("{} row {row}: {}", "match".green(), word.text());
    }

    fn branch_pruned(&self, row: usize, word: &Word) {
        eprintln!("{} row {row}: {}", "prune".yellow(), word.text().dimmed());
    }
}

/// Spinner counting nodes as the tree grows
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {pos} nodes | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self { bar }
    }

    /// Clear the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for ProgressObserver {
    fn row_integrated(&self, row: usize, parent: &Word, _constraints: &ConstraintSet) {
        if row == 1 {
            self.bar.set_message(format!("searching below {parent}"));
        }
    }

    fn node_created(&self, row: usize, word: &Word) {
        self.bar.inc(1);
        if row == 1 {
            self.bar.set_message(format!("first row: {word}"));
        }
    }
}
