//! Puzzle and dictionary loading
//!
//! Reads the two inputs of a reverse solve: the dictionary of candidate words
//! and the puzzle grid of feedback rows.

pub mod loader;

pub use loader::{load_from_file, load_grid, words_from_lines, words_from_slice};
