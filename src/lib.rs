//! Reverse Wordle
//!
//! Reconstructs the guess sequences that could have produced a Wordle board,
//! given only the solution, the tile colours of each row, and a dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use reverse_wordle::core::FeedbackGrid;
//! use reverse_wordle::solver::{NoopObserver, PathEnumerator, SearchConfig, SearchTree};
//! use reverse_wordle::wordlists::words_from_slice;
//!
//! let grid = FeedbackGrid::from_lines(["crane", "ggggg", "-----"]).unwrap();
//! let dictionary = words_from_slice(&["crane", "bumpy", "stick"]);
//!
//! let tree = SearchTree::build(&grid, &dictionary, SearchConfig::default(), &NoopObserver)
//!     .unwrap();
//! let paths = PathEnumerator::new(&tree).into_strings();
//! assert_eq!(paths, [["crane", "bumpy"]]);
//! ```

// Core domain types
pub mod core;

// Constraint propagation and tree search
pub mod solver;

// Puzzle and dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
