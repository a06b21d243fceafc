//! Core domain types for reverse Wordle
//!
//! Words, feedback rows, the puzzle grid and the constraint set. These types
//! are plain data with validation and have no knowledge of the search.

mod constraints;
mod feedback;
mod grid;
mod word;

pub use constraints::ConstraintSet;
pub use feedback::{Feedback, FeedbackError, Tile};
pub use grid::{FeedbackGrid, GridError, MAX_GUESS_ROWS};
pub use word::{WORD_LEN, Word, WordError};
