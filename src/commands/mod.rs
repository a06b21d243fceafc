//! Command implementations

pub mod constraints;
pub mod dictionary;
pub mod solve;

pub use constraints::{ConstraintReport, explain_row};
pub use dictionary::{DictionaryReport, dictionary_report};
pub use solve::{SolveConfig, SolveResult, solve_grid};
