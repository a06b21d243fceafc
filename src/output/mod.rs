//! Terminal output formatting
//!
//! Display utilities for CLI results and search observers that report to the
//! terminal.

pub mod display;
pub mod formatters;
pub mod observers;

pub use display::{print_constraint_report, print_dictionary_report, print_solve_result};
pub use observers::{ProgressObserver, VerboseObserver};
