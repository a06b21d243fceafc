//! Reverse solving: constraint propagation and backtracking search
//!
//! The engine derives constraints from feedback rows, the matcher filters the
//! dictionary against them, the tree search recurses row by row, and the path
//! enumerator reads complete guess sequences back out.

mod engine;
mod matcher;
pub mod observer;
mod paths;
mod tree;

pub use engine::{ConstraintEngine, SolveError};
pub use matcher::matches;
pub use observer::{NoopObserver, SearchObserver};
pub use paths::PathEnumerator;
pub use tree::{ConstraintInheritance, SearchConfig, SearchTree, SolverNode};
