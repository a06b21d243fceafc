//! Formatting utilities for terminal output

use crate::core::{ConstraintSet, WORD_LEN};

/// Format a guess sequence the way puzzle answers are written: words
/// separated by single spaces
#[must_use]
pub fn format_path(path: &[String]) -> String {
    path.join(" ")
}

/// Format the per-slot allowed letters, `*` for unconstrained slots
#[must_use]
pub fn format_must_be(con: &ConstraintSet) -> String {
    (0..WORD_LEN)
        .map(|slot| match con.must_be(slot) {
            [] => "*".to_string(),
            allowed => String::from_utf8_lossy(allowed).into_owned(),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Format the excluded letters, `-` when there are none
#[must_use]
pub fn format_cannot_be(con: &ConstraintSet) -> String {
    let excluded: String = con.excluded_letters().map(char::from).collect();
    if excluded.is_empty() {
        "-".to_string()
    } else {
        excluded
    }
}
