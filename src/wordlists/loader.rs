//! File loading utilities
//!
//! Line endings (`\n` or `\r\n`) are normalized here, so the core types only
//! ever see bare words and feedback rows.

use crate::core::{FeedbackGrid, Word};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file, one word per line
///
/// Blank lines and entries that are not five letters are skipped. File order
/// is kept, since it fixes the order of the search output.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use reverse_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words5.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert text lines to words, skipping blank and invalid entries
pub fn words_from_lines<'a, I>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use reverse_wordle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "bumpy"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

/// Load a puzzle grid: the solution word on the first line, then one feedback
/// row per line
///
/// # Errors
///
/// Returns an error if the file cannot be read or the grid is malformed.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<FeedbackGrid> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read puzzle {}", path.display()))?;

    FeedbackGrid::from_lines(content.lines())
        .with_context(|| format!("malformed puzzle {}", path.display()))
}
