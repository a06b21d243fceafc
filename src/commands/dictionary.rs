//! Dictionary listing command

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Summary of a loaded dictionary
#[derive(Debug)]
pub struct DictionaryReport {
    /// Words in search order
    pub words: Vec<String>,
    /// Words that appear more than once, in order of first repeat
    pub duplicates: Vec<String>,
}

impl DictionaryReport {
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// List the dictionary in the order the search will try it
///
/// Duplicates are reported but kept: each copy is tried, so each produces its
/// own branches.
#[must_use]
pub fn dictionary_report(dictionary: &[Word]) -> DictionaryReport {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut repeated: FxHashSet<&str> = FxHashSet::default();
    let mut duplicates = Vec::new();

    for word in dictionary {
        let text = word.text();
        if !seen.insert(text) && repeated.insert(text) {
            duplicates.push(text.to_string());
        }
    }

    DictionaryReport {
        words: dictionary.iter().map(|w| w.text().to_string()).collect(),
        duplicates,
    }
}
