//! Word set used to accept or reject letter runs.
//!
//! The `Dictionary` stores normalized (trimmed, uppercase) words and
//! answers membership queries for runs read off the grid.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Normalize a word for storage or lookup: trim whitespace, uppercase.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

/// Set of valid words.
///
/// ## Example
///
/// ```
/// use crossgrid::dictionary::Dictionary;
///
/// let dict: Dictionary = ["cat", " Car ", "ARC"].into_iter().collect();
///
/// assert!(dict.contains("CAR"));
/// assert!(dict.contains_normalized("car"));
/// assert!(!dict.contains("CAC"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word. Blank entries are ignored.
    ///
    /// Returns true if the word was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    /// Exact membership test. `word` must already be normalized.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership test that normalizes `word` first.
    #[must_use]
    pub fn contains_normalized(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    /// Get the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
