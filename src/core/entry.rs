//! Dictionary entry tuple
//!
//! The unit exchanged between the text collaborators (normalization,
//! balanced-file persistence) and the tree builder.

use super::key::{ascii_sum, normalize};
use std::fmt;

/// One dictionary record: `(sum, normalized word, "word : definition")`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub sum: u64,
    pub normalized: String,
    pub line: String,
}

impl DictionaryEntry {
    /// Build an entry from a display line, deriving the key from its word part
    ///
    /// Returns `None` if the line has no `:` separator.
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        let (word, _) = line.split_once(':')?;
        let word = word.trim();
        Some(Self {
            sum: ascii_sum(word),
            normalized: normalize(word),
            line: line.trim().to_string(),
        })
    }

    /// Build an entry from a word and its definition
    #[must_use]
    pub fn new(word: &str, definition: &str) -> Self {
        let word = word.trim();
        Self {
            sum: ascii_sum(word),
            normalized: normalize(word),
            line: format!("{word} : {}", definition.trim()),
        }
    }

    /// Original-cased word
    ///
    /// A line without a separator is treated as a bare word.
    #[must_use]
    pub fn word(&self) -> &str {
        self.line
            .split_once(':')
            .map_or(self.line.as_str(), |(word, _)| word)
            .trim()
    }

    /// Definition text, empty if the line carries none
    #[must_use]
    pub fn definition(&self) -> &str {
        self.line
            .split_once(':')
            .map_or("", |(_, definition)| definition)
            .trim()
    }

    /// Sort key used by the balanced builder
    #[must_use]
    pub fn sort_key(&self) -> (u64, &str) {
        (self.sum, self.normalized.as_str())
    }
}

impl fmt::Display for DictionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_from_line() {
        let entry = DictionaryEntry::from_line("Cat : small feline").unwrap();
        assert_eq!(entry.sum, 280);
        assert_eq!(entry.normalized, "cat");
        assert_eq!(entry.word(), "Cat");
        assert_eq!(entry.definition(), "small feline");
    }

    #[test]
    fn entry_from_line_without_separator() {
        assert!(DictionaryEntry::from_line("no separator here").is_none());
    }

    #[test]
    fn definition_may_contain_colons() {
        let entry = DictionaryEntry::from_line("ratio : a : b").unwrap();
        assert_eq!(entry.word(), "ratio");
        assert_eq!(entry.definition(), "a : b");
    }

    #[test]
    fn entry_new_formats_line() {
        let entry = DictionaryEntry::new(" bat ", " flying mammal ");
        assert_eq!(entry.line, "bat : flying mammal");
        assert_eq!(entry.sum, 311);
    }

    #[test]
    fn bare_word_line() {
        let entry = DictionaryEntry {
            sum: 312,
            normalized: "cat".to_string(),
            line: "cat".to_string(),
        };
        assert_eq!(entry.word(), "cat");
        assert_eq!(entry.definition(), "");
    }

    #[test]
    fn sort_key_orders_by_sum_then_word() {
        let a = DictionaryEntry::new("ab", "");
        let b = DictionaryEntry::new("ba", "");
        assert!(a.sort_key() < b.sort_key());
    }
}
