//! What a search is looking for

use crate::core::{WordKey, compute_key};
use crate::tree::Node;
use std::fmt;

/// Goal test for depth-first searches
///
/// A target pinned to a word matches only on the full composite key, which
/// tells apart words sharing a character sum. Without a word nothing matches,
/// so a search just walks every node within its limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTarget {
    sum: u64,
    key: Option<WordKey>,
}

impl SearchTarget {
    #[must_use]
    pub fn new(sum: u64, word: Option<&str>) -> Self {
        Self {
            sum,
            key: word.map(|w| WordKey::new(sum, w)),
        }
    }

    /// Target a word by its own key
    #[must_use]
    pub fn word(word: &str) -> Self {
        let key = compute_key(word);
        Self {
            sum: key.sum(),
            key: Some(key),
        }
    }

    #[inline]
    #[must_use]
    pub const fn sum(&self) -> u64 {
        self.sum
    }

    #[inline]
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        self.key.as_ref().is_some_and(|key| node.key() == key)
    }
}

impl fmt::Display for SearchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{key}"),
            None => write!(f, "sum {} (no word)", self.sum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::WordTree;

    #[test]
    fn word_target_uses_computed_sum() {
        let target = SearchTarget::word("Cat");
        assert_eq!(target.sum(), 280);
        assert_eq!(format!("{target}"), "cat(280)");
    }

    #[test]
    fn key_target_requires_word_match() {
        let mut tree = WordTree::new();
        tree.insert(195, "ab", None);
        let node = tree.root().unwrap();

        assert!(SearchTarget::new(195, Some(" AB ")).matches(node));
        assert!(!SearchTarget::new(195, Some("ba")).matches(node));
        assert!(!SearchTarget::new(196, Some("ab")).matches(node));
    }

    #[test]
    fn target_without_word_never_matches() {
        let mut tree = WordTree::new();
        tree.insert(195, "ab", None);
        let node = tree.root().unwrap();

        let target = SearchTarget::new(195, None);
        assert!(!target.matches(node));
        assert_eq!(format!("{target}"), "sum 195 (no word)");
    }
}
