//! Tree node

use crate::core::WordKey;

/// A dictionary word stored in the tree
///
/// Each child is exclusively owned by its parent; there are no back links.
/// Parent relationships needed during a search live in that search's own table.
#[derive(Debug)]
pub struct Node {
    key: WordKey,
    word: String,
    definition: Option<String>,
    pub(super) left: Option<Box<Node>>,
    pub(super) right: Option<Box<Node>>,
}

impl Node {
    pub(super) fn new(sum: u64, word: &str, definition: Option<&str>) -> Self {
        Self {
            key: WordKey::new(sum, word),
            word: word.to_string(),
            definition: definition
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            left: None,
            right: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn key(&self) -> &WordKey {
        &self.key
    }

    #[inline]
    #[must_use]
    pub const fn sum(&self) -> u64 {
        self.key.sum()
    }

    /// Word as originally cased
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
