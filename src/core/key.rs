//! Composite key for dictionary words
//!
//! A word is ordered by the sum of its character codes first and by its
//! normalized spelling second, so two words sharing a sum never collide.

use std::fmt;

/// Ordering key of a dictionary word: `(sum, normalized)`
///
/// Field order matters: the derived `Ord` compares `sum` first and falls back
/// to `normalized` on ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordKey {
    sum: u64,
    normalized: String,
}

impl WordKey {
    /// Create a key from a precomputed sum and a word
    ///
    /// The word is normalized here; the sum is taken as given.
    #[must_use]
    pub fn new(sum: u64, word: &str) -> Self {
        Self {
            sum,
            normalized: normalize(word),
        }
    }

    /// Character-code sum
    #[inline]
    #[must_use]
    pub const fn sum(&self) -> u64 {
        self.sum
    }

    /// Trimmed, lowercased spelling
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for WordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.normalized, self.sum)
    }
}

/// Derive the composite key of a word
///
/// The sum is computed on the word exactly as given, so case changes it.
///
/// # Examples
/// ```
/// use dict_search::core::compute_key;
///
/// let key = compute_key("Cat");
/// assert_eq!(key.sum(), 67 + 97 + 116);
/// assert_eq!(key.normalized(), "cat");
/// ```
#[must_use]
pub fn compute_key(word: &str) -> WordKey {
    WordKey::new(ascii_sum(word), word)
}

/// Sum of the code points of every character in `word`
#[inline]
#[must_use]
pub fn ascii_sum(word: &str) -> u64 {
    word.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Trim surrounding whitespace and fold to lowercase
#[inline]
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
