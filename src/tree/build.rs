//! Tree construction from dictionary entries

use super::balance::balanced_order;
use super::bst::WordTree;
use crate::core::DictionaryEntry;
use tracing::{debug, info};

/// Insert entries into a fresh tree in the order given
///
/// Pass a list already in balanced order (as produced by [`balance_entries`]
/// or read from a balanced dictionary file) to get a shallow tree.
#[must_use]
pub fn build_tree(entries: &[DictionaryEntry]) -> WordTree {
    let mut tree = WordTree::new();
    let mut skipped = 0usize;

    for entry in entries {
        let definition = entry.definition();
        let definition = (!definition.is_empty()).then_some(definition);
        if !tree.insert(entry.sum, entry.word(), definition) {
            skipped += 1;
        }
    }

    if skipped > 0 {
        debug!(skipped, "duplicate keys ignored while building tree");
    }
    info!(nodes = tree.len(), height = tree.height(), "tree built");
    tree
}

/// Sort entries by key and reorder them median-first
#[must_use]
pub fn balance_entries(mut entries: Vec<DictionaryEntry>) -> Vec<DictionaryEntry> {
    entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    balanced_order(&entries)
}

/// Sort, balance and build in one step
#[must_use]
pub fn build_balanced_tree(entries: Vec<DictionaryEntry>) -> WordTree {
    build_tree(&balance_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    fn entries(words: &[&str]) -> Vec<DictionaryEntry> {
        words.iter().map(|w| DictionaryEntry::new(w, "")).collect()
    }

    #[test]
    fn three_sorted_entries_build_height_one() {
        // Key order: bat(311) < cat(312) < ant(323)
        let balanced = balance_entries(entries(&["ant", "bat", "cat"]));
        let words: Vec<&str> = balanced.iter().map(DictionaryEntry::word).collect();
        assert_eq!(words, vec!["cat", "bat", "ant"]);

        let tree = build_tree(&balanced);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.root().map(Node::word), Some("cat"));
    }

    #[test]
    fn definitions_carried_into_nodes() {
        let tree = build_tree(&[DictionaryEntry::new("bat", "flying mammal")]);
        let root = tree.root().unwrap();
        assert_eq!(root.definition(), Some("flying mammal"));

        let tree = build_tree(&[DictionaryEntry::new("bat", "")]);
        assert_eq!(tree.root().unwrap().definition(), None);
    }

    #[test]
    fn balanced_build_beats_sequential() {
        let words: Vec<String> = (1..=31).map(|n| "a".repeat(n)).collect();
        let list: Vec<DictionaryEntry> =
            words.iter().map(|w| DictionaryEntry::new(w, "")).collect();

        let sequential = build_tree(&list);
        let balanced = build_balanced_tree(list);

        assert_eq!(sequential.height(), 30);
        assert_eq!(balanced.height(), 4);
        assert_eq!(balanced.len(), 31);
    }

    #[test]
    fn duplicates_skipped() {
        let tree = build_balanced_tree(entries(&["cat", "Cat ", "cat"]));
        // "Cat" has a different sum from "cat", so it is a distinct key
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn empty_list_builds_empty_tree() {
        let tree = build_balanced_tree(Vec::new());
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
    }
}
