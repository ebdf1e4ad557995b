//! Binary search tree over composite word keys

use super::node::Node;
use crate::core::WordKey;
use std::cmp::Ordering;

/// Dictionary tree ordered by `(sum, normalized word)`
///
/// No rebalancing happens on insert. Shallow trees come from inserting in the
/// order produced by [`balanced_order`](super::balanced_order).
#[derive(Debug, Default)]
pub struct WordTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl WordTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert a word under the key `(sum, normalize(word))`
    ///
    /// Returns `false` and leaves the tree unchanged if the key is already present.
    pub fn insert(&mut self, sum: u64, word: &str, definition: Option<&str>) -> bool {
        let node = Box::new(Node::new(sum, word, definition));
        let mut slot = &mut self.root;

        while let Some(current) = slot {
            slot = match node.key().cmp(current.key()) {
                Ordering::Less => &mut current.left,
                Ordering::Greater => &mut current.right,
                Ordering::Equal => return false,
            };
        }

        *slot = Some(node);
        self.len += 1;
        true
    }

    /// Height of the tree: -1 when empty, 0 for a single node
    #[must_use]
    pub fn height(&self) -> i64 {
        fn height_of(node: Option<&Node>) -> i64 {
            node.map_or(-1, |n| 1 + height_of(n.left()).max(height_of(n.right())))
        }

        height_of(self.root())
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Look up a node by exact key
    #[must_use]
    pub fn get(&self, key: &WordKey) -> Option<&Node> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(node.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Nodes in ascending key order
    #[must_use]
    pub fn in_order(&self) -> Vec<&Node> {
        let mut result = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node> = Vec::new();
        let mut current = self.root();

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            if let Some(node) = stack.pop() {
                result.push(node);
                current = node.right();
            }
        }

        result
    }

    /// Nodes in ascending key order, paired with their depth
    ///
    /// This is the layout the tree viewer uses: column from the in-order
    /// position, row from the depth.
    #[must_use]
    pub fn in_order_with_depth(&self) -> Vec<(&Node, usize)> {
        fn walk<'t>(node: Option<&'t Node>, depth: usize, out: &mut Vec<(&'t Node, usize)>) {
            if let Some(n) = node {
                walk(n.left(), depth + 1, out);
                out.push((n, depth));
                walk(n.right(), depth + 1, out);
            }
        }

        let mut out = Vec::with_capacity(self.len);
        walk(self.root(), 0, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ascii_sum;

    fn insert_word(tree: &mut WordTree, word: &str) -> bool {
        tree.insert(ascii_sum(word), word, None)
    }

    #[test]
    fn empty_tree() {
        let tree = WordTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert!(tree.root().is_none());
        assert!(tree.in_order().is_empty());
    }

    #[test]
    fn single_node_height_zero() {
        let mut tree = WordTree::new();
        assert!(insert_word(&mut tree, "cat"));
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root().unwrap().word(), "cat");
    }

    #[test]
    fn insert_places_by_composite_key() {
        let mut tree = WordTree::new();
        insert_word(&mut tree, "cat"); // 312
        insert_word(&mut tree, "bat"); // 311
        insert_word(&mut tree, "ant"); // 323

        let root = tree.root().unwrap();
        assert_eq!(root.word(), "cat");
        assert_eq!(root.left().unwrap().word(), "bat");
        assert_eq!(root.right().unwrap().word(), "ant");
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn equal_sums_are_split_by_word() {
        let mut tree = WordTree::new();
        insert_word(&mut tree, "ba");
        insert_word(&mut tree, "ab");

        let root = tree.root().unwrap();
        assert_eq!(root.word(), "ba");
        assert_eq!(root.left().unwrap().word(), "ab");
        assert!(root.right().is_none());
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let mut tree = WordTree::new();
        assert!(tree.insert(312, "cat", Some("feline")));
        assert!(!tree.insert(312, "CAT ", Some("other")));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root().unwrap().definition(), Some("feline"));
    }

    #[test]
    fn sequential_insert_degenerates() {
        let mut tree = WordTree::new();
        for word in ["a", "b", "c", "d", "e"] {
            insert_word(&mut tree, word);
        }
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn in_order_is_ascending() {
        let mut tree = WordTree::new();
        for word in ["meadow", "ant", "zephyr", "cat", "bat", "ab", "ba"] {
            insert_word(&mut tree, word);
        }

        let keys: Vec<&WordKey> = tree.in_order().into_iter().map(Node::key).collect();
        assert_eq!(keys.len(), 7);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn in_order_with_depth_reports_levels() {
        let mut tree = WordTree::new();
        insert_word(&mut tree, "cat");
        insert_word(&mut tree, "bat");
        insert_word(&mut tree, "ant");

        let layout: Vec<(&str, usize)> = tree
            .in_order_with_depth()
            .into_iter()
            .map(|(n, d)| (n.word(), d))
            .collect();
        assert_eq!(layout, vec![("bat", 1), ("cat", 0), ("ant", 1)]);
    }

    #[test]
    fn get_by_key() {
        let mut tree = WordTree::new();
        insert_word(&mut tree, "cat");
        insert_word(&mut tree, "bat");

        let key = WordKey::new(311, "BAT");
        assert_eq!(tree.get(&key).map(Node::word), Some("bat"));
        assert!(tree.get(&WordKey::new(311, "tab")).is_none());
    }
}
