//! Word lookup command
//!
//! The query entry points a front end calls: a bounded search, an
//! iterative-deepening search, and the combined lookup that falls back from
//! one to the other.

use crate::core::ascii_sum;
use crate::search::{
    DeepeningConfig, DeepeningOutcome, SearchOutcome, SearchTarget, depth_limited_search,
    iterative_deepening_search,
};
use crate::tree::{Node, WordTree};

/// Result of looking a word up
pub struct SearchReport<'t> {
    pub word: String,
    pub sum: u64,
    pub limit: i64,
    pub height: i64,
    pub dls: SearchOutcome<'t>,
    /// Present only when the bounded search missed and deepening was tried
    pub deepening: Option<DeepeningOutcome<'t>>,
}

impl<'t> SearchReport<'t> {
    #[must_use]
    pub fn found(&self) -> Option<&'t Node> {
        self.dls
            .found
            .or_else(|| self.deepening.as_ref().and_then(|d| d.found))
    }
}

fn target_for(word: &str) -> SearchTarget {
    SearchTarget::new(ascii_sum(word), Some(word))
}

/// Depth-limited search for `word`
#[must_use]
pub fn search<'t>(tree: &'t WordTree, word: &str, limit: i64) -> SearchOutcome<'t> {
    depth_limited_search(tree, &target_for(word.trim()), limit)
}

/// Iterative deepening for `word` from `start_limit` up to the tree height
///
/// Traces of every round are kept.
#[must_use]
pub fn search_deepening<'t>(
    tree: &'t WordTree,
    word: &str,
    start_limit: i64,
) -> DeepeningOutcome<'t> {
    let config = DeepeningConfig::default()
        .starting_at(start_limit)
        .accumulating();
    iterative_deepening_search(tree, &target_for(word.trim()), &config)
}

/// Bounded search first, then deepening from `limit + 1` if it missed
///
/// # Errors
///
/// Returns an error if the word is empty after trimming.
pub fn lookup<'t>(tree: &'t WordTree, word: &str, limit: i64) -> Result<SearchReport<'t>, String> {
    let word = word.trim();
    if word.is_empty() {
        return Err("Word must not be empty".to_string());
    }

    let dls = search(tree, word, limit);
    let deepening = if dls.is_found() {
        None
    } else {
        Some(search_deepening(tree, word, limit.saturating_add(1)))
    };

    Ok(SearchReport {
        word: word.to_string(),
        sum: ascii_sum(word),
        limit,
        height: tree.height(),
        dls,
        deepening,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::sample_entries;
    use crate::tree::build_tree;

    fn sample_tree() -> WordTree {
        build_tree(&sample_entries())
    }

    #[test]
    fn lookup_found_within_limit() {
        let tree = sample_tree();
        let root_word = tree.root().unwrap().word().to_string();

        let report = lookup(&tree, &root_word, 0).unwrap();
        assert!(report.dls.is_found());
        assert!(report.deepening.is_none());
        assert_eq!(report.found().map(Node::word), Some(root_word.as_str()));
    }

    #[test]
    fn lookup_falls_back_to_deepening() {
        let tree = sample_tree();
        let deepest = tree
            .in_order_with_depth()
            .into_iter()
            .max_by_key(|&(_, depth)| depth)
            .map(|(node, _)| node.word().to_string())
            .unwrap();

        let report = lookup(&tree, &deepest, 0).unwrap();
        assert!(!report.dls.is_found());

        let deepening = report.deepening.as_ref().unwrap();
        assert!(deepening.is_found());
        assert_eq!(deepening.limit, Some(tree.height()));
        // Deepening starts one past the bounded limit
        assert!(deepening.trace.iter().all(|s| s.limit >= 1));
        assert_eq!(report.found().map(Node::word), Some(deepest.as_str()));
    }

    #[test]
    fn lookup_absent_word() {
        let tree = sample_tree();
        let report = lookup(&tree, "xylophone", 1).unwrap();
        assert!(report.found().is_none());
        assert!(report.dls.path.is_empty());
        assert!(report.deepening.is_some());
    }

    #[test]
    fn lookup_rejects_empty_word() {
        let tree = sample_tree();
        assert!(lookup(&tree, "   ", 1).is_err());
    }

    #[test]
    fn lookup_is_case_insensitive_only_when_sum_matches() {
        let tree = sample_tree();
        // Upper case changes the sum, so the composite key differs
        let report = lookup(&tree, "CAT", 10).unwrap();
        assert!(report.found().is_none());
        let report = lookup(&tree, " cat ", 10).unwrap();
        assert!(report.found().is_some());
    }

    #[test]
    fn search_deepening_at_height_limit() {
        let tree = sample_tree();
        let outcome = search_deepening(&tree, "zephyr", tree.height() + 1);
        // Start beyond the height: degenerate range
        assert!(outcome.found.is_none());
        assert!(outcome.trace.is_empty());
    }
}
