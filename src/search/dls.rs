//! Depth-limited search
//!
//! Iterative depth-first traversal with an explicit stack. Parent links are
//! kept in a table local to each call and used to rebuild the root path.

use super::target::SearchTarget;
use super::types::{PathStep, SearchOutcome, TraceStep};
use crate::tree::{Node, WordTree};
use tracing::debug;

/// Pending visit on the stack
struct Frame<'t> {
    node: &'t Node,
    level: usize,
    /// Index of the parent in the visited table
    parent: Option<usize>,
}

/// Depth-first search that expands nodes only above `limit`
///
/// Every popped node is recorded in the trace. A node whose level exceeds
/// `limit` is recorded but neither tested nor expanded; children are pushed
/// only while `level < limit`. Right is pushed before left so the left child
/// is visited first.
///
/// # Examples
/// ```
/// use dict_search::search::{SearchTarget, depth_limited_search};
/// use dict_search::tree::WordTree;
///
/// let mut tree = WordTree::new();
/// tree.insert(312, "cat", None);
///
/// let outcome = depth_limited_search(&tree, &SearchTarget::word("dog"), 3);
/// assert!(outcome.found.is_none());
/// assert_eq!(outcome.trace.len(), 1);
/// assert!(outcome.path.is_empty());
/// ```
#[must_use]
pub fn depth_limited_search<'t>(
    tree: &'t WordTree,
    target: &SearchTarget,
    limit: i64,
) -> SearchOutcome<'t> {
    let Some(root) = tree.root() else {
        return SearchOutcome::not_found(Vec::new());
    };

    let mut visited: Vec<(&'t Node, Option<usize>)> = Vec::with_capacity(tree.len());
    let mut trace = Vec::new();
    let mut stack = vec![Frame {
        node: root,
        level: 0,
        parent: None,
    }];

    while let Some(Frame {
        node,
        level,
        parent,
    }) = stack.pop()
    {
        let index = visited.len();
        visited.push((node, parent));
        trace.push(TraceStep::visit(node, level));

        let depth = level as i64;
        if depth > limit {
            continue;
        }

        if target.matches(node) {
            let path = root_path(&visited, index);
            debug!(goal = %target, limit, visited = trace.len(), "target found");
            return SearchOutcome {
                found: Some(node),
                trace,
                path,
            };
        }

        if depth < limit {
            for child in [node.right(), node.left()].into_iter().flatten() {
                stack.push(Frame {
                    node: child,
                    level: level + 1,
                    parent: Some(index),
                });
            }
        }
    }

    debug!(goal = %target, limit, visited = trace.len(), "target not found");
    SearchOutcome::not_found(trace)
}

/// Follow parent indices back to the root and return the path root-first
fn root_path(visited: &[(&Node, Option<usize>)], mut index: usize) -> Vec<PathStep> {
    let mut path = Vec::new();
    loop {
        let (node, parent) = visited[index];
        path.push(PathStep::from(node));
        match parent {
            Some(p) => index = p,
            None => break,
        }
    }
    path.reverse();
    path
}

impl WordTree {
    /// Depth-limited search for `target_sum`, optionally pinned to a word
    ///
    /// With `target_word`, a node matches only on the full composite key.
    /// Without it, no goal test runs and the trace covers every node within
    /// `limit`.
    #[must_use]
    pub fn dls(&self, target_sum: u64, limit: i64, target_word: Option<&str>) -> SearchOutcome<'_> {
        depth_limited_search(self, &SearchTarget::new(target_sum, target_word), limit)
    }
}
