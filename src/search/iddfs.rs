//! Iterative-deepening depth-first search

use super::dls::depth_limited_search;
use super::target::SearchTarget;
use super::types::{DeepeningOutcome, SearchOutcome};
use crate::tree::WordTree;
use tracing::debug;

/// Limits for an iterative-deepening run
///
/// Out-of-range values are normalized rather than rejected:
/// - `step <= 0` becomes 1
/// - a missing or negative `initial_limit` becomes 0
/// - a missing `max_limit` becomes the tree height; a present one is floored at 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepeningConfig {
    pub initial_limit: Option<i64>,
    pub step: i64,
    pub max_limit: Option<i64>,
    /// Keep every round's trace, tagged with the limit used
    pub accumulate_traces: bool,
}

impl Default for DeepeningConfig {
    fn default() -> Self {
        Self {
            initial_limit: None,
            step: 1,
            max_limit: None,
            accumulate_traces: false,
        }
    }
}

impl DeepeningConfig {
    #[must_use]
    pub const fn starting_at(mut self, limit: i64) -> Self {
        self.initial_limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub const fn up_to(mut self, limit: i64) -> Self {
        self.max_limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn accumulating(mut self) -> Self {
        self.accumulate_traces = true;
        self
    }

    /// Normalized `(initial, step, max)` for a given tree
    #[must_use]
    pub fn resolve(&self, tree: &WordTree) -> (i64, i64, i64) {
        let step = if self.step <= 0 { 1 } else { self.step };
        let initial = self.initial_limit.filter(|&l| l >= 0).unwrap_or(0);
        let max = self.max_limit.map_or_else(|| tree.height(), |m| m.max(0));
        (initial, step, max)
    }
}

/// Run depth-limited searches with growing limits until the target turns up
///
/// Stops at the first round that finds the target. A degenerate range
/// (initial limit above the max) returns an empty not-found outcome.
///
/// # Examples
/// ```
/// use dict_search::search::{DeepeningConfig, SearchTarget, iterative_deepening_search};
/// use dict_search::tree::WordTree;
///
/// let mut tree = WordTree::new();
/// tree.insert(312, "cat", None);
///
/// let config = DeepeningConfig::default().starting_at(5).up_to(2);
/// let outcome = iterative_deepening_search(&tree, &SearchTarget::word("cat"), &config);
/// assert!(outcome.found.is_none());
/// assert!(outcome.trace.is_empty());
/// ```
#[must_use]
pub fn iterative_deepening_search<'t>(
    tree: &'t WordTree,
    target: &SearchTarget,
    config: &DeepeningConfig,
) -> DeepeningOutcome<'t> {
    let (initial, step, max) = config.resolve(tree);

    if tree.is_empty() || initial > max {
        debug!(initial, max, "empty deepening range");
        return DeepeningOutcome::empty();
    }

    let mut outcome = DeepeningOutcome::empty();
    let mut limit = initial;

    while limit <= max {
        let SearchOutcome { found, trace, path } = depth_limited_search(tree, target, limit);
        outcome.rounds += 1;
        debug!(
            limit,
            visited = trace.len(),
            found = found.is_some(),
            "deepening round"
        );

        if config.accumulate_traces {
            outcome
                .trace
                .extend(trace.into_iter().map(|step| step.in_round(limit)));
        }

        if found.is_some() {
            outcome.found = found;
            outcome.path = path;
            outcome.limit = Some(limit);
            return outcome;
        }

        let Some(next) = limit.checked_add(step) else {
            break;
        };
        limit = next;
    }

    outcome
}

impl WordTree {
    /// Iterative-deepening search for `target_sum`, optionally pinned to a word
    #[must_use]
    pub fn iddfs(
        &self,
        target_sum: u64,
        config: &DeepeningConfig,
        target_word: Option<&str>,
    ) -> DeepeningOutcome<'_> {
        iterative_deepening_search(self, &SearchTarget::new(target_sum, target_word), config)
    }
}
