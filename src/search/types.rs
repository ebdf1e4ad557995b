//! Search results: traces, paths and outcomes

use crate::tree::Node;

/// One node visit recorded by a depth-limited search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub word: String,
    pub sum: u64,
    pub level: usize,
}

/// A visit recorded during iterative deepening, tagged with the round's limit
///
/// The same node shows up once per round, so the limit tells the rounds apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTraceStep {
    pub word: String,
    pub sum: u64,
    pub level: usize,
    pub limit: i64,
}

/// One hop of the root-to-target path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub word: String,
    pub sum: u64,
}

impl TraceStep {
    pub(crate) fn visit(node: &Node, level: usize) -> Self {
        Self {
            word: node.word().to_string(),
            sum: node.sum(),
            level,
        }
    }

    #[must_use]
    pub fn in_round(self, limit: i64) -> RoundTraceStep {
        RoundTraceStep {
            word: self.word,
            sum: self.sum,
            level: self.level,
            limit,
        }
    }
}

impl From<&Node> for PathStep {
    fn from(node: &Node) -> Self {
        Self {
            word: node.word().to_string(),
            sum: node.sum(),
        }
    }
}

/// Result of a depth-limited search
#[derive(Debug)]
pub struct SearchOutcome<'t> {
    pub found: Option<&'t Node>,
    pub trace: Vec<TraceStep>,
    /// Root-to-target path; empty unless `found` is set
    pub path: Vec<PathStep>,
}

impl SearchOutcome<'_> {
    pub(crate) const fn not_found(trace: Vec<TraceStep>) -> Self {
        Self {
            found: None,
            trace,
            path: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.found.is_some()
    }
}

/// Result of an iterative-deepening search
#[derive(Debug)]
pub struct DeepeningOutcome<'t> {
    pub found: Option<&'t Node>,
    /// Combined trace of every round; empty unless accumulation was requested
    pub trace: Vec<RoundTraceStep>,
    pub path: Vec<PathStep>,
    /// Limit of the round that found the target
    pub limit: Option<i64>,
    /// Number of depth-limited rounds actually run
    pub rounds: usize,
}

impl DeepeningOutcome<'_> {
    pub(crate) const fn empty() -> Self {
        Self {
            found: None,
            trace: Vec::new(),
            path: Vec::new(),
            limit: None,
            rounds: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.found.is_some()
    }
}
