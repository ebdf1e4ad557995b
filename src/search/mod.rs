//! Depth-first searches over the dictionary tree
//!
//! Two algorithms share one goal test and one trace format:
//! - Depth-limited search: a single bounded traversal
//! - Iterative deepening: repeated depth-limited rounds with growing limits

mod dls;
mod iddfs;
mod target;
mod types;

pub use dls::depth_limited_search;
pub use iddfs::{DeepeningConfig, iterative_deepening_search};
pub use target::SearchTarget;
pub use types::{DeepeningOutcome, PathStep, RoundTraceStep, SearchOutcome, TraceStep};
