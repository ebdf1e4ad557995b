//! Benchmark command
//!
//! Runs full-depth searches for a random sample of stored words and random
//! absent probes, checking that both algorithms agree with the tree contents.

use crate::core::compute_key;
use crate::search::{DeepeningConfig, SearchTarget, depth_limited_search, iterative_deepening_search};
use crate::tree::WordTree;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Benchmark parameters
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Stored words to look up (capped at the tree size)
    pub count: usize,
    /// Random words guaranteed absent from the tree
    pub probes: usize,
    /// Fixed seed for reproducible sampling
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 50,
            probes: 10,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub nodes: usize,
    pub height: i64,
    pub present_queries: usize,
    pub absent_queries: usize,
    pub dls_hits: usize,
    pub iddfs_hits: usize,
    /// Present words either algorithm failed to find
    pub misses: usize,
    /// Absent words either algorithm claimed to find
    pub false_hits: usize,
    pub average_dls_visits: f64,
    pub average_iddfs_visits: f64,
    pub average_rounds: f64,
    pub max_path_len: usize,
    pub duration: Duration,
    pub queries_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.misses == 0 && self.false_hits == 0
    }
}

struct QueryStats {
    present: bool,
    dls_found: bool,
    iddfs_found: bool,
    dls_visits: usize,
    iddfs_visits: usize,
    rounds: usize,
    path_len: usize,
}

/// Run the benchmark against a built tree
///
/// Searches only read the tree, so queries run in parallel.
#[must_use]
pub fn run_benchmark(tree: &WordTree, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    let nodes = tree.in_order();
    let mut queries: Vec<(String, bool)> = nodes
        .choose_multiple(&mut rng, config.count.min(nodes.len()))
        .map(|node| (node.word().to_string(), true))
        .collect();
    queries.extend(absent_probes(tree, config.probes, &mut rng).into_iter().map(|w| (w, false)));

    let height = tree.height();
    let full_depth = DeepeningConfig::default().accumulating();

    let pb = if config.show_progress {
        ProgressBar::new(queries.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let stats: Vec<QueryStats> = queries
        .par_iter()
        .map(|(word, present)| {
            let target = SearchTarget::word(word);
            let dls = depth_limited_search(tree, &target, height);
            let iddfs = iterative_deepening_search(tree, &target, &full_depth);
            pb.inc(1);
            QueryStats {
                present: *present,
                dls_found: dls.is_found(),
                iddfs_found: iddfs.is_found(),
                dls_visits: dls.trace.len(),
                iddfs_visits: iddfs.trace.len(),
                rounds: iddfs.rounds,
                path_len: dls.path.len(),
            }
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("done");

    summarize(tree, &stats, duration)
}

fn summarize(tree: &WordTree, stats: &[QueryStats], duration: Duration) -> BenchmarkResult {
    let total = stats.len();
    let present: Vec<&QueryStats> = stats.iter().filter(|s| s.present).collect();
    let absent_queries = total - present.len();

    let misses = present
        .iter()
        .filter(|s| !(s.dls_found && s.iddfs_found))
        .count();
    let false_hits = stats
        .iter()
        .filter(|s| !s.present && (s.dls_found || s.iddfs_found))
        .count();

    let average = |f: fn(&QueryStats) -> usize| {
        if total == 0 {
            0.0
        } else {
            stats.iter().map(f).sum::<usize>() as f64 / total as f64
        }
    };

    let result = BenchmarkResult {
        nodes: tree.len(),
        height: tree.height(),
        present_queries: present.len(),
        absent_queries,
        dls_hits: present.iter().filter(|s| s.dls_found).count(),
        iddfs_hits: present.iter().filter(|s| s.iddfs_found).count(),
        misses,
        false_hits,
        average_dls_visits: average(|s| s.dls_visits),
        average_iddfs_visits: average(|s| s.iddfs_visits),
        average_rounds: average(|s| s.rounds),
        max_path_len: stats.iter().map(|s| s.path_len).max().unwrap_or(0),
        duration,
        queries_per_second: if duration.is_zero() {
            0.0
        } else {
            total as f64 / duration.as_secs_f64()
        },
    };

    info!(
        queries = total,
        misses = result.misses,
        false_hits = result.false_hits,
        "benchmark finished"
    );
    result
}

/// Random lowercase words whose key is not in the tree
fn absent_probes<R: Rng>(tree: &WordTree, count: usize, rng: &mut R) -> Vec<String> {
    let mut probes = Vec::with_capacity(count);
    while probes.len() < count {
        let len = rng.random_range(3..=9);
        let word: String = (0..len)
            .map(|_| char::from(rng.random_range(b'a'..=b'z')))
            .collect();
        if tree.get(&compute_key(&word)).is_none() {
            probes.push(word);
        }
    }
    probes
}
