//! Formatting utilities for terminal output

use crate::search::{PathStep, RoundTraceStep, TraceStep};

/// Format a root-to-target path as `root(sum) -> ... -> target(sum)`
#[must_use]
pub fn format_path(path: &[PathStep]) -> String {
    path.iter()
        .map(|step| format!("{}({})", step.word, step.sum))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// One trace line, indented by level
#[must_use]
pub fn format_trace_step(step: &TraceStep) -> String {
    format!(
        "{}- {} (sum={}, level={})",
        level_indent(step.level),
        step.word,
        step.sum,
        step.level
    )
}

/// One accumulated trace line, with the round's limit
#[must_use]
pub fn format_round_step(step: &RoundTraceStep) -> String {
    format!(
        "{}- {} (sum={}, level={}, limit={})",
        level_indent(step.level),
        step.word,
        step.sum,
        step.level,
        step.limit
    )
}

/// Two spaces per level
#[must_use]
pub fn level_indent(level: usize) -> String {
    "  ".repeat(level)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
