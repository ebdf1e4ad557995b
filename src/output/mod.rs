//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_search_report, write_deepening_report, write_search_report,
    write_tree_summary,
};
