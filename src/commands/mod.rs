//! Command implementations

pub mod benchmark;
pub mod menu;
pub mod normalize;
pub mod search;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use menu::{Session, run_menu, run_menu_with};
pub use normalize::generate_balanced;
pub use search::{SearchReport, lookup, search, search_deepening};
