//! Dictionary search tree
//!
//! A plain binary search tree keyed by [`WordKey`](crate::core::WordKey), plus
//! the median-first ordering that keeps it shallow without rebalancing.

mod balance;
mod bst;
mod build;
mod node;

pub use balance::{balanced_indices, balanced_order};
pub use bst::WordTree;
pub use build::{balance_entries, build_balanced_tree, build_tree};
pub use node::Node;
