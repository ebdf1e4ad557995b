//! Dictionary Search
//!
//! A dictionary stored in a binary search tree keyed by (character-code sum,
//! normalized word), built in median-first order so it stays shallow, and
//! searched with depth-limited and iterative-deepening depth-first search.
//!
//! # Quick Start
//!
//! ```rust
//! use dict_search::core::DictionaryEntry;
//! use dict_search::search::DeepeningConfig;
//! use dict_search::tree::build_balanced_tree;
//!
//! let tree = build_balanced_tree(vec![
//!     DictionaryEntry::new("ant", "insect"),
//!     DictionaryEntry::new("bat", "mammal"),
//!     DictionaryEntry::new("cat", "feline"),
//! ]);
//! assert_eq!(tree.height(), 1);
//!
//! // Bounded search: the root only
//! let outcome = tree.dls(311, 0, Some("bat"));
//! assert!(outcome.found.is_none());
//!
//! // Deepening finds it one level down
//! let outcome = tree.iddfs(311, &DeepeningConfig::default(), Some("bat"));
//! assert_eq!(outcome.limit, Some(1));
//! ```

// Core domain types
pub mod core;

// Search tree and balanced construction
pub mod tree;

// DLS and IDDFS
pub mod search;

// Dictionary files and the embedded sample
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
