//! Core domain types for the dictionary
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear ordering properties.

mod entry;
mod key;

pub use entry::DictionaryEntry;
pub use key::{WordKey, ascii_sum, compute_key, normalize};
