//! Dictionary sources
//!
//! Raw text normalization, the balanced file format, and an embedded sample.

mod embedded;
pub mod error;
pub mod normalize;
pub mod store;

pub use embedded::{SAMPLE_DICTIONARY, SAMPLE_DICTIONARY_COUNT};
pub use error::{DictionaryError, Result};
pub use normalize::{normalize_file, normalize_lines};
pub use store::{read_balanced, read_balanced_or_empty, write_balanced};

use crate::core::DictionaryEntry;
use crate::tree::balance_entries;

/// The embedded sample, normalized and in balanced insertion order
#[must_use]
pub fn sample_entries() -> Vec<DictionaryEntry> {
    balance_entries(normalize_lines(&SAMPLE_DICTIONARY.join("\n")))
}
