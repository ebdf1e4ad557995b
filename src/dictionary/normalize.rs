//! Raw dictionary text normalization
//!
//! Turns free-form `word : definition` lines into clean, deduplicated,
//! key-sorted entries ready for the balanced builder.

use super::error::{DictionaryError, Result};
use crate::core::{DictionaryEntry, normalize};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Normalize raw dictionary text
///
/// For each line:
/// - blank lines and lines without `:` are skipped
/// - the word keeps only letters and whitespace, then its first token is used
/// - parenthesised fragments are removed from the definition
/// - later lines repeating an earlier normalized word are dropped
///
/// The result is sorted by `(sum, normalized word)`.
///
/// # Examples
/// ```
/// use dict_search::dictionary::normalize_lines;
///
/// let entries = normalize_lines("cat : feline (pet)\nbat: mammal\nCat : duplicate");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].line, "bat : mammal");
/// assert_eq!(entries[1].line, "cat : feline");
/// ```
#[must_use]
pub fn normalize_lines(text: &str) -> Vec<DictionaryEntry> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut entries: Vec<DictionaryEntry> = text
        .lines()
        .filter_map(|line| {
            let (raw_word, raw_definition) = line.trim().split_once(':')?;
            let word = clean_word(raw_word)?;
            seen.insert(normalize(&word))
                .then(|| DictionaryEntry::new(&word, &strip_parenthesised(raw_definition)))
        })
        .collect();

    entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    entries
}

/// Read and normalize a raw dictionary file
///
/// # Errors
///
/// Returns [`DictionaryError::NotFound`] if the file is missing, or
/// [`DictionaryError::Io`] if it cannot be read.
pub fn normalize_file<P: AsRef<Path>>(path: P) -> Result<Vec<DictionaryEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DictionaryError::io(path, e))?;
    let entries = normalize_lines(&content);
    info!(path = %path.display(), unique = entries.len(), "dictionary normalized");
    Ok(entries)
}

/// First alphabetic token of the word part
fn clean_word(raw: &str) -> Option<String> {
    let letters: String = raw
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    letters.split_whitespace().next().map(str::to_string)
}

/// Drop every `( ... )` fragment; an unclosed `(` is kept verbatim
fn strip_parenthesised(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        result.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    result.push_str(rest);

    result.split_whitespace().collect::<Vec<_>>().join(" ")
}
