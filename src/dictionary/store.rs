//! Balanced dictionary file format
//!
//! One entry per line, in balanced insertion order:
//!
//! ```text
//! word : definition (ASCII sum: N)
//! ```
//!
//! The suffix is informational. Readers recompute the sum from the word and
//! accept lines without it.

use super::error::{DictionaryError, Result};
use crate::core::DictionaryEntry;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

const SUM_LABEL: &str = "ASCII sum";

/// Render an entry as a balanced-file line
#[must_use]
pub fn format_line(entry: &DictionaryEntry) -> String {
    format!("{} ({SUM_LABEL}: {})", entry.line, entry.sum)
}

/// Parse one balanced-file line
///
/// Returns `None` for blank lines and lines without a `:` separator.
#[must_use]
pub fn parse_line(raw: &str) -> Option<DictionaryEntry> {
    let line = strip_sum_suffix(raw.trim());
    if line.is_empty() {
        return None;
    }
    DictionaryEntry::from_line(line)
}

/// Parse every line of a balanced file, keeping file order
#[must_use]
pub fn parse_balanced(content: &str) -> Vec<DictionaryEntry> {
    content.lines().filter_map(parse_line).collect()
}

/// Write entries in the given order
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be created or written.
pub fn write_balanced<P: AsRef<Path>>(path: P, entries: &[DictionaryEntry]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| DictionaryError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for entry in entries {
        writeln!(writer, "{}", format_line(entry)).map_err(|e| DictionaryError::io(path, e))?;
    }
    writer.flush().map_err(|e| DictionaryError::io(path, e))?;

    info!(path = %path.display(), entries = entries.len(), "balanced dictionary written");
    Ok(())
}

/// Read a balanced dictionary file
///
/// # Errors
///
/// Returns [`DictionaryError::NotFound`] if the file is missing, or
/// [`DictionaryError::Io`] if it cannot be read.
pub fn read_balanced<P: AsRef<Path>>(path: P) -> Result<Vec<DictionaryEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DictionaryError::io(path, e))?;
    let entries = parse_balanced(&content);
    info!(path = %path.display(), entries = entries.len(), "balanced dictionary read");
    Ok(entries)
}

/// Read a balanced dictionary, falling back to an empty one on any error
#[must_use]
pub fn read_balanced_or_empty<P: AsRef<Path>>(path: P) -> Vec<DictionaryEntry> {
    read_balanced(path).unwrap_or_else(|err| {
        warn!(%err, "continuing with an empty dictionary");
        Vec::new()
    })
}

/// Remove a trailing `(ASCII sum: N)` if present
fn strip_sum_suffix(line: &str) -> &str {
    let Some(body) = line.strip_suffix(')') else {
        return line;
    };
    let Some(open) = body.rfind('(') else {
        return line;
    };

    let is_sum = body[open + 1..]
        .trim()
        .strip_prefix(SUM_LABEL)
        .and_then(|rest| rest.trim_start().strip_prefix(':'))
        .map(str::trim)
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));

    if is_sum { body[..open].trim_end() } else { line }
}
