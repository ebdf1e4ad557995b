//! Balanced dictionary generation command

use crate::core::DictionaryEntry;
use crate::dictionary::{Result, normalize_file, write_balanced};
use crate::tree::balance_entries;
use std::path::Path;

/// Normalize a raw dictionary and write it in balanced insertion order
///
/// Returns the balanced list so the caller can build a tree without
/// re-reading the file.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be written.
pub fn generate_balanced<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<Vec<DictionaryEntry>> {
    let balanced = balance_entries(normalize_file(input)?);
    write_balanced(output, &balanced)?;
    Ok(balanced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::read_balanced;
    use std::fs;

    #[test]
    fn generate_writes_median_first() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("dict_search_raw_{}.txt", std::process::id()));
        let output = dir.join(format!("dict_search_bal_{}.txt", std::process::id()));
        fs::write(&input, "ant : insect\nbat : mammal (nocturnal)\ncat : feline\nbat : again\n")
            .unwrap();

        let balanced = generate_balanced(&input, &output).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        let reread = read_balanced(&output).unwrap();
        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);

        let words: Vec<&str> = balanced.iter().map(DictionaryEntry::word).collect();
        assert_eq!(words, vec!["cat", "bat", "ant"]);
        assert_eq!(
            written.lines().next(),
            Some("cat : feline (ASCII sum: 312)")
        );
        assert!(written.contains("bat : mammal (ASCII sum: 311)"));
        assert_eq!(reread, balanced);
    }

    #[test]
    fn generate_reports_missing_input() {
        let output = std::env::temp_dir().join("dict_search_never_written.txt");
        let err = generate_balanced("/definitely/not/here.txt", &output).unwrap_err();
        assert!(err.is_not_found());
    }
}
