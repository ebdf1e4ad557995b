//! Interactive text menu
//!
//! Generate a balanced dictionary, build and view the tree, and search it.
//! Everything the menu remembers between choices lives in [`Session`].

use super::normalize::generate_balanced;
use super::search::lookup;
use crate::core::DictionaryEntry;
use crate::dictionary::read_balanced;
use crate::output::{write_search_report, write_tree_summary};
use crate::tree::{WordTree, build_tree};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// State carried across menu choices
#[derive(Debug, Default)]
pub struct Session {
    /// Balanced list from the last generation, if any
    pub entries: Vec<DictionaryEntry>,
    pub tree: Option<WordTree>,
}

impl Session {
    #[must_use]
    pub fn with_entries(entries: Vec<DictionaryEntry>) -> Self {
        Self {
            entries,
            tree: None,
        }
    }

    /// The built tree, if it has at least one node
    #[must_use]
    pub fn searchable_tree(&self) -> Option<&WordTree> {
        self.tree.as_ref().filter(|t| !t.is_empty())
    }
}

/// Called with the freshly built tree (the TUI viewer in the binary)
pub type Viewer = fn(&WordTree) -> Result<()>;

/// Run the menu on stdin/stdout
///
/// # Errors
///
/// Returns an error on terminal I/O failure or if the viewer fails.
pub fn run_menu(session: &mut Session, viewer: Viewer) -> Result<()> {
    let stdin = io::stdin();
    run_menu_with(session, &mut stdin.lock(), &mut io::stdout(), viewer)
}

/// Run the menu on arbitrary input and output streams
///
/// End of input behaves like choosing to quit.
///
/// # Errors
///
/// Returns an error on I/O failure or if the viewer fails.
pub fn run_menu_with<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    viewer: Viewer,
) -> Result<()> {
    loop {
        print_menu(output)?;
        let Some(choice) = prompt(input, output, "Choose an option (1-4)")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => generate_step(session, input, output)?,
            "2" => build_step(session, input, output, viewer)?,
            "3" => match session.searchable_tree() {
                Some(tree) => search_step(tree, input, output)?,
                None => writeln!(output, "Build the tree first (option 2).")?,
            },
            "4" => {
                writeln!(output, "Goodbye.")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Choose 1-4.")?,
        }

        if prompt(input, output, "\nPress Enter to continue...")?.is_none() {
            return Ok(());
        }
    }
}

fn print_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\n{}", "=".repeat(58).cyan())?;
    writeln!(
        output,
        "{}",
        "      DICTIONARY MENU: SEARCH WITH DLS OR IDDFS".bright_cyan().bold()
    )?;
    writeln!(output, "{}", "=".repeat(58).cyan())?;
    writeln!(output, "1) Normalize and generate BALANCED dictionary")?;
    writeln!(output, "2) Build tree and view")?;
    writeln!(output, "3) Search the tree (DLS or IDDFS)")?;
    writeln!(output, "4) Quit")?;
    writeln!(output, "{}", "=".repeat(58).cyan())
}

fn generate_step<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(source) = prompt(input, output, "Input file (raw text)")? else {
        return Ok(());
    };
    let Some(target) = prompt(
        input,
        output,
        "Output BALANCED file (e.g. balanced_dictionary.txt)",
    )?
    else {
        return Ok(());
    };

    match generate_balanced(&source, &target) {
        Ok(entries) => {
            writeln!(output, "BALANCED dictionary saved as: {target}")?;
            writeln!(output, "Unique words: {}", entries.len())?;
            session.entries = entries;
        }
        Err(err) => {
            warn!(%err, "dictionary generation failed");
            writeln!(output, "{}", format!("Error: {err}").red())?;
            session.entries.clear();
        }
    }
    Ok(())
}

fn build_step<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    viewer: Viewer,
) -> Result<()> {
    if session.entries.is_empty() {
        writeln!(
            output,
            "\nNo balanced list in memory. A balanced dictionary file is required."
        )?;
        let path = prompt(input, output, "Path to BALANCED file")?.unwrap_or_default();
        if path.is_empty() {
            writeln!(
                output,
                "No balanced file given. Generate one first with option 1."
            )?;
            return Ok(());
        }

        let entries = read_balanced(&path).unwrap_or_else(|err| {
            warn!(%err, "could not read balanced dictionary");
            Vec::new()
        });
        if entries.is_empty() {
            writeln!(output, "Could not read or parse the balanced file.")?;
            return Ok(());
        }
        session.entries = entries;
    }

    let tree = build_tree(&session.entries);
    write_tree_summary(output, &tree)?;
    viewer(&tree)?;
    session.tree = Some(tree);
    Ok(())
}

fn search_step<R: BufRead, W: Write>(tree: &WordTree, input: &mut R, output: &mut W) -> Result<()> {
    let word = prompt(input, output, "Word to search")?.unwrap_or_default();
    if word.is_empty() {
        writeln!(output, "Error: enter a non-empty word.")?;
        return Ok(());
    }

    let raw_limit = prompt(input, output, "Maximum search depth")?.unwrap_or_default();
    let Ok(limit) = raw_limit.parse::<i64>() else {
        writeln!(output, "Error: enter a valid number for the depth.")?;
        return Ok(());
    };

    match lookup(tree, &word, limit) {
        Ok(report) => write_search_report(output, &report)?,
        Err(err) => writeln!(output, "Error: {err}")?,
    }
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
