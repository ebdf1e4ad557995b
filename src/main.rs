//! Dictionary Search - CLI
//!
//! Build a dictionary tree in balanced insertion order and search it with
//! depth-limited or iterative-deepening search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dict_search::{
    commands::{
        BenchmarkConfig, Session, generate_balanced, lookup, run_benchmark, run_menu,
        search_deepening,
    },
    core::DictionaryEntry,
    dictionary::{read_balanced, sample_entries},
    interactive::run_viewer,
    output::{print_benchmark_result, print_search_report, write_deepening_report, write_tree_summary},
    tree::build_tree,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dict_search",
    about = "Dictionary binary search tree with depth-limited and iterative-deepening search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Balanced dictionary file (default: embedded sample dictionary)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Log search rounds and dictionary loading to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive text menu (default)
    Menu,

    /// Normalize a raw dictionary and write it in balanced order
    Normalize {
        /// Raw "word : definition" file
        input: PathBuf,

        /// Balanced dictionary file to write
        output: PathBuf,
    },

    /// Search for a word
    Search {
        /// Word to look up
        word: String,

        /// Depth limit (starting limit with --deepening)
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        limit: i64,

        /// Use iterative deepening only, up to the tree height
        #[arg(long)]
        deepening: bool,
    },

    /// Open the tree viewer
    Show,

    /// Benchmark DLS and IDDFS over random present and absent words
    Benchmark {
        /// Number of stored words to search
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Number of absent words to search
        #[arg(short, long, default_value = "10")]
        probes: usize,

        /// Seed for reproducible sampling
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the dictionary from the -d flag
///
/// A missing file is logged and yields an empty dictionary; any other read
/// failure is an error.
fn load_entries(path: Option<&Path>) -> Result<Vec<DictionaryEntry>> {
    let Some(path) = path else {
        return Ok(sample_entries());
    };

    match read_balanced(path) {
        Ok(entries) => Ok(entries),
        Err(err) if err.is_not_found() => {
            warn!(%err, "continuing with an empty dictionary");
            Ok(Vec::new())
        }
        Err(err) => Err(err).with_context(|| format!("loading {}", path.display())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to the menu if no command given
    let command = cli.command.unwrap_or(Commands::Menu);

    match command {
        Commands::Normalize { input, output } => run_normalize_command(&input, &output),
        Commands::Menu => {
            // The menu only preloads an explicitly given dictionary
            let entries = match cli.dictionary.as_deref() {
                Some(path) => load_entries(Some(path))?,
                None => Vec::new(),
            };
            run_menu(&mut Session::with_entries(entries), run_viewer)
        }
        Commands::Search {
            word,
            limit,
            deepening,
        } => {
            let entries = load_entries(cli.dictionary.as_deref())?;
            run_search_command(&entries, &word, limit, deepening)
        }
        Commands::Show => {
            let tree = build_tree(&load_entries(cli.dictionary.as_deref())?);
            write_tree_summary(&mut io::stdout(), &tree)?;
            run_viewer(&tree)
        }
        Commands::Benchmark {
            count,
            probes,
            seed,
        } => {
            let tree = build_tree(&load_entries(cli.dictionary.as_deref())?);
            println!(
                "Running benchmark on {} stored words and {probes} absent words...",
                count.min(tree.len())
            );
            let config = BenchmarkConfig {
                count,
                probes,
                seed,
                ..BenchmarkConfig::default()
            };
            print_benchmark_result(&run_benchmark(&tree, &config));
            Ok(())
        }
    }
}

fn run_normalize_command(input: &Path, output: &Path) -> Result<()> {
    let entries = generate_balanced(input, output)
        .with_context(|| format!("generating balanced dictionary from {}", input.display()))?;
    println!("BALANCED dictionary saved as: {}", output.display());
    println!("Unique words: {}", entries.len());
    Ok(())
}

fn run_search_command(
    entries: &[DictionaryEntry],
    word: &str,
    limit: i64,
    deepening: bool,
) -> Result<()> {
    let tree = build_tree(entries);

    if deepening {
        let outcome = search_deepening(&tree, word, limit);
        write_deepening_report(&mut io::stdout(), word.trim(), &outcome)?;
        return Ok(());
    }

    let report = lookup(&tree, word, limit).map_err(|e| anyhow::anyhow!(e))?;
    print_search_report(&report)?;
    Ok(())
}
