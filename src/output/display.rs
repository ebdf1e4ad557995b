//! Display functions for command results

use super::formatters::{create_progress_bar, format_path, format_round_step, format_trace_step};
use crate::commands::{BenchmarkResult, SearchReport};
use crate::search::DeepeningOutcome;
use crate::tree::{Node, WordTree};
use colored::Colorize;
use std::io::{self, Write};

/// Write a lookup report: bounded trace, then deepening rounds if they ran
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_search_report<W: Write>(out: &mut W, report: &SearchReport<'_>) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Searching: {} (sum {}) with depth limit {}",
        report.word.bright_yellow().bold(),
        report.sum,
        report.limit
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    writeln!(out, "\nTrace with limit {}:", report.limit)?;
    if report.dls.trace.is_empty() {
        writeln!(out, "  (no visits)")?;
    }
    for step in &report.dls.trace {
        writeln!(out, "  {}", format_trace_step(step))?;
    }

    if let Some(node) = report.dls.found {
        writeln!(out, "\nPath root -> target:")?;
        writeln!(out, "  {}", format_path(&report.dls.path))?;
        return write_found(out, node, "Found");
    }

    writeln!(
        out,
        "\n{}",
        format!(
            "'{}' (sum {}) not found within limit {}.",
            report.word, report.sum, report.limit
        )
        .yellow()
    )?;

    let Some(deepening) = &report.deepening else {
        return Ok(());
    };

    writeln!(out, "Applying iterative deepening up to height {}...", report.height)?;
    if let Some(node) = deepening.found {
        writeln!(out, "\nAccumulated trace by round (word, sum, level, limit):")?;
        for step in &deepening.trace {
            writeln!(out, "  {}", format_round_step(step))?;
        }
        writeln!(out, "\nPath root -> target (deepening):")?;
        writeln!(out, "  {}", format_path(&deepening.path))?;
        write_found(out, node, "Found with iterative deepening")
    } else {
        writeln!(
            out,
            "{}",
            format!("Not found with iterative deepening up to limit {}.", report.height)
                .red()
                .bold()
        )
    }
}

fn write_found<W: Write>(out: &mut W, node: &Node, label: &str) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        format!("✅ {label}: '{}' | sum: {}", node.word(), node.sum())
            .green()
            .bold()
    )?;
    if let Some(definition) = node.definition() {
        writeln!(out, "Definition: {definition}")?;
    }
    Ok(())
}

/// Write an iterative-deepening run on its own
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_deepening_report<W: Write>(
    out: &mut W,
    word: &str,
    outcome: &DeepeningOutcome<'_>,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Iterative deepening: {} ({} rounds)",
        word.bright_yellow().bold(),
        outcome.rounds
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    if outcome.trace.is_empty() {
        writeln!(out, "  (no visits)")?;
    }
    for step in &outcome.trace {
        writeln!(out, "  {}", format_round_step(step))?;
    }

    match outcome.found {
        Some(node) => {
            writeln!(out, "\nPath root -> target:")?;
            writeln!(out, "  {}", format_path(&outcome.path))?;
            write_found(out, node, "Found with iterative deepening")
        }
        None => writeln!(
            out,
            "\n{}",
            format!("'{word}' not found with iterative deepening.").red().bold()
        ),
    }
}

/// Print a lookup report to stdout
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_search_report(report: &SearchReport<'_>) -> io::Result<()> {
    write_search_report(&mut io::stdout().lock(), report)
}

/// Write the size and shape of a built tree
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_tree_summary<W: Write>(out: &mut W, tree: &WordTree) -> io::Result<()> {
    let optimal = if tree.is_empty() {
        -1
    } else {
        (tree.len() as f64).log2().floor() as i64
    };
    writeln!(
        out,
        "Tree built (balanced insertion order): {} nodes, height {} (minimum {})",
        tree.len().to_string().bright_cyan(),
        tree.height().to_string().bright_cyan(),
        optimal
    )
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🌳 {}", "Tree:".bright_cyan().bold());
    println!("   Nodes:            {}", result.nodes);
    println!("   Height:           {}", result.height);

    println!("\n📊 {}", "Queries:".bright_cyan().bold());
    println!("   Present words:    {}", result.present_queries);
    println!("   Absent probes:    {}", result.absent_queries);

    let present = result.present_queries as f64;
    println!(
        "   DLS hits:         [{}] {}",
        create_progress_bar(result.dls_hits as f64, present, 30).green(),
        result.dls_hits
    );
    println!(
        "   IDDFS hits:       [{}] {}",
        create_progress_bar(result.iddfs_hits as f64, present, 30).green(),
        result.iddfs_hits
    );
    println!(
        "   Avg DLS visits:   {}",
        format!("{:.2}", result.average_dls_visits).bright_yellow()
    );
    println!(
        "   Avg IDDFS visits: {}",
        format!("{:.2}", result.average_iddfs_visits).bright_yellow()
    );
    println!("   Avg IDDFS rounds: {:.2}", result.average_rounds);
    println!("   Longest path:     {}", result.max_path_len);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if result.is_consistent() {
        println!("\n{}", "✅ All present words found, no absent word matched".green().bold());
    } else {
        println!(
            "\n{}",
            format!(
                "❌ {} present words missed, {} absent words matched",
                result.misses, result.false_hits
            )
            .red()
            .bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::lookup;
    use crate::core::DictionaryEntry;
    use crate::tree::build_balanced_tree;

    fn tree() -> WordTree {
        build_balanced_tree(vec![
            DictionaryEntry::new("ant", "insect"),
            DictionaryEntry::new("bat", "mammal"),
            DictionaryEntry::new("cat", "feline"),
        ])
    }

    fn render(report: &SearchReport<'_>) -> String {
        let mut buf = Vec::new();
        write_search_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn report_for_direct_hit() {
        let tree = tree();
        let text = render(&lookup(&tree, "ant", 1).unwrap());
        assert!(text.contains("- cat (sum=312, level=0)"));
        assert!(text.contains("cat(312) -> ant(323)"));
        assert!(text.contains("Definition: insect"));
        assert!(!text.contains("iterative deepening"));
    }

    #[test]
    fn report_for_deepening_hit() {
        let tree = tree();
        let text = render(&lookup(&tree, "bat", 0).unwrap());
        assert!(text.contains("not found within limit 0"));
        assert!(text.contains("limit=1"));
        assert!(text.contains("cat(312) -> bat(311)"));
    }

    #[test]
    fn report_for_miss() {
        let tree = tree();
        let text = render(&lookup(&tree, "dog", 0).unwrap());
        assert!(text.contains("Not found with iterative deepening"));
    }

    #[test]
    fn deepening_report_lists_rounds() {
        let tree = tree();
        let outcome = crate::commands::search_deepening(&tree, "bat", 0);
        let mut buf = Vec::new();
        write_deepening_report(&mut buf, "bat", &outcome).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("2 rounds"));
        assert!(text.contains("limit=0"));
        assert!(text.contains("cat(312) -> bat(311)"));
    }

    #[test]
    fn deepening_report_for_miss() {
        let tree = tree();
        let outcome = crate::commands::search_deepening(&tree, "dog", 0);
        let mut buf = Vec::new();
        write_deepening_report(&mut buf, "dog", &outcome).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("'dog' not found with iterative deepening."));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn report_write_errors_propagate() {
        let tree = tree();
        let report = lookup(&tree, "ant", 1).unwrap();
        let err = write_search_report(&mut ClosedPipe, &report).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn tree_summary_mentions_height() {
        let mut buf = Vec::new();
        write_tree_summary(&mut buf, &tree()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("nodes"));
        assert!(text.contains("(minimum 1)"));
    }
}
