//! Display functions for command results

use super::formatters::{format_cannot_be, format_must_be, format_path};
use crate::commands::{ConstraintReport, DictionaryReport, SolveResult};
use colored::Colorize;

/// Print the result of a solve
///
/// Guess sequences go to stdout one per line; the header and summary are
/// decoration around them.
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Reversing: {}",
        result.solution.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, row) in result.rows.iter().enumerate() {
        println!("  Row {}: {} {}", i + 1, row.to_emoji(), row);
    }
    println!();

    for path in &result.paths {
        println!("{}", format_path(path));
    }

    if verbose {
        println!("\n  Dictionary:  {} words", result.dictionary_size);
        println!("  Tree nodes:  {}", result.node_count);
        println!("  Search time: {:.3}s", result.duration.as_secs_f64());
    }

    println!();
    if result.paths.is_empty() {
        println!("{}", "❌ No guess sequence fits this grid".red().bold());
    } else if result.is_truncated() {
        println!(
            "{}",
            format!(
                "✅ Showing {} of {} guess sequences",
                result.paths.len(),
                result.total_paths
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("✅ Found {} guess sequences", result.total_paths)
                .green()
                .bold()
        );
    }
}

/// Print a dictionary listing, one word per line
pub fn print_dictionary_report(report: &DictionaryReport) {
    for word in &report.words {
        println!("{word}");
    }

    if !report.duplicates.is_empty() {
        eprintln!(
            "{} {} repeated: {}",
            "warning:".yellow().bold(),
            report.duplicates.len(),
            report.duplicates.join(", ")
        );
    }
    eprintln!("{} words", report.len());
}

/// Print the constraints derived for one row
pub fn print_constraint_report(report: &ConstraintReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} {} ",
        format!("ROW {}", report.row).bright_cyan().bold(),
        report.feedback.to_emoji(),
        format!("after {}", report.adjacent_word.to_uppercase()).bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   must_be:    {}", format_must_be(&report.constraints));
    println!("   cannot_be:  {}", format_cannot_be(&report.constraints));

    println!(
        "\n📊 {} dictionary words fit:",
        report.candidates.len().to_string().bright_yellow()
    );
    for word in report.candidates.iter().take(20) {
        println!("   • {word}");
    }
    if report.candidates.len() > 20 {
        println!("   … and {} more", report.candidates.len() - 20);
    }
}
