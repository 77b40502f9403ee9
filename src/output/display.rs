//! Display functions for command results

use crate::commands::{DictionaryInfo, RemoveOutcome, SolveReport};
use colored::Colorize;

/// Print the result of a solve run
pub fn print_solve_report(report: &SolveReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}  ({} mode)",
        report.start.to_uppercase().bright_yellow().bold(),
        report.end.to_uppercase().bright_yellow().bold(),
        report.mode
    );
    println!("{}", "─".repeat(60).cyan());

    match &report.outcome {
        Ok(solution) => {
            for (i, word) in solution.path.iter().enumerate() {
                if i == 0 {
                    println!("\n  {}", word.to_uppercase().bold());
                } else {
                    println!("  {} {}", "→".cyan(), word.to_uppercase());
                }
            }
            println!();
            println!(
                "{}",
                format!(
                    "✅ Solved in {} step{}",
                    solution.steps,
                    if solution.steps == 1 { "" } else { "s" }
                )
                .green()
                .bold()
            );
        }
        Err(reason) => {
            println!("\n{}", format!("❌ {reason}").red().bold());
        }
    }

    println!("   ({:.1?})", report.duration);
}

/// Print the result of removing a word from a dictionary file
pub fn print_remove_outcome(word: &str, outcome: &RemoveOutcome) {
    match outcome {
        RemoveOutcome::Removed(count) => {
            println!(
                "{}",
                format!("Removed \"{}\" ({count} line{})", word.trim(), plural(*count))
                    .green()
                    .bold()
            );
        }
        RemoveOutcome::NotFound => {
            println!(
                "{}",
                format!("Word \"{}\" not found", word.trim()).yellow()
            );
        }
    }
}

/// Print dictionary stats
pub fn print_dictionary_info(info: &DictionaryInfo) {
    println!("{} {}", "Dictionary:".bright_cyan().bold(), info.source);
    println!("{} {}", "Words:     ".bright_cyan().bold(), info.size);
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
