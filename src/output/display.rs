//! Display functions for command results

use super::formatters::{divider, head_and_tail};
use crate::commands::{CheckResult, GenerateResult};
use colored::Colorize;

fn heading(text: &str) -> String {
    text.bright_cyan().bold().to_string()
}

/// Build the report shown after generating: counts, output path and the
/// first and last `preview` words
#[must_use]
pub fn generate_report(result: &GenerateResult, preview: usize) -> String {
    let mut lines = vec![
        format!(
            "Total words in original list: {}",
            result.total_words.to_string().bright_yellow()
        ),
        format!(
            "Words with unique letters only: {}",
            result.filtered_words.len().to_string().bright_yellow().bold()
        ),
        format!(
            "✅ Generated {} with words containing no duplicate letters",
            result.output.display()
        )
        .green()
        .to_string(),
    ];

    if preview > 0 {
        let (first, last) = head_and_tail(&result.filtered_words, preview);

        lines.push(String::new());
        lines.push(heading(&format!("First {preview} words:")));
        lines.extend(first.iter().map(ToString::to_string));

        lines.push(String::new());
        lines.push(heading(&format!("Last {preview} words:")));
        lines.extend(last.iter().map(ToString::to_string));
    }

    lines.join("\n")
}

/// Print the counts and a preview of the generated collection
pub fn print_generate_result(result: &GenerateResult, preview: usize) {
    println!("{}", generate_report(result, preview));
}

/// Print the outcome of comparing the header on disk with a fresh rendering
pub fn print_check_result(result: &CheckResult) {
    println!("{}", divider(60).cyan());
    println!(
        "Checked {} ({} of {} words)",
        result.output.display(),
        result.filtered_count,
        result.total_words
    );
    println!("{}", divider(60).cyan());

    if result.up_to_date {
        println!("{}", "✅ Header is up to date".green().bold());
    } else {
        println!(
            "{}",
            "❌ Header is out of date, rerun without --check".red().bold()
        );
    }
}
