//! Console output for command results.
//!
//! Kept apart from the conversion code so the library stays silent.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ConversionSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::ToPo(summary) | CommandSummary::ToStrings(summary) => {
            print_conversion(summary, writer)
        }
        CommandSummary::Init(summary) => {
            if summary.created {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!("Created {}", CONFIG_FILE_NAME).green()
                );
            }
        }
    }
}

fn print_conversion<W: Write>(summary: &ConversionSummary, writer: &mut W) {
    if summary.written.is_empty() {
        let _ = writeln!(writer, "{}", "No files to convert.".yellow());
        return;
    }

    for file in &summary.written {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Wrote {} ({})",
                display_path(&file.path, &summary.root),
                pluralize(file.entry_count, "entry", "entries")
            )
            .green()
        );
    }
}

/// Show `path` relative to the project root when it lies inside it.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}
