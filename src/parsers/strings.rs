//! Reader for Apple `Localizable.strings` tables.
//!
//! The format is read line by line with a deliberately simple scanner:
//! a line is either a `/*` comment, an entry of the form
//! `"key" = "value";`, or ignored. Block comments are not tracked across
//! lines, so a continuation line that contains `=` is read as an entry.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::table::TranslationTable;

const COMMENT_OPEN: &str = "/*";
const BYTE_ORDER_MARK: char = '\u{FEFF}';

pub fn parse_strings_file(path: &Path) -> Result<TranslationTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read strings file: {}", path.display()))?;

    let table = parse_strings(&content);
    tracing::debug!(
        path = %path.display(),
        entries = table.len(),
        "parsed strings file"
    );
    Ok(table)
}

/// Parse the contents of a strings file into a table.
///
/// Never fails: lines that don't look like entries are skipped.
pub fn parse_strings(content: &str) -> TranslationTable {
    let content = content.trim_start_matches(BYTE_ORDER_MARK);
    let mut table = TranslationTable::new();

    for (index, raw_line) in content.lines().enumerate() {
        let Some((key, value)) = parse_line(raw_line) else {
            continue;
        };

        if let Some(previous) = table.insert(key, value) {
            tracing::debug!(
                line = index + 1,
                key,
                previous = %previous,
                "duplicate key, later value wins"
            );
        }
    }

    table
}

/// Split a single line into `(key, value)`.
///
/// Returns `None` for comment lines and lines without `=`.
fn parse_line(raw_line: &str) -> Option<(&str, &str)> {
    let line = raw_line.trim();
    if line.starts_with(COMMENT_OPEN) {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim().trim_matches('"');
    let value = value.trim().trim_matches(|c| c == '"' || c == ';');
    Some((key, value))
}
