//! Writer for Apple `Localizable.strings` tables.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::catalog::Catalog;

/// Renders catalog entries as `Localizable.strings` lines.
///
/// Lines are written as `"msgid" = "msgstr";` in catalog order. Entries
/// with an empty msgid or msgstr are dropped. Fuzzy and obsolete entries
/// are written like any other.
pub struct StringsWriter {
    lines: Vec<String>,
}

impl StringsWriter {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let lines = catalog
            .entries
            .iter()
            .filter(|entry| !entry.msgid.is_empty() && !entry.msgstr.is_empty())
            .inspect(|entry| {
                if entry.is_fuzzy() || entry.obsolete {
                    tracing::debug!(
                        msgid = %entry.msgid,
                        fuzzy = entry.is_fuzzy(),
                        obsolete = entry.obsolete,
                        "writing unreviewed translation"
                    );
                }
            })
            .map(|entry| format!("\"{}\" = \"{}\";\n", entry.msgid, entry.msgstr))
            .collect::<Vec<_>>();

        let dropped = catalog.entries.len() - lines.len();
        if dropped > 0 {
            tracing::debug!(dropped, "skipped entries with empty msgid or msgstr");
        }

        Self { lines }
    }

    /// Number of lines that will be written.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self) -> String {
        self.lines.concat()
    }

    /// Write the table to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())
            .with_context(|| format!("Failed to write strings file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), entries = self.len(), "wrote strings file");
        Ok(())
    }
}
