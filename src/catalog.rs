//! Gettext catalog model and `.po` writer.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context, Result};

use crate::table::TranslationTable;

/// A single `msgid`/`msgstr` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    pub msgctxt: Option<String>,
    pub msgid: String,
    pub msgid_plural: Option<String>,
    pub msgstr: String,
    /// Plural translations (`msgstr[N]`), indexed by plural form.
    pub msgstr_plural: Vec<String>,
    /// Flags from `#,` comments, e.g. `fuzzy`.
    pub flags: Vec<String>,
    /// Entry was written with the `#~` prefix.
    pub obsolete: bool,
}

impl CatalogEntry {
    pub fn new(msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        Self {
            msgid: msgid.into(),
            msgstr: msgstr.into(),
            ..Self::default()
        }
    }

    pub fn is_header(&self) -> bool {
        self.msgid.is_empty() && self.msgctxt.is_none() && !self.obsolete
    }

    pub fn is_fuzzy(&self) -> bool {
        self.flags.iter().any(|flag| flag == "fuzzy")
    }
}

/// Ordered header fields stored in the catalog's empty-msgid entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    fields: Vec<(String, String)>,
}

impl Metadata {
    /// The fixed placeholder header written for every generated catalog.
    pub fn placeholder(title: &str) -> Self {
        let mut metadata = Self::default();
        metadata.set("Project-Id-Version", "1.0");
        metadata.set("Report-Msgid-Bugs-To", "you@example.com");
        metadata.set("POT-Creation-Date", "2007-10-18 14:00+0100");
        metadata.set("PO-Revision-Date", "2007-10-18 14:00+0100");
        metadata.set("Last-Translator", "you <you@example.com>");
        metadata.set("Language-Team", format!("{} <yourteam@example.com>", title));
        metadata.set("MIME-Version", "1.0");
        metadata.set("Content-Type", "text/plain; charset=utf-8");
        metadata.set("Content-Transfer-Encoding", "8bit");
        metadata
    }

    /// Parse the `msgstr` of a header entry (`Key: Value` per line).
    pub fn from_header(msgstr: &str) -> Self {
        let mut metadata = Self::default();
        for line in msgstr.lines() {
            if let Some((name, value)) = line.split_once(':') {
                metadata.set(name.trim(), value.trim());
            }
        }
        metadata
    }

    /// Set a field, replacing its value in place if it already exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(field) => field.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub metadata: Metadata,
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a fresh catalog from a table, keeping empty values.
    pub fn from_table(table: &TranslationTable, title: &str) -> Self {
        let entries = table
            .iter()
            .map(|(key, value)| CatalogEntry::new(key, value))
            .collect();
        Self {
            metadata: Metadata::placeholder(title),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the catalog in `.po` syntax.
    pub fn to_po_string(&self) -> String {
        let mut blocks = Vec::with_capacity(self.entries.len() + 1);
        blocks.push(format!("#\n{}", render_header(&self.metadata)));
        blocks.extend(self.entries.iter().map(render_entry));
        blocks.join("\n")
    }

    /// Write the catalog to `path`, replacing any existing file.
    ///
    /// The parent directory must already exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_po_string())
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
        tracing::debug!(path = %path.display(), entries = self.len(), "wrote catalog");
        Ok(())
    }
}

fn render_header(metadata: &Metadata) -> String {
    let mut out = String::from("msgid \"\"\nmsgstr \"\"\n");
    for (name, value) in metadata.iter() {
        let line = format!("{}: {}\n", name, value);
        let _ = writeln!(out, "\"{}\"", escape(&line));
    }
    out
}

fn render_entry(entry: &CatalogEntry) -> String {
    let mut fields = String::new();
    if let Some(ctxt) = &entry.msgctxt {
        write_field(&mut fields, "msgctxt", ctxt);
    }
    write_field(&mut fields, "msgid", &entry.msgid);
    match &entry.msgid_plural {
        Some(plural) => {
            write_field(&mut fields, "msgid_plural", plural);
            for (index, form) in entry.msgstr_plural.iter().enumerate() {
                write_field(&mut fields, &format!("msgstr[{}]", index), form);
            }
        }
        None => write_field(&mut fields, "msgstr", &entry.msgstr),
    }
    if entry.obsolete {
        fields = fields.lines().map(|line| format!("#~ {}\n", line)).collect();
    }

    let mut out = String::new();
    if !entry.flags.is_empty() {
        let _ = writeln!(out, "#, {}", entry.flags.join(", "));
    }
    out.push_str(&fields);
    out
}

/// Write `keyword "value"`, splitting on embedded newlines the way
/// gettext tools do so each line of a multi-line string stays readable.
fn write_field(out: &mut String, keyword: &str, value: &str) {
    let has_inner_newline = value
        .char_indices()
        .any(|(i, c)| c == '\n' && i + 1 < value.len());
    if !has_inner_newline {
        let _ = writeln!(out, "{} \"{}\"", keyword, escape(value));
        return;
    }

    let _ = writeln!(out, "{} \"\"", keyword);
    for line in value.split_inclusive('\n') {
        let _ = writeln!(out, "\"{}\"", escape(line));
    }
}

/// Escape a string for a quoted `.po` field.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Decode the escapes produced by [`escape`]. Unknown escapes are kept verbatim.
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
