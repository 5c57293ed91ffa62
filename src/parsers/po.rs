//! Reader for gettext `.po` catalogs.
//!
//! Supports the subset translation tools emit: `#` comments (with `#,`
//! flags), `msgctxt`, `msgid`, `msgid_plural`, `msgstr`, `msgstr[N]` and
//! quoted continuation lines. Obsolete `#~` entries are kept and marked
//! as such.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::catalog::{Catalog, CatalogEntry, Metadata, unescape};

pub fn parse_po_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

    let catalog = parse_po(&content)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        entries = catalog.len(),
        language_team = catalog.metadata.get("Language-Team"),
        "parsed catalog"
    );
    Ok(catalog)
}

/// Which string field a continuation line appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Msgctxt,
    Msgid,
    MsgidPlural,
    Msgstr,
    MsgstrPlural(usize),
}

/// Accumulates the lines of one entry.
#[derive(Debug, Default)]
struct EntryBuilder {
    entry: CatalogEntry,
    has_msgid: bool,
    has_content: bool,
    current: Option<Field>,
}

impl EntryBuilder {
    fn append(&mut self, field: Field, text: &str) {
        let target = match field {
            Field::Msgctxt => self.entry.msgctxt.get_or_insert_with(String::new),
            Field::Msgid => &mut self.entry.msgid,
            Field::MsgidPlural => self.entry.msgid_plural.get_or_insert_with(String::new),
            Field::Msgstr => &mut self.entry.msgstr,
            Field::MsgstrPlural(index) => {
                if self.entry.msgstr_plural.len() <= index {
                    self.entry.msgstr_plural.resize(index + 1, String::new());
                }
                &mut self.entry.msgstr_plural[index]
            }
        };
        target.push_str(&unescape(text));
    }
}

/// Parse catalog text.
///
/// Fails on structural errors such as an unknown keyword, a keyword
/// without a quoted string, or a translation that has no `msgid`.
pub fn parse_po(content: &str) -> Result<Catalog> {
    let content = content.trim_start_matches('\u{FEFF}');
    let mut catalog = Catalog::default();
    let mut builder = EntryBuilder::default();

    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            finish_entry(&mut catalog, &mut builder, line_number)?;
            continue;
        }

        let (line, obsolete) = match line.strip_prefix("#~") {
            Some(rest) => (rest.trim(), true),
            None => (line, false),
        };
        // `#~|` holds a previous msgid, not part of the entry.
        if obsolete && (line.is_empty() || line.starts_with('|')) {
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            // A comment after a complete entry starts the next one.
            if builder.current.is_some_and(is_translation) {
                finish_entry(&mut catalog, &mut builder, line_number)?;
            }
            if let Some(flags) = comment.strip_prefix(',') {
                builder.entry.flags.extend(
                    flags
                        .split(',')
                        .map(str::trim)
                        .filter(|f| !f.is_empty())
                        .map(String::from),
                );
            }
            builder.has_content = true;
            continue;
        }

        if line.starts_with('"') {
            let Some(field) = builder.current else {
                bail!("line {}: string without a preceding keyword", line_number);
            };
            let text = quoted(line, line_number)?;
            builder.entry.obsolete |= obsolete;
            builder.append(field, text);
            continue;
        }

        let (keyword, rest) = line
            .split_once(|c: char| c.is_whitespace())
            .map(|(k, r)| (k, r.trim_start()))
            .unwrap_or((line, ""));
        let field = parse_keyword(keyword, line_number)?;

        // A new msgctxt/msgid after a translation starts the next entry,
        // even without a separating blank line.
        if matches!(field, Field::Msgctxt | Field::Msgid)
            && builder.current.is_some_and(is_translation)
        {
            finish_entry(&mut catalog, &mut builder, line_number)?;
        }

        match field {
            Field::Msgid => builder.has_msgid = true,
            Field::Msgstr | Field::MsgstrPlural(_) | Field::MsgidPlural if !builder.has_msgid => {
                bail!("line {}: {} without msgid", line_number, keyword);
            }
            _ => {}
        }

        let text = quoted(rest, line_number)?;
        builder.entry.obsolete |= obsolete;
        builder.append(field, text);
        builder.current = Some(field);
        builder.has_content = true;
    }

    finish_entry(&mut catalog, &mut builder, content.lines().count() + 1)?;
    Ok(catalog)
}

fn is_translation(field: Field) -> bool {
    matches!(field, Field::Msgstr | Field::MsgstrPlural(_))
}

fn parse_keyword(keyword: &str, line_number: usize) -> Result<Field> {
    let field = match keyword {
        "msgctxt" => Field::Msgctxt,
        "msgid" => Field::Msgid,
        "msgid_plural" => Field::MsgidPlural,
        "msgstr" => Field::Msgstr,
        other => {
            let index = other
                .strip_prefix("msgstr[")
                .and_then(|s| s.strip_suffix(']'))
                .and_then(|s| s.parse::<usize>().ok());
            match index {
                Some(index) => Field::MsgstrPlural(index),
                None => bail!("line {}: unknown keyword '{}'", line_number, other),
            }
        }
    };
    Ok(field)
}

/// Return the raw (still escaped) contents of a `"..."` token.
fn quoted(token: &str, line_number: usize) -> Result<&str> {
    let Some(inner) = token.strip_prefix('"') else {
        bail!("line {}: expected a quoted string", line_number);
    };
    let Some(inner) = inner.strip_suffix('"') else {
        bail!("line {}: unterminated string", line_number);
    };
    // The closing quote must not be escaped.
    let trailing_backslashes = inner.chars().rev().take_while(|&c| c == '\\').count();
    if trailing_backslashes % 2 == 1 {
        bail!("line {}: unterminated string", line_number);
    }
    Ok(inner)
}

fn finish_entry(catalog: &mut Catalog, builder: &mut EntryBuilder, line_number: usize) -> Result<()> {
    let finished = std::mem::take(builder);
    if !finished.has_content {
        return Ok(());
    }
    if !finished.has_msgid {
        // Comment-only blocks carry no entry.
        if finished.current.is_none() {
            return Ok(());
        }
        bail!("line {}: entry without msgid", line_number);
    }

    let entry = finished.entry;
    if entry.is_header() && catalog.metadata.is_empty() && catalog.entries.is_empty() {
        catalog.metadata = Metadata::from_header(&entry.msgstr);
    } else {
        catalog.entries.push(entry);
    }
    Ok(())
}
