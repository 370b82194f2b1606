// src/import/parser.rs

//! Parser for vendor password exports
//!
//! The export is a CSV file with a header row and a fixed column order:
//!
//! ```text
//! name,url,username,password,note
//! "Example","https://example.com","alice","s3cr3t",""
//! ```
//!
//! Quoting follows RFC 4180. The `note` column is optional. Rows that do
//! not have the expected shape are skipped so that one damaged line does
//! not lose the rest of the export.

use crate::credential::CredentialRecord;
use csv::StringRecord;
use tracing::debug;

/// Column positions in the export
const COL_NAME: usize = 0;
const COL_URL: usize = 1;
const COL_USERNAME: usize = 2;
const COL_PASSWORD: usize = 3;
const COL_NOTE: usize = 4;

/// Parse export text into records, skipping malformed rows
///
/// The header row is consumed and not validated. Empty fields become
/// `None`. Parsing the same text always yields the same records.
///
/// An unbalanced quote makes the reader treat everything up to the next
/// closing quote (often the end of the file) as one field. When a skipped
/// row spans several lines, parsing resumes on the line after the row
/// started, so the rows it swallowed are read on their own.
pub fn parse_csv(text: &str) -> Vec<CredentialRecord> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut section = text;
    let mut has_headers = true;
    let mut line_base = 0u64;

    while let Some(resume) =
        parse_section(section, has_headers, line_base, &mut records, &mut skipped)
    {
        line_base += section[..resume].matches('\n').count() as u64;
        section = &section[resume..];
        has_headers = false;
    }

    debug!("Parsed {} CSV rows ({} skipped)", records.len(), skipped);
    records
}

/// Parse rows from `text` until one swallows line breaks
///
/// Returns the byte offset in `text` to resume from, or `None` once the
/// input is exhausted. The offset is always past the start of the
/// offending row.
fn parse_section(
    text: &str,
    has_headers: bool,
    line_base: u64,
    records: &mut Vec<CredentialRecord>,
    skipped: &mut usize,
) -> Option<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(text.as_bytes());

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                *skipped += 1;
                debug!("Skipping unreadable CSV row: {}", e);
                continue;
            }
        };

        if let Some(record) = record_from_row(&row) {
            records.push(record);
            continue;
        }

        *skipped += 1;
        let position = row.position();
        debug!(
            "Skipping CSV row at line {}: expected 4 or 5 fields, found {}",
            line_base + position.map_or(0, |p| p.line()),
            row.len()
        );

        if row.iter().any(|field| field.contains('\n'))
            && let Some(position) = position
            && let Some(resume) = next_line_start(text, position.byte() as usize)
        {
            return Some(resume);
        }
    }

    None
}

/// Offset of the line after the one holding the row that starts at `start`
fn next_line_start(text: &str, start: usize) -> Option<usize> {
    let rest = text.get(start..)?;
    let content = rest.len() - rest.trim_start_matches(['\r', '\n']).len();
    let newline = rest[content..].find('\n')?;
    Some(start + content + newline + 1)
}

fn record_from_row(row: &StringRecord) -> Option<CredentialRecord> {
    if row.len() != 4 && row.len() != 5 {
        return None;
    }

    Some(CredentialRecord {
        domain: field(row, COL_URL),
        username: field(row, COL_USERNAME),
        password: field(row, COL_PASSWORD),
        notes: field(row, COL_NOTE),
        title: field(row, COL_NAME),
    })
}

fn field(row: &StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
