//! Flat-file roster persistence.
//!
//! The data file is plain UTF-8 text: an advisory count line followed by one
//! `code,name,cw1,cw2,cw3,exam` row per student. Loading is deliberately
//! permissive. Rows that do not parse are skipped so a hand-edited file never
//! locks the user out of the rest of their data.

use std::path::Path;

use crate::error::{Result, RosterError};
use crate::model::Record;
use crate::store::Roster;

/// Number of comma-separated fields on a data row.
pub const FIELD_COUNT: usize = 6;

/// Whether the data file was there to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    /// The file does not exist. The roster is empty and the caller decides
    /// whether to warn and carry on.
    MissingDataSource,
}

/// Everything [`load`] learned about the data file.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub roster: Roster,
    pub status: LoadStatus,
    /// Value of the leading count line, if there was one. Never checked
    /// against the rows actually read.
    pub declared_count: Option<usize>,
    /// Non-blank rows dropped because they did not parse.
    pub skipped_lines: usize,
}

impl LoadOutcome {
    pub fn is_missing(&self) -> bool {
        self.status == LoadStatus::MissingDataSource
    }
}

/// Read a roster from `path`.
///
/// A missing file is not an error: it yields an empty roster with
/// [`LoadStatus::MissingDataSource`]. Any other read failure is returned as
/// [`RosterError::Io`].
pub fn load(path: &Path) -> Result<LoadOutcome> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("data file not found: {}", path.display());
            return Ok(LoadOutcome {
                roster: Roster::new(),
                status: LoadStatus::MissingDataSource,
                declared_count: None,
                skipped_lines: 0,
            });
        }
        Err(e) => return Err(RosterError::io(path, e)),
    };

    // Undecodable bytes are dropped, not replaced.
    let content: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
    let outcome = parse_roster_str(&content);
    tracing::info!(
        records = outcome.roster.len(),
        skipped = outcome.skipped_lines,
        "loaded roster from {}",
        path.display()
    );
    Ok(outcome)
}

/// Parse roster text (useful for testing).
pub fn parse_roster_str(content: &str) -> LoadOutcome {
    let mut records = Vec::new();
    let mut declared_count = None;
    let mut skipped_lines = 0;
    let mut first = true;

    for (line_no, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let is_first = std::mem::replace(&mut first, false);

        if is_first && is_count_line(line) {
            declared_count = line.parse().ok();
            continue;
        }

        match parse_row(line) {
            Some(record) => records.push(record),
            None => {
                tracing::debug!(line_no = line_no + 1, "skipping malformed row: {line}");
                skipped_lines += 1;
            }
        }
    }

    LoadOutcome {
        roster: Roster::from_records(records),
        status: LoadStatus::Loaded,
        declared_count,
        skipped_lines,
    }
}

fn is_count_line(line: &str) -> bool {
    line.bytes().all(|b| b.is_ascii_digit())
}

/// Parse one data row, or `None` if it has the wrong shape.
pub fn parse_row(line: &str) -> Option<Record> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }
    let int = |i: usize| fields[i].parse::<i32>().ok();
    Some(Record {
        code: int(0)?,
        name: fields[1].to_string(),
        cw1: int(2)?,
        cw2: int(3)?,
        cw3: int(4)?,
        exam: int(5)?,
    })
}

/// Render a single record as a data row.
pub fn format_row(record: &Record) -> String {
    format!(
        "{},{},{},{},{},{}",
        record.code, record.name, record.cw1, record.cw2, record.cw3, record.exam
    )
}

/// Render the full file contents: count line first, then one row per record.
pub fn to_roster_string(roster: &Roster) -> String {
    let mut lines = Vec::with_capacity(roster.len() + 1);
    lines.push(roster.len().to_string());
    lines.extend(roster.iter().map(format_row));
    lines.join("\n")
}

/// Rewrite `path` with the whole roster.
pub fn save(roster: &Roster, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RosterError::io(parent, e))?;
    }
    std::fs::write(path, to_roster_string(roster)).map_err(|e| RosterError::io(path, e))?;
    tracing::info!(records = roster.len(), "saved roster to {}", path.display());
    Ok(())
}
