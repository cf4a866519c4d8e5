//! Reads the line-oriented network description file.
//!
//! The file lists one tram line after another:
//!
//! ```text
//! 1
//! Вокзал - Погулянка
//! Прямий напрямок: Вокзал - Площа Ринок - Погулянка
//! Зворотній напрямок: Погулянка - Площа Ринок - Вокзал
//! ```
//!
//! A line starting with a digit opens a new record and holds its number;
//! the next line is its display name. The direction lines list stops
//! separated by `" - "`. Anything else is ignored.

mod error;

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{LineId, LineRecord};

pub use error::LoadError;

/// Marker introducing the forward stop list.
pub const FORWARD_MARKER: &str = "Прямий напрямок:";
/// Marker introducing the reverse stop list.
pub const REVERSE_MARKER: &str = "Зворотній напрямок:";
/// Separator between stop names on a direction line.
pub const STOP_SEPARATOR: &str = " - ";

/// Read and parse a network file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<LineRecord>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_network(&text)?;
    debug!(path = %path.display(), lines = records.len(), "Parsed network file");
    Ok(records)
}

/// Parse a network description into raw line records, in file order.
///
/// Records are not validated here; duplicate numbers and lines without
/// stops are left for [`crate::domain::Network::load`] to judge.
pub fn parse_network(text: &str) -> Result<Vec<LineRecord>, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rows: Vec<&str> = text.lines().collect();

    let mut records = Vec::new();
    let mut current: Option<LineRecord> = None;
    let mut i = 0;

    while i < rows.len() {
        let row = rows[i].trim();
        let line_no = i + 1;

        if row.starts_with(|c: char| c.is_ascii_digit()) {
            records.extend(current.take());

            let id = LineId::parse(row)
                .map_err(|source| LoadError::InvalidLineId { line_no, source })?;
            let name = rows
                .get(i + 1)
                .ok_or(LoadError::MissingName { line_no })?
                .trim()
                .to_string();

            current = Some(LineRecord {
                id,
                name,
                forward: Vec::new(),
                reverse: Vec::new(),
            });
            i += 2;
            continue;
        }

        if let Some(stops) = after_marker(row, FORWARD_MARKER) {
            match current.as_mut() {
                Some(record) => record.forward = split_stops(stops),
                None => warn!(line_no, "Forward direction before any line number, ignoring"),
            }
        } else if let Some(stops) = after_marker(row, REVERSE_MARKER) {
            match current.as_mut() {
                Some(record) => record.reverse = split_stops(stops),
                None => warn!(line_no, "Reverse direction before any line number, ignoring"),
            }
        }

        i += 1;
    }

    records.extend(current);
    Ok(records)
}

/// Returns the text following `marker`, if the row contains it.
fn after_marker<'a>(row: &'a str, marker: &str) -> Option<&'a str> {
    row.split_once(marker).map(|(_, rest)| rest)
}

/// Split a direction list into trimmed, non-empty stop names.
fn split_stops(list: &str) -> Vec<String> {
    list.split(STOP_SEPARATOR)
        .map(str::trim)
        .filter(|stop| !stop.is_empty())
        .map(str::to_string)
        .collect()
}
