//! Vacation list reader.
//!
//! One entry per line, either a single day-first date or an inclusive
//! `first - last` range. Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::{effective_vacation_days, parse_date_line};
use crate::error::{EngineError, EngineResult};

/// Reads the vacation list at `path`.
///
/// # Errors
///
/// - [`EngineError::InputNotFound`] if the file cannot be read
/// - [`EngineError::InvalidDateFormat`] if any entry is malformed
pub fn read_vacation_file<P: AsRef<Path>>(path: P) -> EngineResult<Vec<NaiveDate>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|_| EngineError::InputNotFound {
        path: path.display().to_string(),
    })?;

    let dates = parse_vacation_lines(&text)?;
    debug!(path = %path.display(), days = dates.len(), "Read vacation list");
    Ok(dates)
}

/// Expands every entry of a vacation list into working-day dates.
///
/// Weekend dates are dropped; the result is sorted and free of duplicates.
///
/// # Example
///
/// ```
/// use worktime_balance::input::parse_vacation_lines;
///
/// let text = "# summer\n12.08.2017 - 15.08.2017\n\n26/05/2017\n";
/// let dates = parse_vacation_lines(text).unwrap();
/// assert_eq!(dates.len(), 3); // 12 and 13 August are a weekend
/// ```
pub fn parse_vacation_lines(text: &str) -> EngineResult<Vec<NaiveDate>> {
    let mut dates = Vec::new();
    for line in text.lines() {
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        dates.extend(parse_date_line(entry)?);
    }

    Ok(effective_vacation_days(dates))
}
