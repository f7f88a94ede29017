//! Attendance CSV export reader.
//!
//! Expected columns, after a header row:
//!
//! | # | Column    | Notes                          |
//! |---|-----------|--------------------------------|
//! | 0 | Job name  | ignored                        |
//! | 1 | Clock in  | day-first timestamp            |
//! | 2 | Clock out | day-first timestamp            |
//! | 3 | Duration  | `H:MM`                         |
//! | 4 | Comment   | optional, may be missing       |

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRow;

const REQUIRED_COLUMNS: usize = 4;

/// Reads the attendance export at `path`.
///
/// # Errors
///
/// - [`EngineError::InputNotFound`] if the file cannot be opened
/// - [`EngineError::InvalidRecord`] if a row is not valid CSV or has too few columns
pub fn read_attendance_csv<P: AsRef<Path>>(path: P) -> EngineResult<Vec<AttendanceRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|_| EngineError::InputNotFound {
        path: path.display().to_string(),
    })?;

    let rows = parse_attendance_csv(file)?;
    debug!(path = %path.display(), rows = rows.len(), "Read attendance export");
    Ok(rows)
}

/// Parses an attendance export from any reader.
///
/// The header row is skipped, fields are trimmed and rows may have a
/// varying number of columns. Only the raw text is captured here; the
/// engine parses timestamps and durations.
///
/// # Example
///
/// ```
/// use worktime_balance::input::parse_attendance_csv;
///
/// let data = "Job,In,Out,Duration,Comment\nAcme,03/04/2017 08:00,03/04/2017 16:24,8:24\n";
/// let rows = parse_attendance_csv(data.as_bytes()).unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].duration, "8:24");
/// assert_eq!(rows[0].notes, None);
/// ```
pub fn parse_attendance_csv<R: Read>(reader: R) -> EngineResult<Vec<AttendanceRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| EngineError::InvalidRecord {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() < REQUIRED_COLUMNS {
            return Err(EngineError::InvalidRecord {
                line,
                message: format!(
                    "expected at least {} columns, found {}",
                    REQUIRED_COLUMNS,
                    record.len()
                ),
            });
        }

        rows.push(AttendanceRow {
            line,
            clock_in: record[1].to_string(),
            clock_out: record[2].to_string(),
            duration: record[3].to_string(),
            notes: record
                .get(4)
                .filter(|comment| !comment.is_empty())
                .map(str::to_string),
        });
    }

    Ok(rows)
}
