//! Attendance models.
//!
//! This module defines the raw [`AttendanceRow`] read from a timesheet export,
//! the parsed [`AttendanceRecord`] and the [`WorkedMinutes`] value it carries.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Note attached to records synthesized from vacation days.
pub const VACATION_NOTE: &str = "VACATION";

/// Minutes in one day; [`WorkedMinutes`] must stay below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// An unparsed row of the attendance export.
///
/// The job-name column is dropped when the row is read; everything else is
/// kept as text until the engine parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// 1-based line number in the source file, used in error messages.
    pub line: u64,
    /// Clock-in timestamp, day-first.
    pub clock_in: String,
    /// Clock-out timestamp, day-first.
    pub clock_out: String,
    /// Worked time as `H:MM`.
    pub duration: String,
    /// Free-text comment; absent when the column is missing.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Minutes worked in a single record, in the range `0..=1439`.
///
/// Timesheet exports encode the worked time as a clock reading (`HH:MM`).
/// This type keeps it as an explicit minute count and rejects anything that
/// would not fit in one day instead of wrapping around.
///
/// # Example
///
/// ```
/// use worktime_balance::models::WorkedMinutes;
///
/// let worked = WorkedMinutes::parse("8:24").unwrap();
/// assert_eq!(worked.get(), 504);
/// assert!(WorkedMinutes::parse("24:00").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct WorkedMinutes(u16);

impl WorkedMinutes {
    /// Creates a value from a minute count, or `None` if it is a full day or more.
    pub fn new(minutes: u32) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            u16::try_from(minutes).ok().map(Self)
        } else {
            None
        }
    }

    /// Parses `H:MM`, `HH:MM` or `HH:MM:SS`. Seconds are dropped.
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim();
        let mut parts = text.split(':');

        let hours = parts.next().and_then(|h| h.trim().parse::<u32>().ok());
        let minutes = parts.next().and_then(|m| m.trim().parse::<u32>().ok());
        let seconds_ok = match parts.next() {
            None => true,
            Some(s) => s.trim().parse::<u32>().is_ok_and(|s| s < 60),
        };

        let (Some(hours), Some(minutes)) = (hours, minutes) else {
            return Err(format!("duration '{}' is not in H:MM form", text));
        };
        if minutes >= 60 || !seconds_ok || parts.next().is_some() {
            return Err(format!("duration '{}' is not in H:MM form", text));
        }

        Self::new(hours * 60 + minutes).ok_or_else(|| {
            format!(
                "duration '{}' must be less than 24 hours for a single record",
                text
            )
        })
    }

    /// Returns the minute count.
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u32> for WorkedMinutes {
    type Error = String;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes).ok_or_else(|| {
            format!(
                "{} minutes must be less than {} for a single record",
                minutes, MINUTES_PER_DAY
            )
        })
    }
}

impl From<WorkedMinutes> for u32 {
    fn from(worked: WorkedMinutes) -> Self {
        worked.get()
    }
}

/// A parsed clock-in/clock-out record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Clock-in time.
    pub start: NaiveDateTime,
    /// Clock-out time.
    pub end: NaiveDateTime,
    /// Minutes credited for this record.
    pub worked: WorkedMinutes,
    /// Comment, empty when none was given.
    pub notes: String,
}

impl AttendanceRecord {
    /// The calendar day the record is booked on (the clock-in date).
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Worked minutes as a signed count for aggregation.
    pub fn worked_minutes(&self) -> i64 {
        i64::from(self.worked.get())
    }

    /// Whether the record was synthesized from a vacation day.
    pub fn is_vacation(&self) -> bool {
        self.notes == VACATION_NOTE
    }
}
