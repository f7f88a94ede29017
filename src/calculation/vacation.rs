//! Vacation day handling.
//!
//! Vacation days count as fully worked standard days. They are turned into
//! synthetic attendance records so the aggregation treats them like any other
//! record.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

use crate::config::CalendarConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, VACATION_NOTE, WorkedMinutes};

use super::business_days::is_weekend;

/// Clock-in hour given to synthesized vacation records.
pub const VACATION_START_HOUR: u32 = 8;

/// Sorts and de-duplicates vacation dates, dropping Saturdays and Sundays.
///
/// # Example
///
/// ```
/// use worktime_balance::calculation::effective_vacation_days;
/// use chrono::NaiveDate;
///
/// let friday = NaiveDate::from_ymd_opt(2017, 8, 11).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2017, 8, 12).unwrap();
/// assert_eq!(effective_vacation_days([saturday, friday, friday]), vec![friday]);
/// ```
pub fn effective_vacation_days<I>(dates: I) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut kept = BTreeSet::new();
    for date in dates {
        if is_weekend(date) {
            warn!(%date, "Dropping vacation day on a weekend");
        } else {
            kept.insert(date);
        }
    }
    kept.into_iter().collect()
}

/// Builds the synthetic record for one vacation day.
///
/// The record starts at 08:00, lasts one standard working day (whole
/// minutes) and carries the `VACATION` note.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfig`] if a standard day does not fit in
/// a single record.
pub fn vacation_record(date: NaiveDate, config: &CalendarConfig) -> EngineResult<AttendanceRecord> {
    let day_minutes = config.minutes_per_standard_day().floor();
    let worked = day_minutes
        .to_u32()
        .and_then(WorkedMinutes::new)
        .ok_or_else(|| EngineError::InvalidConfig {
            message: format!(
                "a standard day of {} minutes cannot be booked as a vacation day",
                day_minutes
            ),
        })?;

    let start = date
        .and_hms_opt(VACATION_START_HOUR, 0, 0)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("invalid vacation start on {}", date),
        })?;
    Ok(AttendanceRecord {
        start,
        end: start + Duration::minutes(i64::from(worked.get())),
        worked,
        notes: VACATION_NOTE.to_string(),
    })
}
