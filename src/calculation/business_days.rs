//! Business-day calendar.
//!
//! This module decides which days count as working days and how many minutes
//! of work a month is expected to hold.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::config::CalendarConfig;
use crate::error::{EngineError, EngineResult};

/// The expected working time for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthExpectation {
    /// Number of business days in the month.
    pub working_days: u32,
    /// Minutes expected over those days.
    pub expected_minutes: Decimal,
}

/// Returns true for Saturdays and Sundays.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true if `date` is a weekday that is not in `holidays`.
pub fn is_business_day(date: NaiveDate, holidays: &BTreeSet<NaiveDate>) -> bool {
    !is_weekend(date) && !holidays.contains(&date)
}

/// Lists the business days of a month in ascending order.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if `month` is not 1-12.
pub fn business_days(
    year: i32,
    month: u32,
    holidays: &BTreeSet<NaiveDate>,
) -> EngineResult<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        EngineError::CalculationError {
            message: format!("invalid month {} for year {}", month, year),
        }
    })?;

    Ok(first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter(|d| is_business_day(*d, holidays))
        .collect())
}

/// Counts the business days of a month and the minutes expected over them.
///
/// A business day is Monday to Friday and not a holiday of `year`. Each one
/// is worth [`CalendarConfig::minutes_per_standard_day`].
///
/// # Errors
///
/// - [`EngineError::UnsupportedYear`] if the calendar has no holidays for `year`
/// - [`EngineError::CalculationError`] if `month` is not 1-12
///
/// # Example
///
/// ```
/// use worktime_balance::calculation::business_days_in_month;
/// use worktime_balance::config::CalendarConfig;
/// use rust_decimal::Decimal;
///
/// let config = CalendarConfig::default();
///
/// // April 2017: 20 weekdays, minus Good Friday and Easter Monday.
/// let april = business_days_in_month(&config, 2017, 4).unwrap();
/// assert_eq!(april.working_days, 18);
/// assert_eq!(april.expected_minutes, Decimal::new(18 * 504, 0));
/// ```
pub fn business_days_in_month(
    config: &CalendarConfig,
    year: i32,
    month: u32,
) -> EngineResult<MonthExpectation> {
    let holidays = config.holidays_for(year)?;
    let working_days = business_days(year, month, holidays)?.len() as u32;

    Ok(MonthExpectation {
        working_days,
        expected_minutes: Decimal::from(working_days) * config.minutes_per_standard_day(),
    })
}
