//! Aggregated results of the time-accounting engine.
//!
//! This module contains the [`DailyAggregate`], [`MonthlyAggregate`] and
//! [`BalanceReport`] types produced by
//! [`produce_report`](crate::calculation::produce_report).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{decimal_minutes_to_hm, minutes_to_hm};

use super::attendance::AttendanceRecord;

/// Worked minutes summed over one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyAggregate {
    /// The calendar day.
    pub day: NaiveDate,
    /// Total minutes worked on that day.
    pub worked_minutes: i64,
}

/// Worked and expected time for one calendar month.
///
/// # Example
///
/// ```
/// use worktime_balance::models::MonthlyAggregate;
/// use rust_decimal::Decimal;
///
/// let april = MonthlyAggregate {
///     month: 4,
///     label: "Apr".to_string(),
///     worked_minutes: 9000,
///     working_days: 18,
///     expected_minutes: Decimal::new(9072, 0),
///     balance_minutes: Decimal::new(-72, 0),
/// };
/// assert_eq!(april.worked_hm(), "150:00");
/// assert_eq!(april.expected_hm(), "151:12");
/// assert_eq!(april.balance_hm(), "-1:12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyAggregate {
    /// Month number, 1 through 12.
    pub month: u32,
    /// Abbreviated month name used in reports.
    pub label: String,
    /// Minutes worked in the month.
    pub worked_minutes: i64,
    /// Business days in the month.
    pub working_days: u32,
    /// Minutes expected in the month.
    pub expected_minutes: Decimal,
    /// `worked_minutes - expected_minutes`; negative when behind.
    pub balance_minutes: Decimal,
}

impl MonthlyAggregate {
    /// Worked time as `h:mm`.
    pub fn worked_hm(&self) -> String {
        minutes_to_hm(self.worked_minutes)
    }

    /// Expected time as `h:mm`.
    pub fn expected_hm(&self) -> String {
        decimal_minutes_to_hm(self.expected_minutes)
    }

    /// Balance as `h:mm`, with a leading `-` when negative.
    pub fn balance_hm(&self) -> String {
        decimal_minutes_to_hm(self.balance_minutes)
    }
}

/// The complete result of one report run.
///
/// Holds exactly twelve [`MonthlyAggregate`] rows (January through December
/// of [`year`](Self::year)), the per-day totals and every attendance record,
/// including synthesized vacation records, sorted by day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    /// The detected reporting year.
    pub year: i32,
    /// One row per month, ordered January to December.
    pub months: Vec<MonthlyAggregate>,
    /// One row per day with records, ordered by day.
    pub days: Vec<DailyAggregate>,
    /// All records, ordered by day and clock-in time.
    pub records: Vec<AttendanceRecord>,
    /// Number of vacation days credited.
    pub vacation_days: usize,
}

impl BalanceReport {
    /// Total worked minutes over the year.
    pub fn total_worked_minutes(&self) -> i64 {
        self.months.iter().map(|m| m.worked_minutes).sum()
    }

    /// Total expected minutes over the year.
    pub fn total_expected_minutes(&self) -> Decimal {
        self.months.iter().map(|m| m.expected_minutes).sum()
    }

    /// Total balance over the year.
    pub fn total_balance_minutes(&self) -> Decimal {
        self.months.iter().map(|m| m.balance_minutes).sum()
    }

    /// Looks up the row for `month` (1-12).
    pub fn month(&self, month: u32) -> Option<&MonthlyAggregate> {
        self.months.iter().find(|m| m.month == month)
    }
}
