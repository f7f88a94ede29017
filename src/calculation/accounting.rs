//! Time accounting.
//!
//! This module turns attendance rows and vacation days into a
//! [`BalanceReport`]: per-day totals, per-month totals, the expected time of
//! every month and the resulting balance.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::CalendarConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AttendanceRow, BalanceReport, DailyAggregate, MonthlyAggregate,
    WorkedMinutes,
};

use super::business_days::business_days_in_month;
use super::date_parsing::parse_day_first_datetime;
use super::time_format::{decimal_minutes_to_hm, minutes_to_hm};
use super::vacation::{effective_vacation_days, vacation_record};

/// Parses one attendance row into a record.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRecord`] with the row's line number if a
/// timestamp or the duration cannot be parsed, or if clock-out precedes
/// clock-in.
///
/// # Example
///
/// ```
/// use worktime_balance::calculation::parse_record;
/// use worktime_balance::models::AttendanceRow;
///
/// let row = AttendanceRow {
///     line: 2,
///     clock_in: "03/04/2017 08:00".to_string(),
///     clock_out: "03/04/2017 16:30".to_string(),
///     duration: "8:30".to_string(),
///     notes: None,
/// };
/// let record = parse_record(&row).unwrap();
/// assert_eq!(record.worked_minutes(), 510);
/// assert_eq!(record.notes, "");
/// ```
pub fn parse_record(row: &AttendanceRow) -> EngineResult<AttendanceRecord> {
    let invalid = |message: String| EngineError::InvalidRecord {
        line: row.line,
        message,
    };

    let start = parse_day_first_datetime(&row.clock_in)
        .ok_or_else(|| invalid(format!("unreadable clock-in '{}'", row.clock_in)))?;
    let end = parse_day_first_datetime(&row.clock_out)
        .ok_or_else(|| invalid(format!("unreadable clock-out '{}'", row.clock_out)))?;
    let worked = WorkedMinutes::parse(&row.duration).map_err(invalid)?;

    if end < start {
        return Err(invalid(format!(
            "clock-out {} is before clock-in {}",
            end, start
        )));
    }

    Ok(AttendanceRecord {
        start,
        end,
        worked,
        notes: row
            .notes
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
    })
}

/// Groups records by calendar day, summing worked minutes.
///
/// The result is ordered by day.
pub fn aggregate_by_day(records: &[AttendanceRecord]) -> Vec<DailyAggregate> {
    let mut totals: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.day()).or_insert(0) += record.worked_minutes();
    }

    totals
        .into_iter()
        .map(|(day, worked_minutes)| DailyAggregate {
            day,
            worked_minutes,
        })
        .collect()
}

/// Finds the reporting year: the year of the first day in `anchor_month`.
///
/// `days` must be ordered by day.
///
/// # Errors
///
/// Returns [`EngineError::NoReferenceMonthFound`] when no day falls in the
/// anchor month.
pub fn detect_reporting_year(days: &[DailyAggregate], anchor_month: u32) -> EngineResult<i32> {
    days.iter()
        .find(|d| d.day.month() == anchor_month)
        .map(|d| d.day.year())
        .ok_or(EngineError::NoReferenceMonthFound {
            month: anchor_month,
        })
}

/// Builds the twelve monthly rows for `year`.
///
/// Days are grouped by month number; months without any day get zero worked
/// minutes. Every month carries its expected time from the calendar.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedYear`] if the calendar has no holidays
/// for `year`.
pub fn aggregate_by_month(
    days: &[DailyAggregate],
    year: i32,
    config: &CalendarConfig,
) -> EngineResult<Vec<MonthlyAggregate>> {
    let mut worked_by_month: BTreeMap<u32, i64> = BTreeMap::new();
    for day in days {
        *worked_by_month.entry(day.day.month()).or_insert(0) += day.worked_minutes;
    }

    (1..=12)
        .map(|month| -> EngineResult<MonthlyAggregate> {
            let expectation = business_days_in_month(config, year, month)?;
            let worked_minutes = worked_by_month.get(&month).copied().unwrap_or(0);
            let balance_minutes = Decimal::from(worked_minutes) - expectation.expected_minutes;

            Ok(MonthlyAggregate {
                month,
                label: month_label(year, month),
                worked_minutes,
                working_days: expectation.working_days,
                expected_minutes: expectation.expected_minutes,
                balance_minutes,
            })
        })
        .collect()
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Produces the balance report for a timesheet export.
///
/// This function:
/// 1. Parses every row into an [`AttendanceRecord`]
/// 2. Adds one synthetic record per vacation day (weekends are dropped)
/// 3. Sums worked minutes per day, then per month
/// 4. Detects the reporting year from the calendar's anchor month and drops
///    records and vacation days of any other year
/// 5. Computes expected minutes and the balance for all twelve months
///
/// # Arguments
///
/// * `rows` - Rows of the attendance export, in any order
/// * `vacation_dates` - Dates to credit as full standard days
/// * `config` - The business-day calendar
///
/// # Errors
///
/// - [`EngineError::EmptyInput`] if `rows` is empty
/// - [`EngineError::InvalidRecord`] if any row is malformed
/// - [`EngineError::NoReferenceMonthFound`] if no record falls in the anchor month
/// - [`EngineError::UnsupportedYear`] if the detected year has no holiday table
///
/// # Example
///
/// ```
/// use worktime_balance::calculation::produce_report;
/// use worktime_balance::config::CalendarConfig;
/// use worktime_balance::models::AttendanceRow;
/// use chrono::NaiveDate;
///
/// let rows = vec![AttendanceRow {
///     line: 2,
///     clock_in: "03/04/2017 08:00".to_string(),
///     clock_out: "03/04/2017 16:24".to_string(),
///     duration: "8:24".to_string(),
///     notes: Some("kickoff".to_string()),
/// }];
/// let vacation = vec![NaiveDate::from_ymd_opt(2017, 5, 26).unwrap()];
///
/// let report = produce_report(&rows, &vacation, &CalendarConfig::default()).unwrap();
/// assert_eq!(report.year, 2017);
/// assert_eq!(report.months.len(), 12);
/// assert_eq!(report.total_worked_minutes(), 2 * 504);
/// assert_eq!(report.vacation_days, 1);
/// ```
pub fn produce_report(
    rows: &[AttendanceRow],
    vacation_dates: &[NaiveDate],
    config: &CalendarConfig,
) -> EngineResult<BalanceReport> {
    if rows.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let vacation = effective_vacation_days(vacation_dates.iter().copied());

    let mut records = Vec::with_capacity(rows.len() + vacation.len());
    for row in rows {
        records.push(parse_record(row)?);
    }
    for date in &vacation {
        records.push(vacation_record(*date, config)?);
    }
    records.sort_by_key(|r| (r.day(), r.start));
    debug!(
        rows = rows.len(),
        vacation_days = vacation.len(),
        "Parsed attendance records"
    );

    let days = aggregate_by_day(&records);
    let year = detect_reporting_year(&days, config.anchor_month)?;

    let total_records = records.len();
    let records: Vec<AttendanceRecord> = records
        .into_iter()
        .filter(|r| r.day().year() == year)
        .collect();
    if records.len() < total_records {
        warn!(
            year,
            dropped = total_records - records.len(),
            "Dropping records outside the reporting year"
        );
    }
    let days: Vec<DailyAggregate> = days.into_iter().filter(|d| d.day.year() == year).collect();
    let vacation_days = vacation.iter().filter(|d| d.year() == year).count();

    let months = aggregate_by_month(&days, year, config)?;
    let report = BalanceReport {
        year,
        months,
        days,
        records,
        vacation_days,
    };

    info!(
        year,
        worked = %minutes_to_hm(report.total_worked_minutes()),
        expected = %decimal_minutes_to_hm(report.total_expected_minutes()),
        balance = %decimal_minutes_to_hm(report.total_balance_minutes()),
        "Balance report produced"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn row(line: u64, day: &str, start: &str, end: &str, duration: &str) -> AttendanceRow {
        AttendanceRow {
            line,
            clock_in: format!("{} {}", day, start),
            clock_out: format!("{} {}", day, end),
            duration: duration.to_string(),
            notes: None,
        }
    }

    fn config() -> CalendarConfig {
        CalendarConfig::default()
    }

    fn parse_vacation_range(line: &str) -> Vec<NaiveDate> {
        super::super::date_range::parse_date_line(line).unwrap()
    }

    #[test]
    fn test_parse_record_keeps_notes() {
        let mut r = row(3, "04/04/2017", "09:00", "12:00", "3:00");
        r.notes = Some("  standup ".to_string());
        let record = parse_record(&r).unwrap();

        assert_eq!(record.notes, "standup");
        assert_eq!(record.day(), date(2017, 4, 4));
        assert_eq!(record.worked_minutes(), 180);
    }

    #[test]
    fn test_parse_record_bad_timestamp_reports_line() {
        let r = row(9, "2017-13-45", "09:00", "12:00", "3:00");
        match parse_record(&r) {
            Err(EngineError::InvalidRecord { line, message }) => {
                assert_eq!(line, 9);
                assert!(message.contains("clock-in"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_record_rejects_full_day_duration() {
        let r = row(4, "04/04/2017", "00:00", "23:59", "24:00");
        assert!(matches!(
            parse_record(&r),
            Err(EngineError::InvalidRecord { line: 4, .. })
        ));
    }

    #[test]
    fn test_parse_record_rejects_clock_out_before_clock_in() {
        let r = row(5, "04/04/2017", "17:00", "09:00", "8:00");
        assert!(matches!(
            parse_record(&r),
            Err(EngineError::InvalidRecord { line: 5, .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let result = produce_report(&[], &[date(2017, 4, 3)], &config());
        assert!(matches!(result, Err(EngineError::EmptyInput)));
    }

    #[test]
    fn test_no_anchor_month_record() {
        let rows = vec![row(2, "06/03/2017", "08:00", "16:00", "8:00")];
        let result = produce_report(&rows, &[], &config());
        assert!(matches!(
            result,
            Err(EngineError::NoReferenceMonthFound { month: 4 })
        ));
    }

    #[test]
    fn test_anchor_month_is_configurable() {
        let rows = vec![row(2, "06/03/2017", "08:00", "16:00", "8:00")];
        let config = CalendarConfig {
            anchor_month: 3,
            ..CalendarConfig::default()
        };
        let report = produce_report(&rows, &[], &config).unwrap();
        assert_eq!(report.year, 2017);
    }

    #[test]
    fn test_unsupported_year() {
        let rows = vec![row(2, "03/04/2018", "08:00", "16:00", "8:00")];
        let result = produce_report(&rows, &[], &config());
        assert!(matches!(
            result,
            Err(EngineError::UnsupportedYear { year: 2018 })
        ));
    }

    #[test]
    fn test_records_on_same_day_are_summed() {
        let rows = vec![
            row(2, "03/04/2017", "08:00", "12:00", "4:00"),
            row(3, "03/04/2017", "13:00", "17:30", "4:30"),
            row(4, "04/04/2017", "08:00", "10:00", "2:00"),
        ];
        let report = produce_report(&rows, &[], &config()).unwrap();

        assert_eq!(
            report.days,
            vec![
                DailyAggregate {
                    day: date(2017, 4, 3),
                    worked_minutes: 510,
                },
                DailyAggregate {
                    day: date(2017, 4, 4),
                    worked_minutes: 120,
                },
            ]
        );
        assert_eq!(report.records.len(), 3);
    }

    #[test]
    fn test_month_worked_to_expectation_balances_to_zero() {
        // Two spans per business day in April 2017, 4:12 each: 18 * 504 minutes.
        let holidays = config().holidays_for(2017).unwrap().clone();
        let days = super::super::business_days::business_days(2017, 4, &holidays).unwrap();
        let mut rows = Vec::new();
        for (i, day) in days.iter().enumerate() {
            let day = day.format("%d/%m/%Y").to_string();
            rows.push(row(2 * i as u64 + 2, &day, "08:00", "12:12", "4:12"));
            rows.push(row(2 * i as u64 + 3, &day, "13:00", "17:12", "4:12"));
        }

        let report = produce_report(&rows, &[], &config()).unwrap();
        let april = report.month(4).unwrap();

        assert_eq!(april.working_days, 18);
        assert_eq!(april.worked_minutes, 9072);
        assert_eq!(april.balance_minutes, Decimal::ZERO);
        assert_eq!(april.balance_hm(), "0:00");
    }

    #[test]
    fn test_months_without_data_are_filled() {
        let rows = vec![row(2, "03/04/2017", "08:00", "16:24", "8:24")];
        let report = produce_report(&rows, &[], &config()).unwrap();

        let numbers: Vec<u32> = report.months.iter().map(|m| m.month).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());

        let january = report.month(1).unwrap();
        assert_eq!(january.label, "Jan");
        assert_eq!(january.worked_minutes, 0);
        assert_eq!(january.working_days, 22);
        assert_eq!(january.expected_minutes, Decimal::new(22 * 504, 0));
        assert_eq!(january.balance_minutes, Decimal::new(-22 * 504, 0));
    }

    #[test]
    fn test_vacation_days_are_credited() {
        let rows = vec![row(2, "03/04/2017", "08:00", "16:24", "8:24")];
        let vacation = vec![date(2017, 5, 26), date(2017, 5, 29)];
        let report = produce_report(&rows, &vacation, &config()).unwrap();

        assert_eq!(report.vacation_days, 2);
        assert_eq!(report.month(5).unwrap().worked_minutes, 2 * 504);
        assert_eq!(report.records.iter().filter(|r| r.is_vacation()).count(), 2);
    }

    #[test]
    fn test_weekend_vacation_never_reaches_the_days() {
        let rows = vec![row(2, "03/04/2017", "08:00", "16:24", "8:24")];
        let vacation = vec![date(2017, 8, 12), date(2017, 8, 13), date(2017, 8, 14)];
        let report = produce_report(&rows, &vacation, &config()).unwrap();

        assert_eq!(report.vacation_days, 1);
        assert!(report.days.iter().all(|d| d.day != date(2017, 8, 12)));
        assert!(report.days.iter().all(|d| d.day != date(2017, 8, 13)));
        assert!(report.days.iter().any(|d| d.day == date(2017, 8, 14)));
    }

    #[test]
    fn test_vacation_across_new_year_only_credits_reporting_year() {
        let rows = vec![row(2, "03/04/2017", "08:00", "16:24", "8:24")];
        let vacation = parse_vacation_range("29/12/2017 - 02/01/2018");
        let report = produce_report(&rows, &vacation, &config()).unwrap();

        assert_eq!(report.year, 2017);
        assert_eq!(report.vacation_days, 1);
        assert_eq!(report.month(12).unwrap().worked_minutes, 504);
        assert_eq!(report.month(1).unwrap().worked_minutes, 0);
        assert!(report.days.iter().all(|d| d.day.year() == 2017));
        assert_eq!(report.records.len(), 2);
    }

    #[test]
    fn test_attendance_from_other_year_is_dropped() {
        let rows = vec![
            row(2, "15/03/2016", "08:00", "16:00", "8:00"),
            row(3, "03/04/2017", "08:00", "16:24", "8:24"),
        ];
        let report = produce_report(&rows, &[], &config()).unwrap();

        assert_eq!(report.year, 2017);
        assert_eq!(report.month(3).unwrap().worked_minutes, 0);
        assert_eq!(report.total_worked_minutes(), 504);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.days.len(), 1);
    }

    #[test]
    fn test_records_are_sorted_by_day_then_start() {
        let rows = vec![
            row(2, "05/04/2017", "08:00", "09:00", "1:00"),
            row(3, "03/04/2017", "13:00", "14:00", "1:00"),
            row(4, "03/04/2017", "08:00", "09:00", "1:00"),
        ];
        let report = produce_report(&rows, &[], &config()).unwrap();
        let starts: Vec<_> = report.records.iter().map(|r| r.start).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn test_detect_reporting_year_uses_first_anchor_day() {
        let days = vec![
            DailyAggregate {
                day: date(2016, 4, 29),
                worked_minutes: 60,
            },
            DailyAggregate {
                day: date(2017, 4, 3),
                worked_minutes: 60,
            },
        ];
        assert_eq!(detect_reporting_year(&days, 4).unwrap(), 2016);
    }

    fn arb_row() -> impl Strategy<Value = AttendanceRow> {
        (1u32..=12, 1u32..=28, 0u32..1440).prop_map(|(month, day, minutes)| AttendanceRow {
            line: 0,
            clock_in: format!("{:02}/{:02}/2017 00:00", day, month),
            clock_out: format!("{:02}/{:02}/2017 23:59", day, month),
            duration: format!("{}:{:02}", minutes / 60, minutes % 60),
            notes: None,
        })
    }

    proptest! {
        #[test]
        fn prop_totals_agree_across_grouping_levels(
            mut rows in prop::collection::vec(arb_row(), 0..60),
            anchor_minutes in 0u32..1440,
        ) {
            rows.push(AttendanceRow {
                line: 0,
                clock_in: "10/04/2017 00:00".to_string(),
                clock_out: "10/04/2017 23:59".to_string(),
                duration: format!("{}:{:02}", anchor_minutes / 60, anchor_minutes % 60),
                notes: None,
            });

            let record_total: i64 = rows
                .iter()
                .map(|r| i64::from(WorkedMinutes::parse(&r.duration).unwrap().get()))
                .sum();

            let report = produce_report(&rows, &[], &CalendarConfig::default()).unwrap();
            let daily_total: i64 = report.days.iter().map(|d| d.worked_minutes).sum();

            prop_assert_eq!(report.total_worked_minutes(), daily_total);
            prop_assert_eq!(daily_total, record_total);
        }

        #[test]
        fn prop_always_twelve_ordered_months(
            mut rows in prop::collection::vec(arb_row(), 0..20),
        ) {
            rows.push(AttendanceRow {
                line: 0,
                clock_in: "10/04/2017 08:00".to_string(),
                clock_out: "10/04/2017 09:00".to_string(),
                duration: "1:00".to_string(),
                notes: None,
            });

            let report = produce_report(&rows, &[], &CalendarConfig::default()).unwrap();
            let months: Vec<u32> = report.months.iter().map(|m| m.month).collect();
            prop_assert_eq!(months, (1..=12).collect::<Vec<u32>>());
        }
    }
}
