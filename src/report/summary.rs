//! Yearly summary view.

use crate::calculation::{decimal_minutes_to_hm, minutes_to_hm};
use crate::models::BalanceReport;

const TOTAL_LABEL_WIDTH: usize = 15;
const TOTAL_VALUE_WIDTH: usize = 10;

/// Renders the yearly totals followed by one row per month.
///
/// # Example
///
/// ```
/// use worktime_balance::calculation::produce_report;
/// use worktime_balance::config::CalendarConfig;
/// use worktime_balance::models::AttendanceRow;
/// use worktime_balance::report::render_summary;
///
/// let rows = vec![AttendanceRow {
///     line: 2,
///     clock_in: "03/04/2017 08:00".to_string(),
///     clock_out: "03/04/2017 16:24".to_string(),
///     duration: "8:24".to_string(),
///     notes: None,
/// }];
/// let report = produce_report(&rows, &[], &CalendarConfig::default()).unwrap();
///
/// let text = render_summary(&report);
/// assert!(text.starts_with("Running year 2017\n"));
/// assert_eq!(text.lines().filter(|l| l.starts_with("Apr")).count(), 1);
/// ```
pub fn render_summary(report: &BalanceReport) -> String {
    let mut lines = vec![format!("Running year {}", report.year)];

    let totals = [
        ("Worked:", minutes_to_hm(report.total_worked_minutes())),
        (
            "Expected:",
            decimal_minutes_to_hm(report.total_expected_minutes()),
        ),
        (
            "Balance:",
            decimal_minutes_to_hm(report.total_balance_minutes()),
        ),
        ("Vacation days:", report.vacation_days.to_string()),
    ];
    lines.extend(totals.into_iter().map(|(label, value)| {
        format!(
            "{:<lw$}{:>vw$}",
            label,
            value,
            lw = TOTAL_LABEL_WIDTH,
            vw = TOTAL_VALUE_WIDTH
        )
    }));
    lines.push(String::new());

    lines.push(format!(
        "{:<5}  {:>12}  {:>11}  {:>12}  {:>13}",
        "Month", "Working days", "Total (h:m)", "Worked (h:m)", "Balance (h:m)"
    ));
    lines.extend(report.months.iter().map(|month| {
        format!(
            "{:<5}  {:>12}  {:>11}  {:>12}  {:>13}",
            month.label,
            month.working_days,
            month.expected_hm(),
            month.worked_hm(),
            month.balance_hm()
        )
    }));

    super::join_lines(lines)
}
