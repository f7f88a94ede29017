//! Full per-record view.

use crate::calculation::minutes_to_hm;
use crate::models::BalanceReport;

/// Renders one row per attendance record, vacation records included.
///
/// Each row shows the month, weekday and day of month, clock-in and
/// clock-out times, worked hours and the notes. Rows follow the report's
/// record order (by day, then clock-in).
pub fn render_full(report: &BalanceReport) -> String {
    let mut lines = vec![
        "Full report".to_string(),
        "-----------".to_string(),
        format!(
            "{:<5}  {:<6}  {:<5}  {:<5}  {:>5}  {}",
            "Month", "Day", "Start", "End", "Hours", "Notes"
        ),
    ];

    lines.extend(report.records.iter().map(|record| {
        let line = format!(
            "{:<5}  {:<6}  {:<5}  {:<5}  {:>5}  {}",
            record.start.format("%b").to_string(),
            record.start.format("%a %d").to_string(),
            record.start.format("%H:%M").to_string(),
            record.end.format("%H:%M").to_string(),
            minutes_to_hm(record.worked_minutes()),
            record.notes
        );
        line.trim_end().to_string()
    }));

    super::join_lines(lines)
}
