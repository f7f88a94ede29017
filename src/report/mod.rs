//! Plain-text rendering of a [`BalanceReport`](crate::models::BalanceReport).
//!
//! The summary view shows the yearly totals and one row per month; the full
//! view lists every attendance record.

mod full;
mod summary;

pub use full::render_full;
pub use summary::render_summary;

/// Joins rendered lines, ending every line with a newline.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
