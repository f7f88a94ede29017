//! Day-first date and timestamp parsing.
//!
//! Timesheet exports and vacation lists write dates day first
//! (`01/02/2017` is the 1st of February). A token that starts with a
//! four-digit year is read year first instead.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{EngineError, EngineResult};

const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d.%m.%Y", "%Y/%m/%d", "%Y.%m.%d"];

const DATETIME_FORMATS: [&str; 11] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Chrono accepts short years for `%Y`; require the year to be written out.
fn has_four_digit_year(date_part: &str) -> bool {
    let mut components = date_part.split(['/', '.', '-']);
    let first = components.next().unwrap_or_default();
    let last = components.last().unwrap_or_default();
    [first, last]
        .iter()
        .any(|c| c.len() == 4 && c.chars().all(|ch| ch.is_ascii_digit()))
}

/// Parses a single day-first date such as `01/02/2017` or `12.08.2017`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateFormat`] if the token matches none of
/// the accepted forms or names an impossible date.
///
/// # Example
///
/// ```
/// use worktime_balance::calculation::parse_day_first_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_day_first_date("01/02/2017").unwrap(),
///     NaiveDate::from_ymd_opt(2017, 2, 1).unwrap()
/// );
/// ```
pub fn parse_day_first_date(token: &str) -> EngineResult<NaiveDate> {
    let token = token.trim();
    let invalid = || EngineError::InvalidDateFormat {
        input: token.to_string(),
        message: "expected a day-first date like 31/12/2017 or 31.12.2017".to_string(),
    };

    if !has_four_digit_year(token) {
        return Err(invalid());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
        .ok_or_else(invalid)
}

/// Parses a day-first timestamp such as `03/04/2017 08:15`.
///
/// ISO `2017-04-03 08:15[:00]` is accepted as well. Returns `None` when no
/// form matches; the caller attaches the row context to the error.
pub fn parse_day_first_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    let date_part = text.split([' ', 'T']).next().unwrap_or_default();
    if !has_four_digit_year(date_part) {
        return None;
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}
