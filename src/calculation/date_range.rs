//! Date and date-range lines.
//!
//! A vacation list holds one entry per line: either a single date or an
//! inclusive range written as `first - last`.

use tracing::debug;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

use super::date_parsing::parse_day_first_date;

/// Expands one line into the ordered dates it names.
///
/// The line is split on `-` into one or two day-first date tokens. A single
/// token yields one date; two tokens yield every date from the first to the
/// second, both included.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateFormat`] when:
/// - a token is not a valid day-first date
/// - the line holds more than one `-`
/// - the range runs backwards
///
/// # Example
///
/// ```
/// use worktime_balance::calculation::parse_date_line;
/// use chrono::NaiveDate;
///
/// let dates = parse_date_line("12.08.2017 - 15.08.2017").unwrap();
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2017, 8, 12).unwrap());
/// assert_eq!(dates[3], NaiveDate::from_ymd_opt(2017, 8, 15).unwrap());
/// ```
pub fn parse_date_line(text: &str) -> EngineResult<Vec<NaiveDate>> {
    let tokens: Vec<&str> = text.trim().split('-').collect();

    match tokens.as_slice() {
        [single] => Ok(vec![parse_day_first_date(single)?]),
        [first, last] => {
            let first = parse_day_first_date(first)?;
            let last = parse_day_first_date(last)?;

            if last < first {
                return Err(EngineError::InvalidDateFormat {
                    input: text.trim().to_string(),
                    message: "range ends before it starts".to_string(),
                });
            }

            let dates: Vec<NaiveDate> = first.iter_days().take_while(|d| *d <= last).collect();
            debug!(%first, %last, days = dates.len(), "Expanded date range");
            Ok(dates)
        }
        _ => Err(EngineError::InvalidDateFormat {
            input: text.trim().to_string(),
            message: "expected a date or a 'first - last' range".to_string(),
        }),
    }
}
