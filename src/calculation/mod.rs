//! Calculation logic for the work-time balance engine.
//!
//! This module contains the business-day calendar, day-first date and
//! date-range parsing, vacation-day synthesis, the time-accounting
//! aggregation that produces a [`BalanceReport`](crate::models::BalanceReport),
//! and `h:mm` formatting of minute counts.

mod accounting;
mod business_days;
mod date_parsing;
mod date_range;
mod time_format;
mod vacation;

pub use accounting::{
    aggregate_by_day, aggregate_by_month, detect_reporting_year, parse_record, produce_report,
};
pub use business_days::{
    MonthExpectation, business_days, business_days_in_month, is_business_day, is_weekend,
};
pub use date_parsing::{parse_day_first_date, parse_day_first_datetime};
pub use date_range::parse_date_line;
pub use time_format::{decimal_minutes_to_hm, minutes_to_hm};
pub use vacation::{VACATION_START_HOUR, effective_vacation_days, vacation_record};
