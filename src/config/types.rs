//! Configuration types for the business-day calendar.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML calendar file, plus the built-in calendar used
//! when no file is supplied.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{EngineError, EngineResult};

/// Swiss (Zurich) public holidays for 2017, as `(month, day)` pairs.
const BUILTIN_2017_HOLIDAYS: [(u32, u32); 9] = [
    (1, 1),   // New Year's Day
    (4, 14),  // Good Friday
    (4, 17),  // Easter Monday
    (5, 1),   // Labour Day
    (5, 25),  // Ascension Day
    (6, 5),   // Whit Monday
    (8, 1),   // Swiss National Day
    (9, 11),  // Knabenschiessen
    (12, 25), // Christmas
];

fn default_weekly_hours() -> Decimal {
    Decimal::new(42, 0)
}

fn default_working_days_per_week() -> u32 {
    5
}

fn default_anchor_month() -> u32 {
    4
}

/// The business-day calendar and working-time contract.
///
/// Holidays are keyed by year; a report for a year without an entry fails
/// with [`EngineError::UnsupportedYear`] instead of assuming no holidays.
///
/// # Example
///
/// ```
/// use worktime_balance::config::CalendarConfig;
/// use rust_decimal::Decimal;
///
/// let config = CalendarConfig::default();
/// assert_eq!(config.anchor_month, 4);
/// assert_eq!(config.minutes_per_standard_day(), Decimal::new(504, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Contractual hours per week.
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: Decimal,
    /// Number of working days the weekly hours are spread over.
    #[serde(default = "default_working_days_per_week")]
    pub working_days_per_week: u32,
    /// Minutes added to every standard day for the lunch break. Zero disables it.
    #[serde(default)]
    pub lunch_break_minutes: u32,
    /// Month whose first record determines the reporting year.
    #[serde(default = "default_anchor_month")]
    pub anchor_month: u32,
    /// Holiday dates excluded from business days, keyed by year.
    pub holidays: BTreeMap<i32, BTreeSet<NaiveDate>>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let holidays_2017 = BUILTIN_2017_HOLIDAYS
            .iter()
            .map(|&(month, day)| {
                NaiveDate::from_ymd_opt(2017, month, day).expect("Valid built-in holiday")
            })
            .collect();

        Self {
            weekly_hours: default_weekly_hours(),
            working_days_per_week: default_working_days_per_week(),
            lunch_break_minutes: 0,
            anchor_month: default_anchor_month(),
            holidays: BTreeMap::from([(2017, holidays_2017)]),
        }
    }
}

impl CalendarConfig {
    /// Returns the expected minutes for one standard working day.
    ///
    /// Computed as `60 * weekly_hours / working_days_per_week` plus the
    /// configured lunch break.
    pub fn minutes_per_standard_day(&self) -> Decimal {
        let per_day = Decimal::new(60, 0) * self.weekly_hours
            / Decimal::from(self.working_days_per_week.max(1));
        per_day + Decimal::from(self.lunch_break_minutes)
    }

    /// Returns the holiday set for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedYear`] when the calendar has no entry
    /// for the year.
    pub fn holidays_for(&self, year: i32) -> EngineResult<&BTreeSet<NaiveDate>> {
        self.holidays
            .get(&year)
            .ok_or(EngineError::UnsupportedYear { year })
    }

    /// Checks the configuration for values the engine cannot work with.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=12).contains(&self.anchor_month) {
            return Err(EngineError::InvalidConfig {
                message: format!("anchor_month must be 1-12, got {}", self.anchor_month),
            });
        }

        if !(1..=7).contains(&self.working_days_per_week) {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "working_days_per_week must be 1-7, got {}",
                    self.working_days_per_week
                ),
            });
        }

        if self.weekly_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!("weekly_hours must be positive, got {}", self.weekly_hours),
            });
        }

        // A vacation day is encoded as one record and must fit in a single day.
        if self.minutes_per_standard_day() >= Decimal::new(24 * 60, 0) {
            return Err(EngineError::InvalidConfig {
                message: "a standard working day must be shorter than 24 hours".to_string(),
            });
        }

        for (year, dates) in &self.holidays {
            if let Some(stray) = dates.iter().find(|d| d.year() != *year) {
                return Err(EngineError::InvalidConfig {
                    message: format!("holiday {} is listed under year {}", stray, year),
                });
            }
        }

        Ok(())
    }
}
