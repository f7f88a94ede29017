//! Work-time balance reports from timesheet exports.
//!
//! This crate reads clock-in/clock-out records and vacation days, compares
//! the time worked each month with the time expected by a holiday-aware
//! business-day calendar, and renders the resulting balance as text.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
