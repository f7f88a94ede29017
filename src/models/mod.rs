//! Core data models for the work-time balance engine.
//!
//! This module contains the attendance records read from a timesheet export
//! and the aggregates derived from them.

mod aggregate;
mod attendance;

pub use aggregate::{BalanceReport, DailyAggregate, MonthlyAggregate};
pub use attendance::{
    AttendanceRecord, AttendanceRow, MINUTES_PER_DAY, VACATION_NOTE, WorkedMinutes,
};
