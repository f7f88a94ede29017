//! Readers for the engine's input files.
//!
//! Both readers consume their file completely and close it before returning,
//! so the engine only ever sees in-memory data.

mod attendance;
mod vacation;

pub use attendance::{parse_attendance_csv, read_attendance_csv};
pub use vacation::{parse_vacation_lines, read_vacation_file};
