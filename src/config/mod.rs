//! Calendar configuration for the work-time balance engine.
//!
//! This module provides the business-day calendar (holidays keyed by year,
//! the weekly hour contract and the year-detection anchor month) and the
//! loader that reads it from YAML.
//!
//! # Example
//!
//! ```no_run
//! use worktime_balance::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/calendar.yaml").unwrap();
//! println!("Standard day: {} minutes", loader.config().minutes_per_standard_day());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::CalendarConfig;
