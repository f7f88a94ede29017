//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the business-day
//! calendar from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::CalendarConfig;

/// Loads and provides access to the calendar configuration.
///
/// # File format
///
/// ```text
/// weekly_hours: 42
/// working_days_per_week: 5
/// lunch_break_minutes: 0
/// anchor_month: 4
/// holidays:
///   2017:
///     - 2017-01-01
///     - 2017-04-14
/// ```
///
/// All keys except `holidays` are optional and fall back to the built-in
/// defaults.
///
/// # Example
///
/// ```no_run
/// use worktime_balance::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/calendar.yaml")?;
/// println!("Anchor month: {}", loader.config().anchor_month);
/// # Ok::<(), worktime_balance::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing ([`EngineError::ConfigNotFound`])
    /// - The file contains invalid YAML or missing fields ([`EngineError::ConfigParseError`])
    /// - The values are inconsistent ([`EngineError::InvalidConfig`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config = Self::load_yaml::<CalendarConfig>(path.as_ref())?;
        config.validate()?;

        debug!(
            years = config.holidays.len(),
            anchor_month = config.anchor_month,
            "Loaded calendar configuration"
        );

        Ok(Self { config })
    }

    /// Returns a loader holding the built-in calendar.
    pub fn builtin() -> Self {
        Self {
            config: CalendarConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying calendar configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Consumes the loader, returning the calendar configuration.
    pub fn into_config(self) -> CalendarConfig {
        self.config
    }
}
