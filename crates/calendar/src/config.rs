//! # Calendar Configuration Module
//!
//! Loads the settings of the `guardias` binary from environment variables.
//!
//! ## Environment Variables
//!
//! - `GUARDIAS_SHIFTS_FILE`: JSON file with the shift array (required)
//! - `GUARDIAS_SCHEDULE_ID`: schedule to run the revert-to-draft check for
//! - `GUARDIAS_TARGET_DATE`: date (`YYYY-MM-DD`) to list covering shifts for
//! - `GUARDIAS_REFERENCE_DATE`: date (`YYYY-MM-DD`) shifts are compared against
//!   when checking for past shifts (default: today)
//! - `LOG_LEVEL`: logging level (default: "info")

use std::{env, path::PathBuf};

use chrono::{Local, NaiveDate};
use eyre::{Result, WrapErr};
use tracing::Level;

/// Configuration for the `guardias` binary.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// Path of the JSON shift export
    pub shifts_file: PathBuf,

    /// Schedule checked by the revert gate, if any
    pub schedule_id: Option<i64>,

    /// Date to report coverage for, if any
    pub target_date: Option<NaiveDate>,

    /// Reference date for the past-shift check; today when unset
    pub reference_date: Option<NaiveDate>,

    /// Log level for the application
    pub log_level: Level,
}

impl CalendarConfig {
    /// Creates a new CalendarConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `GUARDIAS_SHIFTS_FILE` is not set
    /// - `GUARDIAS_SCHEDULE_ID` is not an integer
    /// - either date variable is not a `YYYY-MM-DD` date
    pub fn from_env() -> Result<Self> {
        let shifts_file = env::var("GUARDIAS_SHIFTS_FILE")
            .wrap_err("GUARDIAS_SHIFTS_FILE environment variable must be set")?
            .into();

        let schedule_id = env::var("GUARDIAS_SCHEDULE_ID")
            .ok()
            .map(|id| id.trim().parse::<i64>())
            .transpose()
            .wrap_err("Invalid GUARDIAS_SCHEDULE_ID value")?;

        let target_date = date_var("GUARDIAS_TARGET_DATE")?;
        let reference_date = date_var("GUARDIAS_REFERENCE_DATE")?;

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        Ok(Self {
            shifts_file,
            schedule_id,
            target_date,
            reference_date,
            log_level,
        })
    }

    /// The configured reference date, or today's local date.
    pub fn reference_date_or_today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

fn date_var(name: &str) -> Result<Option<NaiveDate>> {
    env::var(name)
        .ok()
        .map(|value| parse_date(&value))
        .transpose()
        .wrap_err_with(|| format!("Invalid {name} value"))
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .wrap_err_with(|| format!("Expected a YYYY-MM-DD date, got {value:?}"))
}

/// Maps a log level name to a tracing level, defaulting to INFO.
pub fn parse_log_level(value: &str) -> Level {
    match value.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
