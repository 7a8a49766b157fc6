//! Command-line configuration.
//!
//! The binary is configured through environment variables, mirroring how
//! calendars are usually dropped next to it by a fetch job:
//!
//! - `PRAYER_CALENDAR`: current month's calendar file (required)
//! - `PRAYER_CALENDAR_PREVIOUS`: previous month's calendar file
//! - `PRAYER_CALENDAR_NEXT`: next month's calendar file
//! - `PRAYER_NOW`: RFC 3339 reference moment (defaults to the local clock)
//! - `PRAYER_OUTPUT`: `text` or `json` (defaults to `text`)

use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};

pub const CALENDAR_VAR: &str = "PRAYER_CALENDAR";
pub const PREVIOUS_CALENDAR_VAR: &str = "PRAYER_CALENDAR_PREVIOUS";
pub const NEXT_CALENDAR_VAR: &str = "PRAYER_CALENDAR_NEXT";
pub const NOW_VAR: &str = "PRAYER_NOW";
pub const OUTPUT_VAR: &str = "PRAYER_OUTPUT";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable has a value that cannot be used
    #[error("invalid {var} value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// How the resolved window is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err("expected \"text\" or \"json\"".to_string()),
        }
    }
}

/// Configuration for a single resolution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Calendar for the reference date's month.
    pub calendar: PathBuf,

    /// Calendar for the previous month, used on the 1st.
    pub previous_calendar: Option<PathBuf>,

    /// Calendar for the next month, used on the last day of the month.
    pub next_calendar: Option<PathBuf>,

    /// Fixed reference moment. `None` means the local clock.
    pub now: Option<DateTime<FixedOffset>>,

    pub output: OutputFormat,
}

impl AppConfig {
    /// Create a config for a single calendar file with defaults elsewhere.
    pub fn new(calendar: impl Into<PathBuf>) -> Self {
        Self {
            calendar: calendar.into(),
            previous_calendar: None,
            next_calendar: None,
            now: None,
            output: OutputFormat::default(),
        }
    }

    pub fn with_previous_calendar(mut self, path: impl Into<PathBuf>) -> Self {
        self.previous_calendar = Some(path.into());
        self
    }

    pub fn with_next_calendar(mut self, path: impl Into<PathBuf>) -> Self {
        self.next_calendar = Some(path.into());
        self
    }

    pub fn with_now(mut self, now: DateTime<FixedOffset>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let calendar = get(CALENDAR_VAR).ok_or(ConfigError::Missing(CALENDAR_VAR))?;
        let mut config = Self::new(calendar);

        if let Some(path) = get(PREVIOUS_CALENDAR_VAR) {
            config = config.with_previous_calendar(path);
        }
        if let Some(path) = get(NEXT_CALENDAR_VAR) {
            config = config.with_next_calendar(path);
        }

        if let Some(value) = get(NOW_VAR) {
            let now = DateTime::parse_from_rfc3339(value.trim()).map_err(|e| {
                ConfigError::Invalid {
                    var: NOW_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            config = config.with_now(now);
        }

        if let Some(value) = get(OUTPUT_VAR) {
            let output = value
                .trim()
                .parse()
                .map_err(|reason| ConfigError::Invalid {
                    var: OUTPUT_VAR,
                    value: value.clone(),
                    reason,
                })?;
            config = config.with_output(output);
        }

        Ok(config)
    }
}
