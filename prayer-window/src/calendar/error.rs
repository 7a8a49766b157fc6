//! Calendar error types.

use std::path::PathBuf;

use chrono::NaiveDate;

use super::select::{Adjacent, YearMonth};

/// Errors from decoding calendars and selecting day tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Calendar file could not be read
    #[error("failed to read calendar {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    /// Calendar document is not valid JSON of the expected shape
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Calendar document is an upstream error response
    #[error("calendar response is not a success: {code} {status}")]
    Status { code: u16, status: String },

    /// No table for a date the calendar should cover
    #[error("no prayer times for {date}")]
    MissingDay { date: NaiveDate },

    /// An adjacent month's calendar is needed but was not supplied
    #[error("{which} month calendar ({month}) is required")]
    MissingAdjacentMonth { which: Adjacent, month: YearMonth },

    /// Neighbouring day is outside chrono's supported range
    #[error("date out of range around {date}")]
    DateOutOfRange { date: NaiveDate },
}
