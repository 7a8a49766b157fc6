//! Monthly calendar documents.
//!
//! These types map the upstream monthly calendar JSON. A document looks
//! like:
//!
//! ```json
//! {
//!   "code": 200,
//!   "status": "OK",
//!   "data": [
//!     {
//!       "timings": { "Fajr": "04:37 (BST)", "Sunrise": "06:36 (BST)", ... },
//!       "date": { "gregorian": { "date": "01-06-2024" } }
//!     }
//!   ]
//! }
//! ```
//!
//! Only the fields used here are declared; everything else is ignored.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::error::CalendarError;
use crate::domain::DailyPrayerTable;

/// Date format used by the upstream `gregorian.date` field.
const GREGORIAN_FORMAT: &str = "%d-%m-%Y";

/// Outer shape shared by success and error responses. On errors `data` is
/// a message string rather than a list of days.
#[derive(Debug, Deserialize)]
struct Envelope {
    code: u16,
    #[serde(default)]
    status: String,
    data: serde_json::Value,
}

/// One month of daily prayer tables.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyCalendar {
    /// Upstream status code (200 on success).
    pub code: u16,

    /// Upstream status text.
    pub status: String,

    /// One entry per day of the month, in order.
    pub data: Vec<CalendarDay>,
}

/// A single day in a monthly calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarDay {
    pub timings: DailyPrayerTable,

    /// Date metadata. Older documents omit it.
    #[serde(default)]
    pub date: Option<CalendarDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarDate {
    pub gregorian: GregorianDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GregorianDate {
    /// "DD-MM-YYYY".
    pub date: String,
}

impl CalendarDay {
    /// The Gregorian date of this entry, if present and well-formed.
    pub fn gregorian_date(&self) -> Option<NaiveDate> {
        let date = self.date.as_ref()?;
        NaiveDate::parse_from_str(&date.gregorian.date, GREGORIAN_FORMAT).ok()
    }
}

impl MonthlyCalendar {
    /// Decode a calendar document, rejecting upstream error responses.
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        let json_error = |e: serde_json::Error| CalendarError::Json {
            message: e.to_string(),
        };

        let envelope: Envelope = serde_json::from_str(json).map_err(json_error)?;
        if envelope.code != 200 {
            return Err(CalendarError::Status {
                code: envelope.code,
                status: envelope.status,
            });
        }

        let data = serde_json::from_value(envelope.data).map_err(json_error)?;
        Ok(Self {
            code: envelope.code,
            status: envelope.status,
            data,
        })
    }

    /// Returns the table for `date`.
    ///
    /// Entries that carry a Gregorian date are matched on it. Undated
    /// entries are matched by position (day 1 is the first entry).
    pub fn day(&self, date: NaiveDate) -> Option<&DailyPrayerTable> {
        if let Some(day) = self.data.iter().find(|d| d.gregorian_date() == Some(date)) {
            return Some(&day.timings);
        }

        self.data
            .get(date.day0() as usize)
            .filter(|d| d.date.is_none())
            .map(|d| &d.timings)
    }

    /// Number of days in the document.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
