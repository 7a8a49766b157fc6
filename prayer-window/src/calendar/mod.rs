//! Monthly prayer calendars.
//!
//! Upstream providers publish prayer times a month at a time. This module
//! decodes those documents (already fetched by the caller) and selects the
//! previous, current and next day tables for a date, reaching into the
//! adjacent months' documents at month boundaries.
//!
//! Fetching the documents is left to the caller; [`AdjacentMonths`] tells
//! it which extra months a date requires.

mod error;
mod load;
mod select;
mod types;

pub use error::CalendarError;
pub use select::{Adjacent, AdjacentMonths, CalendarSet, YearMonth};
pub use types::{CalendarDate, CalendarDay, GregorianDate, MonthlyCalendar};
