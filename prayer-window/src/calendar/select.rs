//! Picking the three day tables a resolution needs.
//!
//! A resolution needs yesterday, today and tomorrow. On the first and last
//! day of a month one of those lives in an adjacent month's calendar, which
//! the caller has to have fetched as well.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::error::CalendarError;
use super::types::MonthlyCalendar;
use crate::domain::{DailyPrayerTable, DayTables};

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Which neighbouring month a calendar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacent {
    Previous,
    Next,
}

impl fmt::Display for Adjacent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adjacent::Previous => f.write_str("previous"),
            Adjacent::Next => f.write_str("next"),
        }
    }
}

/// Adjacent months whose calendars are needed to resolve on a given date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use prayer_window::calendar::{AdjacentMonths, YearMonth};
///
/// let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let needed = AdjacentMonths::for_date(first);
/// assert_eq!(needed.previous, Some(YearMonth::new(2023, 12)));
/// assert_eq!(needed.next, None);
///
/// let mid = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert!(AdjacentMonths::for_date(mid).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdjacentMonths {
    pub previous: Option<YearMonth>,
    pub next: Option<YearMonth>,
}

impl AdjacentMonths {
    pub fn for_date(date: NaiveDate) -> Self {
        let month = YearMonth::of(date);
        let outside = |d: Option<NaiveDate>| d.map(YearMonth::of).filter(|m| *m != month);

        Self {
            previous: outside(date.pred_opt()),
            next: outside(date.succ_opt()),
        }
    }

    /// True when the current month's calendar is enough.
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// The current month's calendar plus any adjacent months the caller has.
#[derive(Debug, Clone)]
pub struct CalendarSet {
    pub previous: Option<MonthlyCalendar>,
    pub current: MonthlyCalendar,
    pub next: Option<MonthlyCalendar>,
}

impl CalendarSet {
    /// Create a set from the current month only.
    pub fn new(current: MonthlyCalendar) -> Self {
        Self {
            previous: None,
            current,
            next: None,
        }
    }

    /// Add the previous month's calendar.
    pub fn with_previous(mut self, calendar: MonthlyCalendar) -> Self {
        self.previous = Some(calendar);
        self
    }

    /// Add the next month's calendar.
    pub fn with_next(mut self, calendar: MonthlyCalendar) -> Self {
        self.next = Some(calendar);
        self
    }

    /// Select yesterday's, today's and tomorrow's tables for `date`.
    pub fn day_tables(&self, date: NaiveDate) -> Result<DayTables, CalendarError> {
        let yesterday = date
            .pred_opt()
            .ok_or(CalendarError::DateOutOfRange { date })?;
        let tomorrow = date
            .succ_opt()
            .ok_or(CalendarError::DateOutOfRange { date })?;

        let current = self
            .current
            .day(date)
            .ok_or(CalendarError::MissingDay { date })?;
        let previous = self.neighbour(date, yesterday, Adjacent::Previous)?;
        let next = self.neighbour(date, tomorrow, Adjacent::Next)?;

        Ok(DayTables::new(previous.clone(), current.clone(), next.clone()))
    }

    fn neighbour(
        &self,
        today: NaiveDate,
        day: NaiveDate,
        which: Adjacent,
    ) -> Result<&DailyPrayerTable, CalendarError> {
        let calendar = if YearMonth::of(day) == YearMonth::of(today) {
            &self.current
        } else {
            let adjacent = match which {
                Adjacent::Previous => self.previous.as_ref(),
                Adjacent::Next => self.next.as_ref(),
            };
            debug!(%today, %day, %which, "Day table comes from adjacent month");
            adjacent.ok_or(CalendarError::MissingAdjacentMonth {
                which,
                month: YearMonth::of(day),
            })?
        };

        calendar
            .day(day)
            .ok_or(CalendarError::MissingDay { date: day })
    }
}
