//! Serializable view of a resolved window.

use std::fmt;

use chrono::Duration;
use serde::Serialize;

use crate::resolver::ResolvedWindow;

/// A resolved window, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowReport {
    /// Active prayer name
    pub current_prayer: String,

    /// Active prayer time, as given by the table
    pub current_prayer_time: String,

    /// Next prayer name
    pub next_prayer: String,

    /// Next prayer time, as given by the table
    pub next_prayer_time: String,

    /// Whether the active Isha is the previous day's
    pub previous_day_isha: bool,

    /// Whole seconds until the next prayer (negative if already passed)
    pub seconds_until_next: i64,

    /// Countdown as H:MM
    pub countdown: String,
}

impl WindowReport {
    pub fn from_window(window: &ResolvedWindow) -> Self {
        Self {
            current_prayer: window.current_prayer.to_string(),
            current_prayer_time: window.current_prayer_time.clone(),
            next_prayer: window.next_prayer.to_string(),
            next_prayer_time: window.next_prayer_time.clone(),
            previous_day_isha: window.previous_day_isha,
            seconds_until_next: window.time_until_next.num_seconds(),
            countdown: format_countdown(window.time_until_next),
        }
    }
}

impl From<&ResolvedWindow> for WindowReport {
    fn from(window: &ResolvedWindow) -> Self {
        Self::from_window(window)
    }
}

impl fmt::Display for WindowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current: {} {}", self.current_prayer, self.current_prayer_time)?;
        if self.previous_day_isha {
            write!(f, " (previous day)")?;
        }
        writeln!(f)?;
        write!(
            f,
            "Next:    {} {} in {}",
            self.next_prayer, self.next_prayer_time, self.countdown
        )
    }
}

/// Format a duration as H:MM, truncating seconds.
fn format_countdown(duration: Duration) -> String {
    let sign = if duration < Duration::zero() { "-" } else { "" };
    let minutes = duration.num_minutes().abs();
    format!("{sign}{}:{:02}", minutes / 60, minutes % 60)
}
