//! Active prayer window resolution.
//!
//! The six table slots split the day into windows. For a reference moment we
//! find the window it falls in, expressed as the active prayer and the next
//! one. Two windows wrap across midnight:
//!
//! - after today's Isha, the next prayer is tomorrow's Fajr;
//! - before today's Fajr, the active prayer is yesterday's Isha.

use chrono::{DateTime, Duration, TimeZone};
use tracing::{debug, trace};

use super::duration::time_until;
use super::error::{ParseStage, ResolveError};
use crate::domain::{DailyPrayerTable, DayTables, Prayer, is_reached};

/// The window a reference moment falls in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWindow {
    /// The most recently started slot.
    pub current_prayer: Prayer,
    /// Raw table entry for `current_prayer`.
    pub current_prayer_time: String,
    /// Always `current_prayer.successor()`.
    pub next_prayer: Prayer,
    /// Raw table entry for `next_prayer`, from whichever day it falls on.
    pub next_prayer_time: String,
    /// True when the active Isha is yesterday's (reference is before today's Fajr).
    pub previous_day_isha: bool,
    /// Signed time from the reference moment until `next_prayer` starts.
    pub time_until_next: Duration,
}

/// Slot selection before the duration is known.
struct Selection<'a> {
    current: Prayer,
    current_time: &'a str,
    next_time: &'a str,
    previous_day_isha: bool,
}

/// The slot whose window is active when `boundary` is the first slot of the
/// day not yet reached.
///
/// Failing at Fajr means we are still in the previous day's Isha window.
fn active_before(boundary: Prayer) -> Prayer {
    match boundary {
        Prayer::Fajr => Prayer::Isha,
        Prayer::Sunrise => Prayer::Fajr,
        Prayer::Dhuhr => Prayer::Sunrise,
        Prayer::Asr => Prayer::Dhuhr,
        Prayer::Maghrib => Prayer::Asr,
        Prayer::Isha => Prayer::Maghrib,
    }
}

/// Resolve the active and next prayer for `reference`.
///
/// Only the current day's table is compared against the clock. The previous
/// day supplies the active Isha before dawn, and the next day supplies Fajr
/// once today's Isha has started.
///
/// # Errors
///
/// Fails if a table entry that has to be inspected is malformed, or if the
/// next prayer's instant cannot be placed in the reference zone. No partial
/// window is ever returned.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use prayer_window::domain::{DailyPrayerTable, Prayer};
/// use prayer_window::resolver::resolve;
///
/// let yesterday = DailyPrayerTable::new("04:37", "06:36", "13:04", "16:37", "19:34", "21:32");
/// let today = DailyPrayerTable::new("04:37", "06:36", "13:04", "16:37", "19:34", "21:33");
/// let tomorrow = DailyPrayerTable::new("04:38", "06:36", "13:04", "16:37", "19:34", "21:33");
///
/// let zone = FixedOffset::east_opt(3600).unwrap();
/// let now = zone.with_ymd_and_hms(2024, 6, 10, 4, 36, 0).unwrap();
///
/// let window = resolve(&yesterday, &today, &tomorrow, &now).unwrap();
/// assert_eq!(window.current_prayer, Prayer::Isha);
/// assert!(window.previous_day_isha);
/// assert_eq!(window.current_prayer_time, "21:32");
/// assert_eq!(window.next_prayer, Prayer::Fajr);
/// assert_eq!(window.time_until_next.num_minutes(), 1);
/// ```
pub fn resolve<Tz: TimeZone>(
    previous: &DailyPrayerTable,
    current: &DailyPrayerTable,
    next: &DailyPrayerTable,
    reference: &DateTime<Tz>,
) -> Result<ResolvedWindow, ResolveError> {
    let reached = |prayer: Prayer, slot: &str| {
        is_reached(reference, slot)
            .map_err(|e| ResolveError::malformed(ParseStage::Comparison, prayer, e))
    };

    if reached(Prayer::Isha, current.get(Prayer::Isha))? {
        return finish(
            reference,
            Selection {
                current: Prayer::Isha,
                current_time: current.get(Prayer::Isha),
                next_time: next.get(Prayer::Fajr),
                previous_day_isha: false,
            },
        );
    }

    let mut boundary = None;
    for (prayer, slot) in current.iter() {
        let hit = reached(prayer, slot)?;
        trace!(prayer = %prayer, slot, reached = hit, "Scanned slot");
        if !hit {
            boundary = Some(prayer);
            break;
        }
    }
    let boundary = boundary.ok_or(ResolveError::IncompleteResolution)?;

    let selection = if boundary == Prayer::Fajr {
        Selection {
            current: Prayer::Isha,
            current_time: previous.get(Prayer::Isha),
            next_time: current.get(Prayer::Fajr),
            previous_day_isha: true,
        }
    } else {
        let active = active_before(boundary);
        Selection {
            current: active,
            current_time: current.get(active),
            next_time: current.get(active.successor()),
            previous_day_isha: false,
        }
    };

    finish(reference, selection)
}

fn finish<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    selection: Selection<'_>,
) -> Result<ResolvedWindow, ResolveError> {
    let next_prayer = selection.current.successor();
    let time_until_next = time_until(reference, next_prayer, selection.next_time)?;

    let window = ResolvedWindow {
        current_prayer: selection.current,
        current_prayer_time: selection.current_time.to_string(),
        next_prayer,
        next_prayer_time: selection.next_time.to_string(),
        previous_day_isha: selection.previous_day_isha,
        time_until_next,
    };

    debug!(
        current = %window.current_prayer,
        next = %window.next_prayer,
        previous_day_isha = window.previous_day_isha,
        minutes_until_next = window.time_until_next.num_minutes(),
        "Resolved prayer window"
    );

    Ok(window)
}

impl DayTables {
    /// Resolve the active prayer window for `reference` against these tables.
    pub fn resolve<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> Result<ResolvedWindow, ResolveError> {
        resolve(&self.previous, &self.current, &self.next, reference)
    }
}
