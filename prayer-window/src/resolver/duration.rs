//! Time remaining until the next prayer.
//!
//! Table entries have no date. The next prayer is placed on the reference
//! date unless its hour is earlier than the reference hour, in which case it
//! belongs to the following day (the Isha to Fajr wrap).

use chrono::{DateTime, Duration, TimeZone, Timelike};
use tracing::trace;

use super::error::{ParseStage, ResolveError};
use crate::domain::{Prayer, TimeSlot};

/// Place `slot` on a concrete date relative to `reference`.
///
/// Returns `None` if the date overflows or the local time does not exist in
/// the reference zone. Ambiguous local times (clocks going back) resolve to
/// the earlier instant.
pub fn next_instant<Tz: TimeZone>(reference: &DateTime<Tz>, slot: TimeSlot) -> Option<DateTime<Tz>> {
    let mut date = reference.date_naive();
    if slot.hour() < reference.hour() {
        date = date.succ_opt()?;
    }

    reference
        .timezone()
        .from_local_datetime(&date.and_time(slot.time()))
        .earliest()
}

/// Signed duration from `reference` until the `prayer` entry `slot`.
pub fn time_until<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    prayer: Prayer,
    slot: &str,
) -> Result<Duration, ResolveError> {
    let target = TimeSlot::parse(slot)
        .map_err(|e| ResolveError::malformed(ParseStage::Duration, prayer, e))?;

    let instant =
        next_instant(reference, target).ok_or_else(|| ResolveError::InstantOutOfRange {
            prayer,
            time: target.to_string(),
        })?;

    let local = instant.naive_local();
    let remaining = instant.signed_duration_since(reference.clone());
    trace!(
        prayer = %prayer,
        target = %local,
        minutes = remaining.num_minutes(),
        "Computed time until next prayer"
    );

    Ok(remaining)
}
