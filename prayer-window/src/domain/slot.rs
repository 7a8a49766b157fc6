//! Time-of-day parsing for prayer table entries.
//!
//! Upstream tables give each prayer as an "HH:MM" string, sometimes with an
//! annotation appended (e.g. "04:37 (BST)"). The entries carry no date, so
//! everything here works on time of day only; the resolver decides which
//! calendar day a slot belongs to.

use std::fmt;

use chrono::{NaiveTime, Timelike};

/// Error returned when a prayer table entry is not a valid time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time slot {slot:?}: {reason}")]
pub struct SlotError {
    slot: String,
    reason: &'static str,
}

impl SlotError {
    fn new(slot: &str, reason: &'static str) -> Self {
        Self {
            slot: slot.to_string(),
            reason,
        }
    }

    /// The text that failed to parse.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Why it failed.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A parsed prayer time of day.
///
/// # Examples
///
/// ```
/// use prayer_window::domain::TimeSlot;
///
/// let slot = TimeSlot::parse("04:37 (BST)").unwrap();
/// assert_eq!(slot.hour(), 4);
/// assert_eq!(slot.minute(), 37);
/// assert_eq!(slot.to_string(), "04:37");
///
/// assert!(TimeSlot::parse("13").is_err());
/// assert!(TimeSlot::parse("13:xx").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Parse a table entry.
    ///
    /// The hour is everything before the first `:`. The minute is everything
    /// after it, cut at the first `(` and trimmed. Both must be plain decimal
    /// digits, with the hour in 0-23 and the minute in 0-59.
    pub fn parse(s: &str) -> Result<Self, SlotError> {
        let (hour_part, rest) = s
            .split_once(':')
            .ok_or_else(|| SlotError::new(s, "expected HH:MM format"))?;

        let minute_part = rest.split_once('(').map_or(rest, |(minute, _)| minute);

        let hour =
            parse_digits(hour_part.trim()).ok_or_else(|| SlotError::new(s, "invalid hour digits"))?;
        if hour > 23 {
            return Err(SlotError::new(s, "hour must be 0-23"));
        }

        let minute = parse_digits(minute_part.trim())
            .ok_or_else(|| SlotError::new(s, "invalid minute digits"))?;
        if minute > 59 {
            return Err(SlotError::new(s, "minute must be 0-59"));
        }

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| SlotError::new(s, "invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the slot as a `NaiveTime` (seconds are always zero).
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Whether a clock reading has reached this slot.
    ///
    /// Only hour and minute of `reference` are compared; seconds are
    /// ignored, so the whole minute of the slot counts as reached.
    pub fn is_reached_by<T: Timelike>(&self, reference: &T) -> bool {
        let (hour, minute) = (reference.hour(), reference.minute());
        hour > self.hour() || (hour == self.hour() && minute >= self.minute())
    }
}

impl fmt::Debug for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeSlot({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse `slot` and test whether `reference` has reached it.
pub fn is_reached<T: Timelike>(reference: &T, slot: &str) -> Result<bool, SlotError> {
    Ok(TimeSlot::parse(slot)?.is_reached_by(reference))
}

/// Parse a non-empty run of ASCII digits.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn parse_valid_slots() {
        let s = TimeSlot::parse("00:00").unwrap();
        assert_eq!((s.hour(), s.minute()), (0, 0));

        let s = TimeSlot::parse("23:59").unwrap();
        assert_eq!((s.hour(), s.minute()), (23, 59));

        // Single-digit hour is accepted
        let s = TimeSlot::parse("4:37").unwrap();
        assert_eq!((s.hour(), s.minute()), (4, 37));
    }

    #[test]
    fn parse_strips_annotation() {
        let s = TimeSlot::parse("04:37 (BST)").unwrap();
        assert_eq!((s.hour(), s.minute()), (4, 37));

        let s = TimeSlot::parse("21:33(+03)").unwrap();
        assert_eq!((s.hour(), s.minute()), (21, 33));

        let s = TimeSlot::parse(" 13:04  ").unwrap();
        assert_eq!((s.hour(), s.minute()), (13, 4));

        // Cut at the first parenthesis only
        let s = TimeSlot::parse("05:12 (BST) (adjusted)").unwrap();
        assert_eq!((s.hour(), s.minute()), (5, 12));
    }

    #[test]
    fn parse_missing_colon() {
        let err = TimeSlot::parse("13").unwrap_err();
        assert_eq!(err.slot(), "13");
        assert_eq!(err.reason(), "expected HH:MM format");

        assert!(TimeSlot::parse("").is_err());
        assert!(TimeSlot::parse("1304").is_err());
        assert!(TimeSlot::parse("13.04").is_err());
    }

    #[test]
    fn parse_non_numeric() {
        let err = TimeSlot::parse("13:xx").unwrap_err();
        assert_eq!(err.reason(), "invalid minute digits");

        let err = TimeSlot::parse("ab:04").unwrap_err();
        assert_eq!(err.reason(), "invalid hour digits");

        assert!(TimeSlot::parse(":04").is_err());
        assert!(TimeSlot::parse("13:").is_err());
        assert!(TimeSlot::parse("13:(BST)").is_err());
        assert!(TimeSlot::parse("+1:04").is_err());
        assert!(TimeSlot::parse("-1:04").is_err());
        assert!(TimeSlot::parse("13:04:00").is_err());
    }

    #[test]
    fn parse_out_of_range() {
        assert_eq!(
            TimeSlot::parse("24:00").unwrap_err().reason(),
            "hour must be 0-23"
        );
        assert_eq!(
            TimeSlot::parse("12:60").unwrap_err().reason(),
            "minute must be 0-59"
        );
        assert!(TimeSlot::parse("99999999999:00").is_err());
    }

    #[test]
    fn error_display() {
        let err = TimeSlot::parse("13").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid time slot \"13\": expected HH:MM format"
        );
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeSlot::parse("4:05 (CET)").unwrap().to_string(), "04:05");
    }

    #[test]
    fn reached_same_hour() {
        // 13:00 is before 13:04
        assert!(!is_reached(&at(13, 0), "13:04").unwrap());
        // 13:05 is after 13:04
        assert!(is_reached(&at(13, 5), "13:04").unwrap());
        // Exact match counts as reached
        assert!(is_reached(&at(13, 4), "13:04").unwrap());
    }

    #[test]
    fn reached_different_hour() {
        assert!(!is_reached(&at(12, 5), "13:04").unwrap());
        assert!(is_reached(&at(14, 5), "13:04").unwrap());
        assert!(!is_reached(&at(12, 0), "13:04").unwrap());
        assert!(is_reached(&at(17, 10), "13:04").unwrap());
    }

    #[test]
    fn reached_ignores_seconds() {
        let reference = NaiveTime::from_hms_opt(13, 4, 59).unwrap();
        assert!(is_reached(&reference, "13:04").unwrap());
        let reference = NaiveTime::from_hms_opt(13, 3, 59).unwrap();
        assert!(!is_reached(&reference, "13:04").unwrap());
    }

    #[test]
    fn reached_with_annotation() {
        assert!(is_reached(&at(4, 37), "04:37 (BST)").unwrap());
        assert!(!is_reached(&at(4, 36), "04:37 (BST)").unwrap());
    }

    #[test]
    fn malformed_slot_is_an_error_not_a_boolean() {
        assert!(is_reached(&at(13, 0), "13").is_err());
        assert!(is_reached(&at(13, 0), "13:xx").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_slot()(hour in 0u32..24, minute in 0u32..60) -> (u32, u32, String) {
            (hour, minute, format!("{:02}:{:02}", hour, minute))
        }
    }

    proptest! {
        /// Any valid HH:MM string parses to its own components
        #[test]
        fn valid_slot_parses((hour, minute, s) in valid_slot()) {
            let slot = TimeSlot::parse(&s).unwrap();
            prop_assert_eq!(slot.hour(), hour);
            prop_assert_eq!(slot.minute(), minute);
            prop_assert_eq!(slot.to_string(), s);
        }

        /// Trailing annotations never change the parsed value
        #[test]
        fn annotation_is_ignored((_, _, s) in valid_slot(), note in "[A-Z+0-9]{0,5}") {
            let plain = TimeSlot::parse(&s).unwrap();
            let annotated = TimeSlot::parse(&format!("{s} ({note})")).unwrap();
            prop_assert_eq!(plain, annotated);
        }

        /// A slot is reached at its own time
        #[test]
        fn reached_at_own_time((hour, minute, s) in valid_slot()) {
            let reference = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
            prop_assert!(is_reached(&reference, &s).unwrap());
        }

        /// Once reached, a slot stays reached for the rest of the day
        #[test]
        fn reached_is_monotonic(
            (_, _, s) in valid_slot(),
            start in 0u32..1440,
            delta in 0u32..1440,
        ) {
            let later = (start + delta).min(1439);
            let t0 = NaiveTime::from_hms_opt(start / 60, start % 60, 0).unwrap();
            let t1 = NaiveTime::from_hms_opt(later / 60, later % 60, 0).unwrap();
            if is_reached(&t0, &s).unwrap() {
                prop_assert!(is_reached(&t1, &s).unwrap());
            }
        }

        /// Reached agrees with NaiveTime ordering at minute precision
        #[test]
        fn reached_matches_time_ordering((_, _, s) in valid_slot(), minute_of_day in 0u32..1440) {
            let slot = TimeSlot::parse(&s).unwrap();
            let reference =
                NaiveTime::from_hms_opt(minute_of_day / 60, minute_of_day % 60, 0).unwrap();
            prop_assert_eq!(slot.is_reached_by(&reference), reference >= slot.time());
        }
    }
}
