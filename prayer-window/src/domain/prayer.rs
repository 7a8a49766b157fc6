//! The six canonical daily prayer slots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown prayer name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown prayer name: {0:?}")]
pub struct UnknownPrayer(String);

/// A slot in the daily prayer table.
///
/// Slots are ordered the way they occur through the day. Sunrise is not a
/// prayer in its own right, but it bounds the Fajr window, so it has a
/// slot in every table.
///
/// # Examples
///
/// ```
/// use prayer_window::domain::Prayer;
///
/// assert_eq!(Prayer::Isha.successor(), Prayer::Fajr);
/// assert_eq!(Prayer::Fajr.successor(), Prayer::Dhuhr);
/// assert_eq!("Maghrib".parse::<Prayer>().unwrap(), Prayer::Maghrib);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All slots in table order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// The prayer that follows this one.
    ///
    /// This cycles over the five prayers: Sunrise is never a successor, so
    /// both Fajr and Sunrise are followed by Dhuhr. Isha wraps to Fajr.
    pub fn successor(self) -> Prayer {
        match self {
            Prayer::Fajr | Prayer::Sunrise => Prayer::Dhuhr,
            Prayer::Dhuhr => Prayer::Asr,
            Prayer::Asr => Prayer::Maghrib,
            Prayer::Maghrib => Prayer::Isha,
            Prayer::Isha => Prayer::Fajr,
        }
    }

    /// Canonical name, as used by upstream prayer-time tables.
    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Prayer {
    type Err = UnknownPrayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prayer::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPrayer(s.to_string()))
    }
}
