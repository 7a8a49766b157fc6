//! Daily prayer-time tables.

use serde::{Deserialize, Serialize};

use super::Prayer;

/// One day's prayer times, as supplied by the upstream calendar.
///
/// Entries are kept as the raw strings the provider sent (e.g.
/// "04:37 (BST)"). They are parsed lazily by the resolver so that a
/// malformed entry is reported against the prayer it belongs to.
///
/// Upstream tables carry extra keys such as "Imsak" and "Midnight"; those
/// are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyPrayerTable {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl DailyPrayerTable {
    /// Create a table from its six entries, in table order.
    pub fn new(
        fajr: impl Into<String>,
        sunrise: impl Into<String>,
        dhuhr: impl Into<String>,
        asr: impl Into<String>,
        maghrib: impl Into<String>,
        isha: impl Into<String>,
    ) -> Self {
        Self {
            fajr: fajr.into(),
            sunrise: sunrise.into(),
            dhuhr: dhuhr.into(),
            asr: asr.into(),
            maghrib: maghrib.into(),
            isha: isha.into(),
        }
    }

    /// Returns the raw entry for `prayer`.
    pub fn get(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Sunrise => &self.sunrise,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }

    /// Iterate over `(prayer, entry)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, &str)> {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// The three consecutive days a resolution needs.
///
/// The caller is responsible for the tables being mutually consistent:
/// same location and calculation method, and contiguous dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTables {
    pub previous: DailyPrayerTable,
    pub current: DailyPrayerTable,
    pub next: DailyPrayerTable,
}

impl DayTables {
    pub fn new(previous: DailyPrayerTable, current: DailyPrayerTable, next: DailyPrayerTable) -> Self {
        Self {
            previous,
            current,
            next,
        }
    }
}
