//! Domain types for prayer-time resolution.
//!
//! Prayer tables arrive as strings from an upstream provider. The types here
//! give those strings a fixed shape (six named slots in table order) and
//! parse individual entries on demand.

mod prayer;
mod slot;
mod table;

pub use prayer::{Prayer, UnknownPrayer};
pub use slot::{SlotError, TimeSlot, is_reached};
pub use table::{DailyPrayerTable, DayTables};
