//! Resolver error types.
//!
//! A resolution either produces a complete window or fails outright. These
//! errors describe bad upstream data; none of them are transient.

use std::fmt;

use crate::domain::{Prayer, SlotError};

/// Which step of the resolution was parsing a slot when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    /// Comparing a table entry against the reference clock.
    Comparison,
    /// Turning the next prayer's entry into a concrete instant.
    Duration,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStage::Comparison => f.write_str("time-of-day comparison"),
            ParseStage::Duration => f.write_str("duration computation"),
        }
    }
}

/// Errors from resolving the active prayer window.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A table entry is not a valid time of day
    #[error("malformed {prayer} time during {stage}: {source}")]
    MalformedTimeSlot {
        stage: ParseStage,
        prayer: Prayer,
        #[source]
        source: SlotError,
    },

    /// The ordered scan finished without finding a boundary
    #[error("unable to pinpoint the active prayer window")]
    IncompleteResolution,

    /// The next prayer's instant cannot be represented in the reference zone
    #[error("next {prayer} time {time} does not exist on the target date")]
    InstantOutOfRange { prayer: Prayer, time: String },
}

impl ResolveError {
    pub(crate) fn malformed(stage: ParseStage, prayer: Prayer, source: SlotError) -> Self {
        Self::MalformedTimeSlot {
            stage,
            prayer,
            source,
        }
    }
}
