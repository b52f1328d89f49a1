use std::fmt::{self, Display};

use chrono::{NaiveDateTime, TimeDelta};

use crate::utils::format_timestamp;

///
/// TimeSlot struct, representation of one `[start, end]` slot of a schedule.
///
/// Slots produced by the splitter always satisfy `end > start`. Slots produced
/// by the overlap calculator carry no such guarantee: `end < start` encodes
/// "no overlap" and `end == start` a zero-length touch.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSlot {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        TimeSlot { start, end }
    }

    ///
    /// Get the signed length of the slot
    ///
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether the slot has strictly positive duration.
    #[inline]
    pub fn is_genuine(&self) -> bool {
        self.end > self.start
    }

    /// Check if two slots share any positive amount of time
    #[inline]
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Compute the intersection of two slots, unclamped: when the slots are
    /// disjoint the result has `end < start`, and when they merely touch it
    /// has `end == start`.
    #[inline]
    pub fn intersect(&self, other: &TimeSlot) -> TimeSlot {
        TimeSlot {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        }
    }

    ///
    /// Get output string of TimeSlot
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}",
            format_timestamp(self.start),
            format_timestamp(self.end)
        )
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
