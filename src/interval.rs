use crate::error::BookingError;
use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Atomic unit of the availability calendar.
pub const SLOT_MINUTES: i64 = 30;

pub fn slot_length() -> Duration {
    Duration::minutes(SLOT_MINUTES)
}

/// Half-open instant pair `[start, finish)`. Represents a requested query
/// window, a stored reservation or a generated slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub finish: NaiveDateTime,
}

impl TimeInterval {
    pub fn new(start: NaiveDateTime, finish: NaiveDateTime) -> Result<Self, BookingError> {
        if finish <= start {
            return Err(BookingError::InvalidRange(format!(
                "finish ({finish}) must be after start ({start})"
            )));
        }
        Ok(Self { start, finish })
    }

    /// Half-open overlap test: an interval ending exactly when another
    /// begins does not conflict. Single source of truth for both the
    /// whole-period availability check and per-slot marking.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.finish && other.start < self.finish
    }

    /// True if both boundaries sit on an hour or half-hour.
    pub fn is_slot_aligned(&self) -> bool {
        let aligned = |instant: NaiveDateTime| {
            (instant.minute() == 0 || instant.minute() == 30) && instant.second() == 0
        };
        aligned(self.start) && aligned(self.finish)
    }
}
