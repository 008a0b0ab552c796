use chrono::NaiveDateTime;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BookingError {
    /// Malformed weekly opening hours, or a schedule with no open day at
    /// all. Fatal at startup.
    #[error("Invalid opening hours configuration: {0}")]
    Configuration(String),

    #[error("Invalid time range: {0}")]
    InvalidRange(String),

    /// A 30-minute booking block has no matching slot in the generated
    /// grid. The booking data is misaligned or outside the queried range.
    #[error("No slot found for booking block starting at {0}")]
    SlotAlignment(NaiveDateTime),

    #[error("Room {room} is not available between {start} and {finish}")]
    RoomNotAvailable {
        room: i32,
        start: NaiveDateTime,
        finish: NaiveDateTime,
    },

    #[error("No such booking: {0}")]
    BookingNotFound(Uuid),
}
