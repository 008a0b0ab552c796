use crate::interval::TimeInterval;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Not cancelled and not yet completed; the only status that
    /// participates in availability computation.
    Active,
    Cancelled,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub room_id: i32,
    pub user_id: i32,
    pub start: NaiveDateTime,
    pub finish: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub comment: String,
    pub status: BookingStatus,
}

impl Booking {
    pub fn interval(&self) -> TimeInterval {
        TimeInterval {
            start: self.start,
            finish: self.finish,
        }
    }
}
