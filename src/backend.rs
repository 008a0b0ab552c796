use crate::error::BookingError;
use crate::interval::TimeInterval;
use crate::types::Booking;
use chrono::NaiveDateTime;
use uuid::Uuid;

pub trait BookingBackend: Clone + Send + Sync + 'static {
    /// Bookings with status `Active` whose interval overlaps `period`,
    /// using the same half-open overlap test as the availability engine.
    fn active_bookings_for_period(&self, room_id: i32, period: &TimeInterval) -> Vec<Booking>;
    fn add_booking(&self, booking: Booking);
    fn cancel_booking(&self, id: Uuid) -> Result<(), BookingError>;
    fn bookings_by_user(&self, user_id: i32) -> Vec<Booking>;
    /// Flips active bookings that finished before `now` to `Completed`.
    fn mark_completed_bookings(&self, now: NaiveDateTime);
}
