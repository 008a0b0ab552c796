use crate::backend::BookingBackend;
use crate::error::BookingError;
use crate::interval::TimeInterval;
use crate::types::{Booking, BookingStatus};
use chrono::NaiveDateTime;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tracing::info;
use uuid::Uuid;

/// In-memory booking store. Bookings live for the process lifetime;
/// cancellation and completion only change status, nothing is deleted.
#[derive(Debug, Clone, Default)]
pub struct LocalBookings {
    bookings: Arc<Mutex<HashMap<Uuid, Booking>>>,
}

impl BookingBackend for LocalBookings {
    fn active_bookings_for_period(&self, room_id: i32, period: &TimeInterval) -> Vec<Booking> {
        let bookings = self.bookings.lock().unwrap();
        bookings
            .values()
            .filter(|booking| booking.room_id == room_id)
            .filter(|booking| booking.status == BookingStatus::Active)
            .filter(|booking| period.overlaps(&booking.interval()))
            .cloned()
            .collect()
    }

    fn add_booking(&self, booking: Booking) {
        info!(
            "Storing booking {} for room {} from {} to {}",
            booking.id, booking.room_id, booking.start, booking.finish
        );
        let mut bookings = self.bookings.lock().unwrap();
        bookings.insert(booking.id, booking);
    }

    fn cancel_booking(&self, id: Uuid) -> Result<(), BookingError> {
        let mut bookings = self.bookings.lock().unwrap();
        match bookings.get_mut(&id) {
            Some(booking) => {
                booking.status = BookingStatus::Cancelled;
                info!("Booking {id} cancelled");
                Ok(())
            }
            None => Err(BookingError::BookingNotFound(id)),
        }
    }

    fn bookings_by_user(&self, user_id: i32) -> Vec<Booking> {
        let bookings = self.bookings.lock().unwrap();
        bookings
            .values()
            .filter(|booking| booking.user_id == user_id)
            .cloned()
            .collect()
    }

    fn mark_completed_bookings(&self, now: NaiveDateTime) {
        let mut bookings = self.bookings.lock().unwrap();
        let mut completed = 0;
        for booking in bookings.values_mut() {
            if booking.status == BookingStatus::Active && booking.finish < now {
                booking.status = BookingStatus::Completed;
                completed += 1;
            }
        }
        info!("Marked {completed} past bookings as completed");
    }
}
