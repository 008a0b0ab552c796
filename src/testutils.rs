use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::backend::BookingBackend;
use crate::error::BookingError;
use crate::interval::TimeInterval;
use crate::types::Booking;

pub struct MockBookingBackendInner {
    pub success: AtomicBool,
    pub calls_to_active_bookings_for_period: AtomicU64,
    pub calls_to_add_booking: AtomicU64,
    pub calls_to_cancel_booking: AtomicU64,
    pub calls_to_bookings_by_user: AtomicU64,
    pub calls_to_mark_completed_bookings: AtomicU64,
    pub bookings: Mutex<HashMap<Uuid, Booking>>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_active_bookings_for_period: AtomicU64::default(),
            calls_to_add_booking: AtomicU64::default(),
            calls_to_cancel_booking: AtomicU64::default(),
            calls_to_bookings_by_user: AtomicU64::default(),
            calls_to_mark_completed_bookings: AtomicU64::default(),
            bookings: Mutex::default(),
        }
    }
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingBackendInner::new()))
    }
}

impl BookingBackend for MockBookingBackend {
    fn active_bookings_for_period(&self, _room_id: i32, _period: &TimeInterval) -> Vec<Booking> {
        self.0
            .calls_to_active_bookings_for_period
            .fetch_add(1, Ordering::SeqCst);
        self.0.bookings.lock().unwrap().values().cloned().collect()
    }

    fn add_booking(&self, booking: Booking) {
        self.0.calls_to_add_booking.fetch_add(1, Ordering::SeqCst);
        self.0.bookings.lock().unwrap().insert(booking.id, booking);
    }

    fn cancel_booking(&self, id: Uuid) -> Result<(), BookingError> {
        self.0.calls_to_cancel_booking.fetch_add(1, Ordering::SeqCst);
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(BookingError::BookingNotFound(id)),
        }
    }

    fn bookings_by_user(&self, _user_id: i32) -> Vec<Booking> {
        self.0
            .calls_to_bookings_by_user
            .fetch_add(1, Ordering::SeqCst);
        self.0.bookings.lock().unwrap().values().cloned().collect()
    }

    fn mark_completed_bookings(&self, _now: NaiveDateTime) {
        self.0
            .calls_to_mark_completed_bookings
            .fetch_add(1, Ordering::SeqCst);
    }
}
