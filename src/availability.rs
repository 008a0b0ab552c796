use crate::backend::BookingBackend;
use crate::error::BookingError;
use crate::grid::{build_empty_grid, Slot};
use crate::interval::{slot_length, TimeInterval};
use crate::schedule::WeeklySchedule;
use crate::types::Booking;
use chrono::Datelike;
use tracing::{debug, info};

/// Top-level availability API. Holds the weekly schedule, constructed once
/// at startup; all other inputs arrive per call.
#[derive(Debug, Clone)]
pub struct AvailabilityResolver {
    schedule: WeeklySchedule,
}

impl AvailabilityResolver {
    pub fn new(schedule: WeeklySchedule) -> Self {
        Self { schedule }
    }

    /// True iff the interval falls entirely within the opening hours of
    /// its start day. Assumes a single-day interval; both boundaries are
    /// checked against the start day's window.
    pub fn is_open_during_interval(&self, interval: &TimeInterval) -> bool {
        let weekday = interval.start.weekday();
        let hours = self.schedule.hours_for(weekday);
        let (Some(opening_time), Some(closing_time)) = (hours.opening_time(), hours.closing_time())
        else {
            info!("Rooms are closed on {weekday}");
            return false;
        };

        let start_time = interval.start.time();
        let finish_time = interval.finish.time();
        let open = start_time >= opening_time
            && start_time < closing_time
            && finish_time > opening_time
            && finish_time <= closing_time;
        debug!(
            "Rooms are {} from {} to {}",
            if open { "open" } else { "closed" },
            interval.start,
            interval.finish
        );
        open
    }

    /// Opening-hours check first; the booking source is only consulted
    /// when the rooms are open at all during the interval.
    pub fn is_room_free_during_interval<B: BookingBackend>(
        &self,
        room_id: i32,
        interval: &TimeInterval,
        backend: &B,
    ) -> bool {
        if !self.is_open_during_interval(interval) {
            return false;
        }

        let bookings = backend.active_bookings_for_period(room_id, interval);
        let free = !bookings
            .iter()
            .any(|booking| interval.overlaps(&booking.interval()));
        info!(
            "Room {room_id} is {} from {} to {}",
            if free { "free" } else { "booked" },
            interval.start,
            interval.finish
        );
        free
    }

    /// Builds the availability calendar for a room: the empty slot grid
    /// for the period with every active booking overlaid onto it.
    pub fn build_calendar<B: BookingBackend>(
        &self,
        room_id: i32,
        period: &TimeInterval,
        backend: &B,
    ) -> Result<Vec<Slot>, BookingError> {
        info!(
            "Creating calendar for room {room_id} from {} to {}",
            period.start, period.finish
        );
        let bookings = backend.active_bookings_for_period(room_id, period);
        let grid = build_empty_grid(room_id, period, &self.schedule)?;
        debug!("Found {} bookings for room {room_id}", bookings.len());
        overlay_bookings(grid, &bookings)
    }
}

/// Walks each booking in 30-minute blocks and marks the matching slot
/// unavailable. A block with no matching slot start means the booking is
/// off the grid (misaligned or outside the period) and is a data-integrity
/// failure, not something to ignore.
fn overlay_bookings(mut slots: Vec<Slot>, bookings: &[Booking]) -> Result<Vec<Slot>, BookingError> {
    for booking in bookings {
        let mut block_start = booking.start;
        while block_start < booking.finish {
            let slot = slots
                .iter_mut()
                .find(|slot| slot.start == block_start)
                .ok_or(BookingError::SlotAlignment(block_start))?;
            slot.available = false;
            block_start += slot_length();
        }
    }
    Ok(slots)
}
