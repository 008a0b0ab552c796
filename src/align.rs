use crate::error::BookingError;
use crate::schedule::WeeklySchedule;
use chrono::{Duration, NaiveDateTime};
use tracing::debug;

// Schedules repeat weekly: a scan that has not found an open day after a
// full week never will. The cap turns a fully-closed schedule into an
// error instead of an endless loop.
const MAX_DAY_SCAN: u32 = 7;

/// Snaps an instant to a valid operating instant.
///
/// On an open day the instant keeps its date and lands on the day's
/// opening time (unchanged if it is already there). This snaps a
/// mid-window start down, so it is only suitable for the leading edge of
/// a multi-day scan. On a closed day the scan advances to the next open
/// day at its opening time.
pub fn align_to_opening_time(
    instant: NaiveDateTime,
    schedule: &WeeklySchedule,
) -> Result<NaiveDateTime, BookingError> {
    let aligned = match schedule.opening_time_for(instant) {
        Some(opening_time) if instant.time() == opening_time => instant,
        Some(opening_time) => instant.date().and_time(opening_time),
        None => next_open_day(instant, schedule)?,
    };
    debug!("Aligned {instant} to {aligned}");
    Ok(aligned)
}

/// Always moves forward at least one calendar day, then keeps advancing
/// past closed days, landing on the first open day at its opening time.
/// Used at day-grid boundaries.
pub fn advance_to_next_open_day(
    instant: NaiveDateTime,
    schedule: &WeeklySchedule,
) -> Result<NaiveDateTime, BookingError> {
    let advanced = next_open_day(instant, schedule)?;
    debug!("Advanced {instant} to next open day: {advanced}");
    Ok(advanced)
}

fn next_open_day(
    instant: NaiveDateTime,
    schedule: &WeeklySchedule,
) -> Result<NaiveDateTime, BookingError> {
    let mut current = instant;
    for _ in 0..MAX_DAY_SCAN {
        current += Duration::days(1);
        if let Some(opening_time) = schedule.opening_time_for(current) {
            return Ok(current.date().and_time(opening_time));
        }
    }
    Err(BookingError::Configuration(
        "every weekday is closed, no opening time to align to".into(),
    ))
}
