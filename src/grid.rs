use crate::align::{advance_to_next_open_day, align_to_opening_time};
use crate::error::BookingError;
use crate::interval::{slot_length, TimeInterval};
use crate::schedule::WeeklySchedule;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One 30-minute calendar cell. Created fresh per query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub room_id: i32,
    pub start: NaiveDateTime,
    pub finish: NaiveDateTime,
    pub available: bool,
}

impl Slot {
    fn new(room_id: i32, start: NaiveDateTime) -> Self {
        Self {
            room_id,
            start,
            finish: start + slot_length(),
            available: true,
        }
    }
}

/// Generates the ordered 30-minute slot sequence for a room over a period,
/// all slots initially available. Slots start on the hour or half-hour,
/// stay inside each day's opening hours and stop strictly before the
/// period's finish; a slot ending exactly at `period.finish` is the last
/// one included.
pub fn build_empty_grid(
    room_id: i32,
    period: &TimeInterval,
    schedule: &WeeklySchedule,
) -> Result<Vec<Slot>, BookingError> {
    info!(
        "Generating slots for room {room_id} from {} to {}",
        period.start, period.finish
    );
    let mut slots = Vec::new();
    let mut cursor = align_to_opening_time(period.start, schedule)?;

    while cursor < period.finish {
        // The cursor always sits on an open day after alignment.
        let closing_time = schedule.closing_time_for(cursor).ok_or_else(|| {
            BookingError::Configuration(format!("no closing time for open day {}", cursor.date()))
        })?;

        let mut emitted = 0;
        while cursor.time() < closing_time && cursor < period.finish {
            slots.push(Slot::new(room_id, cursor));
            cursor += slot_length();
            emitted += 1;
        }
        debug!("Slots generated for {}: {emitted}", cursor.date());

        cursor = advance_to_next_open_day(cursor, schedule)?;
    }

    info!("Finished slot generation, {} slots total", slots.len());
    Ok(slots)
}
