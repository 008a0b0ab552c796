use crate::error::BookingError;
use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::info;

pub const CLOSED_MARKER: &str = "CLOSED";

/// Monday-first, matching the order of the configuration strings.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

lazy_static! {
    static ref OPENING_HOURS_PATTERN: Regex =
        Regex::new(r"^\d{1,2}:\d{2}-\d{1,2}:\d{2}$").unwrap();
}

/// One weekday's operating window. Both times are set iff the day is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyHours {
    opening_time: Option<NaiveTime>,
    closing_time: Option<NaiveTime>,
}

impl DailyHours {
    fn closed() -> Self {
        Self {
            opening_time: None,
            closing_time: None,
        }
    }

    fn open(opening_time: NaiveTime, closing_time: NaiveTime) -> Self {
        Self {
            opening_time: Some(opening_time),
            closing_time: Some(closing_time),
        }
    }

    pub fn is_open(&self) -> bool {
        self.opening_time.is_some()
    }

    pub fn opening_time(&self) -> Option<NaiveTime> {
        self.opening_time
    }

    pub fn closing_time(&self) -> Option<NaiveTime> {
        self.closing_time
    }
}

/// Weekly opening-hours table. Total mapping: every weekday has an entry,
/// enforced by the fixed-size array. Built once at startup, read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct WeeklySchedule {
    days: [DailyHours; 7],
}

impl WeeklySchedule {
    /// Parses the seven per-day configuration strings, Monday through
    /// Sunday. Each entry is either `"H:MM-H:MM"` or `"CLOSED"`.
    pub fn parse(weekly_hours: &[String; 7]) -> Result<Self, BookingError> {
        let mut days = [DailyHours::closed(); 7];
        for (index, daily_hours) in weekly_hours.iter().enumerate() {
            let weekday = WEEKDAYS[index];
            if daily_hours == CLOSED_MARKER {
                info!("{weekday} is CLOSED");
                continue;
            }
            if !OPENING_HOURS_PATTERN.is_match(daily_hours) {
                return Err(BookingError::Configuration(format!(
                    "invalid opening hours format for {weekday}: {daily_hours}"
                )));
            }
            // The pattern guarantees exactly one '-'.
            let (opening, closing) = daily_hours.split_once('-').unwrap_or_default();
            let opening_time = parse_time_of_day(opening, weekday)?;
            let closing_time = parse_time_of_day(closing, weekday)?;
            if opening_time >= closing_time {
                return Err(BookingError::Configuration(format!(
                    "opening time must be before closing time for {weekday}: {daily_hours}"
                )));
            }
            info!("{weekday}: open from {opening_time} to {closing_time}");
            days[index] = DailyHours::open(opening_time, closing_time);
        }
        Ok(Self { days })
    }

    /// A week with no open day makes slot generation meaningless; checked
    /// once at startup so it never surfaces per request.
    pub fn has_open_day(&self) -> bool {
        self.days.iter().any(DailyHours::is_open)
    }

    /// Never fails: every weekday has an entry.
    pub fn hours_for(&self, weekday: Weekday) -> &DailyHours {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    /// Opening time for the instant's weekday; `None` if that day is closed.
    pub fn opening_time_for(&self, instant: NaiveDateTime) -> Option<NaiveTime> {
        self.hours_for(instant.weekday()).opening_time()
    }

    /// Closing time for the instant's weekday; `None` if that day is closed.
    pub fn closing_time_for(&self, instant: NaiveDateTime) -> Option<NaiveTime> {
        self.hours_for(instant.weekday()).closing_time()
    }
}

fn parse_time_of_day(text: &str, weekday: Weekday) -> Result<NaiveTime, BookingError> {
    // Shape is already checked against the pattern.
    let (hour, minute) = text.split_once(':').unwrap_or_default();
    let hour: u32 = hour.parse().map_err(|_| invalid_time(weekday, text))?;
    let minute: u32 = minute.parse().map_err(|_| invalid_time(weekday, text))?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| invalid_time(weekday, text))?;
    // The slot grid starts on the hour or half-hour; hours that do not
    // cannot produce an aligned grid.
    if minute != 0 && minute != 30 {
        return Err(BookingError::Configuration(format!(
            "opening hours for {weekday} must fall on the hour or half-hour: {text}"
        )));
    }
    Ok(time)
}

fn invalid_time(weekday: Weekday, text: &str) -> BookingError {
    BookingError::Configuration(format!("invalid time of day for {weekday}: {text}"))
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn week(entries: [&str; 7]) -> [String; 7] {
        entries.map(String::from)
    }

    #[test]
    fn parses_full_week() {
        let schedule = WeeklySchedule::parse(&week([
            "9:00-22:00",
            "9:00-22:00",
            "9:00-22:00",
            "9:00-22:00",
            "9:00-22:00",
            "10:30-20:00",
            "CLOSED",
        ]))
        .unwrap();

        let monday = schedule.hours_for(Weekday::Mon);
        assert!(monday.is_open());
        assert_eq!(monday.opening_time(), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(monday.closing_time(), NaiveTime::from_hms_opt(22, 0, 0));

        let saturday = schedule.hours_for(Weekday::Sat);
        assert_eq!(saturday.opening_time(), NaiveTime::from_hms_opt(10, 30, 0));

        let sunday = schedule.hours_for(Weekday::Sun);
        assert!(!sunday.is_open());
        assert_eq!(sunday.opening_time(), None);
        assert_eq!(sunday.closing_time(), None);
    }

    #[test_case("25:00-9:00"; "hour out of range")]
    #[test_case("9:00-8:00"; "closing before opening")]
    #[test_case("9:00-9:00"; "opening equals closing")]
    #[test_case("9:60-22:00"; "minute out of range")]
    #[test_case("9:15-22:00"; "opening off the half-hour grid")]
    #[test_case("9:00-21:45"; "closing off the half-hour grid")]
    #[test_case("open all day"; "not a time range")]
    #[test_case("9:00 - 22:00"; "spaces in range")]
    #[test_case("9:0-22:00"; "single digit minute")]
    #[test_case(""; "empty entry")]
    fn rejects_malformed_entries(entry: &str) {
        let result = WeeklySchedule::parse(&week([
            entry,
            "9:00-22:00",
            "9:00-22:00",
            "9:00-22:00",
            "9:00-22:00",
            "9:00-22:00",
            "CLOSED",
        ]));
        assert!(matches!(result, Err(BookingError::Configuration(_))));
    }

    #[test]
    fn fully_closed_week_is_detectable() {
        let schedule = WeeklySchedule::parse(&week(["CLOSED"; 7])).unwrap();
        assert!(!schedule.has_open_day());

        let schedule = WeeklySchedule::parse(&week([
            "CLOSED",
            "CLOSED",
            "CLOSED",
            "CLOSED",
            "CLOSED",
            "CLOSED",
            "9:00-22:00",
        ]))
        .unwrap();
        assert!(schedule.has_open_day());
    }

    #[test]
    fn single_digit_hours_are_accepted() {
        let schedule = WeeklySchedule::parse(&week([
            "8:30-12:00",
            "CLOSED",
            "CLOSED",
            "CLOSED",
            "CLOSED",
            "CLOSED",
            "CLOSED",
        ]))
        .unwrap();
        assert_eq!(
            schedule.hours_for(Weekday::Mon).opening_time(),
            NaiveTime::from_hms_opt(8, 30, 0)
        );
    }

    #[test]
    fn boundary_accessors_follow_the_instants_weekday() {
        let schedule = WeeklySchedule::parse(&week([
            "9:00-22:00",
            "CLOSED",
            "10:00-20:00",
            "9:00-22:00",
            "9:00-22:00",
            "9:00-22:00",
            "CLOSED",
        ]))
        .unwrap();

        // 2025-03-03 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        assert_eq!(
            schedule.opening_time_for(monday),
            NaiveTime::from_hms_opt(9, 0, 0)
        );
        assert_eq!(
            schedule.closing_time_for(monday),
            NaiveTime::from_hms_opt(22, 0, 0)
        );

        let tuesday = monday + chrono::Duration::days(1);
        assert_eq!(schedule.opening_time_for(tuesday), None);
        assert_eq!(schedule.closing_time_for(tuesday), None);

        let wednesday = monday + chrono::Duration::days(2);
        assert_eq!(
            schedule.opening_time_for(wednesday),
            NaiveTime::from_hms_opt(10, 0, 0)
        );
    }
}
