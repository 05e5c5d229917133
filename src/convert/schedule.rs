use chrono::{NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::ConvertError;
use crate::types::{DaySchedule, OpeningHours, MILITARY_FORMAT};

/// `H:MM AM`, `HH:MM pm`, `8:00AM`.
static CLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})\s*([AaPp][Mm])$").expect("clock pattern is valid")
});

/// Split a weekly schedule into its `Day:Start - End` segments.
///
/// Empty segments (a trailing `;`, or `;;`) are dropped. Repeated days are
/// kept; deduplication happens when the schedule is assembled.
pub fn split_days(week: &str) -> Vec<&str> {
    week.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Map a day token such as `"sun"` or `"Wed"` to its weekday.
///
/// Only the seven three-letter English abbreviations are recognized, in any
/// letter case.
pub fn canonical_day(token: &str) -> Result<Weekday, ConvertError> {
    let day = match token.trim().to_ascii_lowercase().as_str() {
        "mon" => Weekday::Mon,
        "tue" => Weekday::Tue,
        "wed" => Weekday::Wed,
        "thu" => Weekday::Thu,
        "fri" => Weekday::Fri,
        "sat" => Weekday::Sat,
        "sun" => Weekday::Sun,
        _ => return Err(ConvertError::UnknownDay(token.trim().to_string())),
    };
    Ok(day)
}

fn split_segment(segment: &str) -> Result<(&str, &str), ConvertError> {
    segment
        .split_once(':')
        .ok_or_else(|| ConvertError::MissingDaySeparator(segment.to_string()))
}

/// Day named before the first `:` of a segment.
pub fn day_of_week(segment: &str) -> Result<Weekday, ConvertError> {
    let (day, _) = split_segment(segment)?;
    canonical_day(day)
}

/// The `Start - End` text after the first `:` of a segment, trimmed.
pub fn time_of_day(segment: &str) -> Result<&str, ConvertError> {
    let (_, times) = split_segment(segment)?;
    Ok(times.trim())
}

/// Split `"12:00 PM - 5:00 PM"` (or `"8:00 AM-3:00 PM"`) into start and end.
pub fn split_start_end(range: &str) -> Result<(&str, &str), ConvertError> {
    let (start, end) = range
        .split_once('-')
        .ok_or_else(|| ConvertError::MissingTimeSeparator(range.to_string()))?;
    Ok((start.trim(), end.trim()))
}

/// Parse a 12-hour clock string into a time of day.
pub fn parse_clock(clock: &str) -> Result<NaiveTime, ConvertError> {
    let invalid = || ConvertError::InvalidClock(clock.to_string());
    let captures = CLOCK.captures(clock.trim()).ok_or_else(invalid)?;

    let hour: u32 = captures[1].parse().map_err(|_| invalid())?;
    let minute: u32 = captures[2].parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) {
        return Err(invalid());
    }
    let is_pm = captures[3].eq_ignore_ascii_case("pm");

    let hour_24 = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour_24, minute, 0).ok_or_else(invalid)
}

/// Convert `"5:00 PM"` to `"17:00:00"`.
pub fn militarize(clock: &str) -> Result<String, ConvertError> {
    Ok(parse_clock(clock)?.format(MILITARY_FORMAT).to_string())
}

fn parse_segment(segment: &str) -> Result<(Weekday, OpeningHours), ConvertError> {
    let day = day_of_week(segment)?;
    let (start, end) = split_start_end(time_of_day(segment)?)?;
    let hours = OpeningHours::new(parse_clock(start)?, parse_clock(end)?);
    Ok((day, hours))
}

/// Parse a full weekly schedule such as
/// `"Sat: 8:00 AM-3:00 PM;Sun: 8:00 AM-3:00 PM;"`.
///
/// The first malformed segment fails the whole schedule. When a day is listed
/// more than once, the last listing wins.
pub fn convert_season_times(week: &str) -> Result<DaySchedule, ConvertError> {
    let mut schedule = DaySchedule::new();
    for segment in split_days(week) {
        let (day, hours) = parse_segment(segment)?;
        if let Some(previous) = schedule.insert(day, hours) {
            debug!(
                "day {} listed twice in '{}'; replacing {:?}",
                day, week, previous
            );
        }
    }
    Ok(schedule)
}
