//! Day/time label parser.
//!
//! Converts human-readable labels such as `"Tuesday 9am-12pm"` into a
//! [`DayTime`] with its occupied hour slots.
//!
//! # Format
//! `"<Weekday> <H><am|pm>-<H><am|pm>"`. The weekday is the leading word;
//! the time range is the trailing `<digits><am|pm>-<digits><am|pm>` token.
//!
//! # Clock Conversion
//! `12am` → 0, `12pm` → 12, other `am` hours unchanged, other `pm` hours + 12.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ScheduleError;
use crate::models::{DayTime, Meridiem, Weekday};

static TIME_RANGE: OnceLock<Regex> = OnceLock::new();

fn time_range_pattern() -> &'static Regex {
    TIME_RANGE.get_or_init(|| {
        Regex::new(r"(?i)\b(\d{1,2})\s*(am|pm)\s*-\s*(\d{1,2})\s*(am|pm)$")
            .expect("time range pattern is a valid regex")
    })
}

/// Parses a `"<Weekday> <H><am|pm>-<H><am|pm>"` label.
///
/// A range whose start is not before its end yields a [`DayTime`] with no
/// slots rather than an error.
///
/// # Example
///
/// ```
/// use registration_schedule::parser::parse_day_and_time;
/// use registration_schedule::models::Weekday;
///
/// let dt = parse_day_and_time("Tuesday 9am-12pm").unwrap();
/// assert_eq!(dt.day, Weekday::Tuesday);
/// assert_eq!(dt.slots.labels(), vec!["9-10", "10-11", "11-12"]);
/// ```
pub fn parse_day_and_time(label: &str) -> Result<DayTime, ScheduleError> {
    let trimmed = label.trim();

    let day_token = trimmed
        .split_whitespace()
        .next()
        .ok_or_else(|| ScheduleError::format(label, "empty label"))?;
    let day: Weekday = day_token
        .trim_end_matches(',')
        .parse()
        .map_err(|reason: String| ScheduleError::format(label, reason))?;

    let caps = time_range_pattern()
        .captures(trimmed)
        .ok_or_else(|| ScheduleError::format(label, "missing time range"))?;

    let start_hour = to_24_hour(parse_hour(label, &caps[1])?, parse_meridiem(label, &caps[2])?)
        .ok_or_else(|| ScheduleError::format(label, "start hour out of range"))?;
    let end_hour = to_24_hour(parse_hour(label, &caps[3])?, parse_meridiem(label, &caps[4])?)
        .ok_or_else(|| ScheduleError::format(label, "end hour out of range"))?;

    Ok(DayTime::new(day, start_hour, end_hour))
}

fn parse_hour(label: &str, digits: &str) -> Result<u8, ScheduleError> {
    digits
        .parse()
        .map_err(|_| ScheduleError::format(label, format!("invalid hour {digits:?}")))
}

fn parse_meridiem(label: &str, suffix: &str) -> Result<Meridiem, ScheduleError> {
    suffix
        .parse()
        .map_err(|reason: String| ScheduleError::format(label, reason))
}

/// Converts a 12-hour clock hour to 24-hour form.
///
/// Returns `None` unless `hour` is in `1..=12`.
pub fn to_24_hour(hour: u8, meridiem: Meridiem) -> Option<u8> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    Some(match (hour, meridiem) {
        (12, Meridiem::Am) => 0,
        (12, Meridiem::Pm) => 12,
        (h, Meridiem::Am) => h,
        (h, Meridiem::Pm) => h + 12,
    })
}

/// Converts a 24-hour clock hour back to its 12-hour form.
///
/// Hours are taken modulo 24, so `24` is midnight.
pub fn from_24_hour(hour: u8) -> (u8, Meridiem) {
    let hour = hour % 24;
    let meridiem = if hour < 12 { Meridiem::Am } else { Meridiem::Pm };
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    (twelve, meridiem)
}

/// Renders a 24-hour clock hour as a label hour, e.g. `13` → `"1pm"`.
pub fn format_12_hour(hour: u8) -> String {
    let (h, m) = from_24_hour(hour);
    format!("{h}{}", m.suffix())
}
