use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// `D/M/YYYY` with `/`, `.` or `-` separators, at the start of the value and
/// not followed by another digit.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]{1,2})[/.\-]([0-9]{1,2})[/.\-]([0-9]{4})(?:[^0-9]|$)").unwrap()
});

/// `H:MM` right after the date, not followed by another digit.
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+([0-9]{1,2}):([0-9]{2})(?:[^0-9]|$)").unwrap());

/// Anything that starts like a time. Must then match `TIME_PATTERN` in full.
static TIME_LEAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+[0-9]{1,2}:").unwrap());

/// Parse a day-first calendar date. Anything malformed or out of range
/// yields `None`.
pub fn parse_report_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE_PATTERN.captures(text)?;
    calendar_date(&caps[1], &caps[2], &caps[3])
}

/// Parse a day-first date with an optional `H:MM` time (midnight when absent).
/// A time that is present but malformed makes the whole value `None`.
pub fn parse_report_date_time(text: &str) -> Option<NaiveDateTime> {
    let caps = DATE_PATTERN.captures(text)?;
    let date = calendar_date(&caps[1], &caps[2], &caps[3])?;
    let rest = &text[caps.get(3)?.end()..];

    let time = match TIME_PATTERN.captures(rest) {
        Some(time) => NaiveTime::from_hms_opt(time[1].parse().ok()?, time[2].parse().ok()?, 0)?,
        None if TIME_LEAD.is_match(rest) => return None,
        None => NaiveTime::MIN,
    };

    Some(date.and_time(time))
}

fn calendar_date(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}
