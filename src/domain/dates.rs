use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static DAY_PREFIX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").expect("valid day prefix pattern"));

pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Whole days from `today` to `end`. Both sides are calendar dates, so the
/// time-of-day has already been truncated away. Negative when `end` is past.
pub fn days_between(today: NaiveDate, end: NaiveDate) -> i64 {
    (end - today).num_days()
}

pub fn same_month(left: NaiveDate, right: NaiveDate) -> bool {
    left.year() == right.year() && left.month() == right.month()
}

pub fn within_week(today: NaiveDate, end: NaiveDate) -> bool {
    end >= today && end <= today + Duration::days(WEEK_WINDOW_DAYS)
}

/// Reads the calendar date a payload string names. Accepts `2024-06-10`,
/// `2024-06-10 13:00:00`, `2024-06-10T13:00:00` and RFC 3339 with an offset;
/// the date as written wins, no timezone conversion is applied.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(day);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.date_naive());
    }
    let captures = DAY_PREFIX_PATTERN.captures(trimmed)?;
    let year = captures.get(1)?.as_str().parse::<i32>().ok()?;
    let month = captures.get(2)?.as_str().parse::<u32>().ok()?;
    let day = captures.get(3)?.as_str().parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Reads a creation timestamp as a UTC instant so payloads mixing offsets
/// still order chronologically. Strings without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
}
