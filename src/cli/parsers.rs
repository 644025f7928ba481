use crate::errors::TgsError;
use crate::types::{DeadlineRange, SortDirection, SortKey, StatusFilter, TaskStatus};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static DAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid day pattern"));

pub fn as_optional_string(value: Option<&str>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `all` disables the dimension; anything else is matched literally, so
/// statuses this build does not know about can still be selected.
pub fn parse_status_filter(raw: &str) -> Result<StatusFilter, TgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TgsError::validation("--status must not be empty"));
    }
    if trimmed == "all" {
        return Ok(StatusFilter::All);
    }
    Ok(StatusFilter::Only(TaskStatus::parse(trimmed)))
}

pub fn parse_status(raw: &str) -> Result<TaskStatus, TgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TgsError::validation("--status must not be empty"));
    }
    Ok(TaskStatus::parse(trimmed))
}

pub fn parse_deadline_range(raw: &str) -> Result<DeadlineRange, TgsError> {
    match raw.trim() {
        "all" => Ok(DeadlineRange::All),
        "overdue" => Ok(DeadlineRange::Overdue),
        "today" => Ok(DeadlineRange::Today),
        "week" => Ok(DeadlineRange::Week),
        "month" => Ok(DeadlineRange::Month),
        _ => Err(TgsError::validation(
            "--deadline must be all|overdue|today|week|month",
        )),
    }
}

pub fn parse_sort_key(raw: &str) -> Result<SortKey, TgsError> {
    match raw.trim() {
        "status" | "status_priority" => Ok(SortKey::StatusPriority),
        "created" | "created_at" => Ok(SortKey::CreatedAt),
        _ => Err(TgsError::validation("--sort must be status|created")),
    }
}

pub fn parse_direction(raw: &str) -> Result<SortDirection, TgsError> {
    match raw.trim() {
        "asc" => Ok(SortDirection::Asc),
        "desc" => Ok(SortDirection::Desc),
        _ => Err(TgsError::validation("--direction must be asc|desc")),
    }
}

pub fn parse_day_arg(flag: &str, raw: &str) -> Result<NaiveDate, TgsError> {
    let trimmed = raw.trim();
    if !DAY_PATTERN.is_match(trimmed) {
        return Err(TgsError::validation(format!(
            "{} must be a YYYY-MM-DD date",
            flag
        )));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        TgsError::validation(format!("{} is not a valid calendar date", flag))
    })
}

pub fn parse_optional_day(flag: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, TgsError> {
    raw.map(|value| parse_day_arg(flag, value)).transpose()
}

pub fn validate_window(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<(), TgsError> {
    if let (Some(from), Some(to)) = (from, to)
        && from > to
    {
        return Err(TgsError::validation("--from must not be after --to"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_all_is_absorptive() {
        assert_eq!(parse_status_filter("all").expect("parse"), StatusFilter::All);
        assert_eq!(
            parse_status_filter("on_hold").expect("parse"),
            StatusFilter::Only(TaskStatus::OnHold)
        );
        assert!(parse_status_filter(" ").is_err());
    }

    #[test]
    fn deadline_range_is_strict() {
        assert_eq!(parse_deadline_range("week").expect("parse"), DeadlineRange::Week);
        let error = parse_deadline_range("fortnight").expect_err("rejected");
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn sort_key_accepts_short_and_long_names() {
        assert_eq!(parse_sort_key("status").expect("parse"), SortKey::StatusPriority);
        assert_eq!(parse_sort_key("created_at").expect("parse"), SortKey::CreatedAt);
        assert!(parse_sort_key("name").is_err());
    }

    #[test]
    fn day_args_must_be_real_dates() {
        assert_eq!(
            parse_day_arg("--today", "2024-06-10").expect("parse"),
            NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date")
        );
        assert!(parse_day_arg("--today", "10/06/2024").is_err());
        let error = parse_day_arg("--from", "2024-02-30").expect_err("rejected");
        assert_eq!(error.message, "--from is not a valid calendar date");
    }

    #[test]
    fn window_rejects_inverted_bounds() {
        let early = NaiveDate::from_ymd_opt(2024, 6, 1);
        let late = NaiveDate::from_ymd_opt(2024, 6, 30);
        assert!(validate_window(early, late).is_ok());
        assert!(validate_window(late, early).is_err());
        assert!(validate_window(None, early).is_ok());
    }
}
