//! Display Formatting
//!
//! Date and time strings as stored by the server, rendered for humans.
//! None of these fail: input that cannot be parsed is shown as-is.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
];

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        // Keep the wall clock the server wrote, not the viewer's zone
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(raw).map(|dt| dt.date()))
}

/// `2025-01-05` -> `January 5, 2025`
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_date(trimmed) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// `13:30` -> `1:30 PM`, `0:05` -> `12:05 AM`
pub fn format_time(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"));
    match parsed {
        Ok(time) => time.format("%-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `2025-01-05 09:07:00` -> `01-05-2025 9:07 AM`
pub fn format_created_datetime(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_datetime(trimmed) {
        Some(dt) => dt.format("%m-%d-%Y %-I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// Compact deadline for a list row; only the parts that are set are joined
pub fn format_deadline(date: Option<&str>, time: Option<&str>) -> Option<String> {
    let parts: Vec<String> = [
        format_date(date.unwrap_or_default()),
        format_time(time.unwrap_or_default()),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();
    (!parts.is_empty()).then(|| parts.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date("2025-01-05"), "January 5, 2025");
        assert_eq!(format_date("2024-12-31 23:59:00"), "December 31, 2024");
        assert_eq!(format_date("2025-07-04T08:00:00+08:00"), "July 4, 2025");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(""), "");
        assert_eq!(format_time("0:05"), "12:05 AM");
        assert_eq!(format_time("13:30"), "1:30 PM");
        assert_eq!(format_time("12:00"), "12:00 PM");
        assert_eq!(format_time("09:45:00"), "9:45 AM");
        assert_eq!(format_time("noon"), "noon");
        assert_eq!(format_time("25:00"), "25:00");
    }

    #[test]
    fn test_format_created_datetime() {
        assert_eq!(format_created_datetime(""), "");
        assert_eq!(format_created_datetime("yesterday"), "yesterday");
        assert_eq!(format_created_datetime("2025-01-05 09:07:00"), "01-05-2025 9:07 AM");
        assert_eq!(format_created_datetime("2025-11-20 00:30:00"), "11-20-2025 12:30 AM");
        assert_eq!(format_created_datetime("2025-11-20T18:15"), "11-20-2025 6:15 PM");
    }

    #[test]
    fn test_format_deadline() {
        assert_eq!(
            format_deadline(Some("2025-01-05"), Some("13:30")).as_deref(),
            Some("January 5, 2025 | 1:30 PM")
        );
        assert_eq!(format_deadline(None, None), None);
        assert_eq!(format_deadline(Some(""), Some("  ")), None);
    }

    #[test]
    fn test_format_deadline_single_part() {
        assert_eq!(format_deadline(Some("2025-01-05"), None).as_deref(), Some("January 5, 2025"));
        assert_eq!(format_deadline(None, Some("0:05")).as_deref(), Some("12:05 AM"));
        assert_eq!(format_deadline(Some("2025-01-05"), Some("")).as_deref(), Some("January 5, 2025"));
    }
}
