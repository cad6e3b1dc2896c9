//! Timestamp normalization for matched chat lines.
//!
//! Combines the date, time, and optional am/pm fragments captured by a line
//! pattern into one [`NaiveDateTime`]. Exports are day-first in practice
//! (`1/2/2024` means February 1st), so day-first formats are tried before the
//! month-first fallbacks; the fallback only fires when day-first parsing is
//! impossible (e.g. `1/13/2024`).
//!
//! Unparseable fragments yield `None` rather than an error: the row survives
//! with a null timestamp.

use chrono::NaiveDateTime;

const DAY_FIRST_12H: &[&str] = &["%d/%m/%Y %I:%M:%S %p", "%d/%m/%Y %I:%M %p"];
const MONTH_FIRST_12H: &[&str] = &["%m/%d/%Y %I:%M:%S %p", "%m/%d/%Y %I:%M %p"];

const DAY_FIRST_24H: &[&str] = &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"];
const MONTH_FIRST_24H: &[&str] = &["%m/%d/%Y %H:%M:%S", "%m/%d/%Y %H:%M"];

/// Parses a timestamp from the captured date, time, and optional am/pm
/// fragments.
///
/// # Example
///
/// ```rust
/// use chatsift::timestamp::parse_timestamp;
///
/// // Day-first: February 1st, 5:30 pm
/// let ts = parse_timestamp("1/2/2024", "5:30", Some("pm")).unwrap();
/// assert_eq!(ts.to_string(), "2024-02-01 17:30:00");
///
/// // Month-first fallback when the day slot can't be a month
/// let ts = parse_timestamp("1/13/2024", "10:00", None).unwrap();
/// assert_eq!(ts.to_string(), "2024-01-13 10:00:00");
///
/// assert!(parse_timestamp("99/99/2024", "10:00", None).is_none());
/// ```
pub fn parse_timestamp(date: &str, time: &str, ampm: Option<&str>) -> Option<NaiveDateTime> {
    match ampm {
        Some(marker) => {
            let candidate = format!("{date} {time} {}", marker.to_uppercase());
            try_formats(&candidate, DAY_FIRST_12H)
                .or_else(|| try_formats(&candidate, MONTH_FIRST_12H))
        }
        None => {
            let candidate = format!("{date} {time}");
            try_formats(&candidate, DAY_FIRST_24H)
                .or_else(|| try_formats(&candidate, MONTH_FIRST_24H))
        }
    }
}

fn try_formats(candidate: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(candidate, fmt).ok())
}
