//! Date mentions inside message bodies.
//!
//! Listings often carry a handover or viewing date ("available from 12th May
//! 2025"). This is a different thing from the chat timestamp, so it gets its
//! own column. Recognized shapes, in precedence order:
//!
//! 1. numeric `D/M/Y` with `/`, `-`, or `.` separators (2- or 4-digit year)
//! 2. `12th May 2025` (optional ordinal, full or abbreviated month name)
//! 3. `May 12, 2025`
//! 4. Arabic month names: `12 مايو 2025`
//!
//! The first shape that matches supplies the candidate; an unparseable
//! candidate yields `None` (rendered as `"no date"`), the same as no match.
//! Numeric candidates parse day-first, falling back to month-first only when
//! the day slot cannot be a month.

use chrono::NaiveDate;
use regex::Regex;

const MONTHS_AR: &[(&str, u32)] = &[
    ("يناير", 1),
    ("فبراير", 2),
    ("مارس", 3),
    ("أبريل", 4),
    ("مايو", 5),
    ("يونيو", 6),
    ("يوليو", 7),
    ("أغسطس", 8),
    ("سبتمبر", 9),
    ("أكتوبر", 10),
    ("نوفمبر", 11),
    ("ديسمبر", 12),
];

/// Extractor for dates referenced inside message text.
pub struct DateMentionExtractor {
    numeric: Regex,
    day_month_year: Regex,
    month_day_year: Regex,
    arabic: Regex,
}

impl DateMentionExtractor {
    /// Builds the extractor.
    pub fn new() -> Self {
        Self {
            numeric: Regex::new(r"\b(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2,4})\b").unwrap(),
            day_month_year: Regex::new(
                r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?,?\s+(\d{4})\b",
            )
            .unwrap(),
            month_day_year: Regex::new(
                r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})\b",
            )
            .unwrap(),
            arabic: Regex::new(
                r"\b(\d{1,2})\s+(يناير|فبراير|مارس|أبريل|مايو|يونيو|يوليو|أغسطس|سبتمبر|أكتوبر|نوفمبر|ديسمبر)\s+(\d{4})\b",
            )
            .unwrap(),
        }
    }

    /// Returns the first date mentioned in the text, if any.
    pub fn extract(&self, text: &str) -> Option<NaiveDate> {
        if let Some(caps) = self.numeric.captures(text) {
            return numeric_date(
                group_u32(&caps, 1)?,
                group_u32(&caps, 2)?,
                group_i32(&caps, 3)?,
            );
        }

        if let Some(caps) = self.day_month_year.captures(text) {
            let day = group_u32(&caps, 1)?;
            let month = month_number(caps.get(2).map_or("", |m| m.as_str()))?;
            let year = group_i32(&caps, 3)?;
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        if let Some(caps) = self.month_day_year.captures(text) {
            let month = month_number(caps.get(1).map_or("", |m| m.as_str()))?;
            let day = group_u32(&caps, 2)?;
            let year = group_i32(&caps, 3)?;
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        if let Some(caps) = self.arabic.captures(text) {
            let day = group_u32(&caps, 1)?;
            let month = MONTHS_AR
                .iter()
                .find(|(name, _)| *name == caps.get(2).map_or("", |m| m.as_str()))
                .map(|(_, n)| *n)?;
            let year = group_i32(&caps, 3)?;
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        None
    }
}

impl Default for DateMentionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn group_u32(caps: &regex::Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx).and_then(|m| m.as_str().parse().ok())
}

fn group_i32(caps: &regex::Captures<'_>, idx: usize) -> Option<i32> {
    caps.get(idx).and_then(|m| m.as_str().parse().ok())
}

/// Day-first numeric date, with a month-first fallback when the day slot
/// cannot be a month.
fn numeric_date(first: u32, second: u32, year: i32) -> Option<NaiveDate> {
    let year = expand_year(year);
    NaiveDate::from_ymd_opt(year, second, first)
        .or_else(|| NaiveDate::from_ymd_opt(year, first, second))
}

/// Two-digit years map through the usual 69 pivot: 00-68 are 2000s,
/// 69-99 are 1900s.
fn expand_year(year: i32) -> i32 {
    if year < 100 {
        if year <= 68 { year + 2000 } else { year + 1900 }
    } else {
        year
    }
}

/// Maps an English month-name prefix to its number.
fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let number = match lower.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(number)
}
