//! Free-text date parsing for calendar cells.
//!
//! Follows en-US conventions: numeric dates are month/day/year. Handles
//! the layouts seen on conference calendars, with or without a leading
//! weekday and a trailing time of day. A date without a year is rejected.

use chrono::{Datelike, Month, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

fn numeric_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})\b").expect("valid regex"))
}

fn iso_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("valid regex"))
}

/// "May 3, 2025", "Sat., Mar. 14 2026", "April 1st, 2025"
fn month_first_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b([a-z]{3,9})\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})\b")
            .expect("valid regex")
    })
}

/// "3 May 2025"
fn day_first_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(\d{1,2})\s+([a-z]{3,9})\.?,?\s+(\d{4})\b").expect("valid regex")
    })
}

/// Exact layouts tried before the regex search
const LAYOUTS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%B %d %Y"];

/// Parse a calendar date cell. Returns `None` for anything that is not a real date.
pub fn parse_event_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for fmt in LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            // `%Y` also takes "25"; two-digit years go through `expand_year`
            if date.year() >= 1000 {
                return Some(date);
            }
        }
    }

    if let Some(caps) = iso_pattern().captures(text) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = numeric_pattern().captures(text) {
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let year = expand_year(&caps[3])?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    for caps in month_first_pattern().captures_iter(text) {
        if let Some(month) = month_number(&caps[1]) {
            let day: u32 = caps[2].parse().ok()?;
            let year: i32 = caps[3].parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, day);
        }
    }

    if let Some(caps) = day_first_pattern().captures(text) {
        let day: u32 = caps[1].parse().ok()?;
        let month = month_number(&caps[2])?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

/// Two-digit years: 00-49 are 20xx, 50-99 are 19xx
fn expand_year(digits: &str) -> Option<i32> {
    let year: i32 = digits.parse().ok()?;
    if digits.len() == 4 {
        Some(year)
    } else if year < 50 {
        Some(2000 + year)
    } else {
        Some(1900 + year)
    }
}

/// Month from a full or three-letter name ("Sept" is accepted too)
fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    let name = if name == "sept" { "sep" } else { name.as_str() };
    name.parse::<Month>().ok().map(|m| m.number_from_month())
}
