//! Date utilities: local "today", period parsing, record timestamp formatting.

use chrono::{Datelike, Local, NaiveDate, TimeZone};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Local calendar date of "now" as the canonical "YYYY-MM-DD" record key.
pub fn today_str() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Format an epoch-milliseconds timestamp as local "HH:MM".
/// Falls back to "--:--" for timestamps outside the representable range.
pub fn format_time_ms(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Heading for a day group: weekday name plus "DD/MM", e.g. "Tuesday 02/01".
/// A date string that does not parse is shown as-is.
pub fn format_day_heading(date: &str, show_weekday: bool) -> String {
    match parse_date(date) {
        Some(d) if show_weekday => d.format("%A %d/%m").to_string(),
        Some(d) => d.format("%d/%m").to_string(),
        None => date.to_string(),
    }
}

/// Parse a period expression into inclusive date bounds.
///
/// Accepted forms:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `START:END` where both sides are any of the above
///
/// The error value is the offending expression, for the caller to wrap.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((start, end)) = p.split_once(':') {
        let (s, _) = single_period_bounds(start)?;
        let (_, e) = single_period_bounds(end)?;
        if s > e {
            return Err(format!("{} (start is after end)", p));
        }
        return Ok((s, e));
    }

    single_period_bounds(p)
}

fn single_period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1)
        && let Some(last) = NaiveDate::from_ymd_opt(year, 12, 31)
    {
        return Ok((first, last));
    }

    Err(p.to_string())
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // both arms are valid calendar dates
    next_month.unwrap().pred_opt().unwrap()
}
