//! Signup date parsing.
//!
//! Stored dates arrive as `day/month/year`; dates picked in the filter form
//! arrive as ISO `year-month-day`. Both shapes are accepted. Anything else
//! parses to `None` and callers degrade to a safe default.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// A parsed signup instant. Date-only inputs sit at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignupDate(NaiveDateTime);

impl SignupDate {
    /// Midnight at the start of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    /// Calendar date, time of day dropped.
    pub fn date(self) -> NaiveDate {
        self.0.date()
    }

    /// Milliseconds since the Unix epoch, reading the instant as UTC.
    pub fn timestamp_millis(self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }
}

/// Parse a date in either supported shape.
pub fn parse_date(text: &str) -> Option<SignupDate> {
    let text = text.trim();
    if text.contains('-') {
        parse_iso(text)
    } else if text.contains('/') {
        parse_day_month_year(text)
    } else {
        None
    }
}

/// Sort key for a stored date. Malformed dates sort as the epoch.
pub fn sort_timestamp(text: &str) -> i64 {
    parse_date(text).map_or(0, SignupDate::timestamp_millis)
}

fn parse_iso(text: &str) -> Option<SignupDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(SignupDate::from_date(date));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(SignupDate(dt.naive_local()));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(SignupDate)
}

fn parse_day_month_year(text: &str) -> Option<SignupDate> {
    let mut parts = text.split('/');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day).map(SignupDate::from_date)
}
