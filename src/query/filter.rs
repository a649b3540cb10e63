//! Free-text search and multi-field filtering.
//!
//! Search is an OR across the searchable fields; criteria are an AND of
//! independent constraints. Both are evaluated by [`RecordFilter`], which
//! lowercases and parses its inputs once so per-record checks stay cheap.

use crate::model::{parse_date, FilterCriteria, Record, ServiceOffering, Status, VendorType};
use chrono::NaiveDate;

/// One end of the signup date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateBound {
    Unbounded,
    At(NaiveDate),
    /// Non-empty text that does not parse. Matches nothing.
    Invalid,
}

impl DateBound {
    fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return DateBound::Unbounded;
        }
        match parse_date(text) {
            Some(date) => DateBound::At(date.date()),
            None => DateBound::Invalid,
        }
    }
}

/// Compiled search query plus filter criteria.
#[derive(Debug, Clone)]
pub struct RecordFilter {
    /// Lowercased query. Phone numbers are compared against it as stored.
    query_lower: String,
    postcode_lower: String,
    status: Option<Status>,
    start: DateBound,
    end: DateBound,
    vendor_type: Option<VendorType>,
    service_offering: Option<ServiceOffering>,
}

impl RecordFilter {
    /// Compile `criteria` and `query`. Unparseable date text becomes a
    /// bound that matches nothing.
    pub fn new(criteria: &FilterCriteria, query: &str) -> Self {
        Self {
            query_lower: query.to_lowercase(),
            postcode_lower: criteria.postcode.to_lowercase(),
            status: criteria.registration_status,
            start: DateBound::parse(&criteria.date_start),
            end: DateBound::parse(&criteria.date_end),
            vendor_type: criteria.vendor_type,
            service_offering: criteria.service_offering,
        }
    }

    /// True when a date bound was entered but cannot be parsed.
    pub fn has_invalid_date_bound(&self) -> bool {
        self.start == DateBound::Invalid || self.end == DateBound::Invalid
    }

    /// Search stage then criteria stage.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_search(record) && self.matches_criteria(record)
    }

    /// OR across email, phone, postcode, name, vendor type and offering.
    ///
    /// The query is lowercased once. Every field is lowercased too except
    /// the phone number, which is matched as stored, so its uppercase
    /// letters never match.
    pub fn matches_search(&self, record: &Record) -> bool {
        if self.query_lower.is_empty() {
            return true;
        }
        let q = self.query_lower.as_str();
        record.email.to_lowercase().contains(q)
            || record.phone_number.contains(q)
            || record.postcode.to_lowercase().contains(q)
            || record
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(q))
            || record.vendor_type.label().to_lowercase().contains(q)
            || record.service_offering.to_lowercase().contains(q)
    }

    /// AND of every non-empty criterion.
    pub fn matches_criteria(&self, record: &Record) -> bool {
        if !self.postcode_lower.is_empty()
            && !record.postcode.to_lowercase().contains(&self.postcode_lower)
        {
            return false;
        }
        if self.status.is_some_and(|s| s != record.status) {
            return false;
        }
        if !self.matches_date_range(record) {
            return false;
        }
        if self.vendor_type.is_some_and(|v| v != record.vendor_type) {
            return false;
        }
        if self
            .service_offering
            .is_some_and(|o| o.label() != record.service_offering)
        {
            return false;
        }
        true
    }

    fn matches_date_range(&self, record: &Record) -> bool {
        if self.start == DateBound::Unbounded && self.end == DateBound::Unbounded {
            return true;
        }
        let Some(signed_up) = record.parsed_signup_date().map(|d| d.date()) else {
            return false;
        };
        let after_start = match self.start {
            DateBound::Unbounded => true,
            DateBound::At(start) => signed_up >= start,
            DateBound::Invalid => false,
        };
        let before_end = match self.end {
            DateBound::Unbounded => true,
            DateBound::At(end) => signed_up <= end,
            DateBound::Invalid => false,
        };
        after_start && before_end
    }
}

/// Records matching `query` and every constraint in `criteria`.
///
/// Input order is preserved but callers must not rely on it; ordering is
/// the sort stage's job. The input is never mutated.
pub fn filter_records<'a>(
    records: &'a [Record],
    criteria: &FilterCriteria,
    query: &str,
) -> Vec<&'a Record> {
    let filter = RecordFilter::new(criteria, query);
    records.iter().filter(|r| filter.matches(r)).collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
