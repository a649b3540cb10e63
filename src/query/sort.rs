//! Column sorting.
//!
//! Sorting is stable: records with equal keys keep their input order in
//! both directions. Text columns compare case-insensitively by code point;
//! the signup date compares by parsed timestamp with malformed dates at the
//! epoch.

use crate::model::{sort_timestamp, Record};
use std::fmt;

// ===== SortColumn =====

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    /// Signup email.
    Email,
    /// Phone number text.
    PhoneNumber,
    /// Postcode text.
    Postcode,
    /// Vendor type label.
    VendorType,
    /// Offering text.
    ServiceOffering,
    /// Signup date, by parsed timestamp.
    SignupDate,
    /// Status label; unreviewed sorts first ascending.
    Status,
}

impl SortColumn {
    /// Columns in table order.
    pub const ALL: [SortColumn; 7] = [
        SortColumn::Email,
        SortColumn::PhoneNumber,
        SortColumn::Postcode,
        SortColumn::VendorType,
        SortColumn::ServiceOffering,
        SortColumn::SignupDate,
        SortColumn::Status,
    ];

    /// Field key as it appears in the record data (`"signupDate"`, …).
    pub fn key(self) -> &'static str {
        match self {
            SortColumn::Email => "email",
            SortColumn::PhoneNumber => "phoneNumber",
            SortColumn::Postcode => "postcode",
            SortColumn::VendorType => "vendorType",
            SortColumn::ServiceOffering => "serviceOffering",
            SortColumn::SignupDate => "signupDate",
            SortColumn::Status => "status",
        }
    }

    /// Parse a field key. Unknown keys are `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Email => "Email",
            SortColumn::PhoneNumber => "Phone Number",
            SortColumn::Postcode => "Postcode",
            SortColumn::VendorType => "Vendor Type",
            SortColumn::ServiceOffering => "Service Offering",
            SortColumn::SignupDate => "Signup Date",
            SortColumn::Status => "Status",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ===== SortDirection =====

/// Sort order for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Config key: `"asc"` or `"desc"`.
    pub fn key(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Parse a config key. Anything but `asc`/`desc` is `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// Header arrow.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

// ===== SortState =====

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Column the table is ordered by.
    pub column: SortColumn,
    /// Order for that column.
    pub direction: SortDirection,
}

impl Default for SortState {
    /// Newest signups first.
    fn default() -> Self {
        Self {
            column: SortColumn::SignupDate,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Sort by `column` in `direction`.
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order.
    pub fn clicked(self, column: SortColumn) -> Self {
        if self.column == column {
            Self::new(column, self.direction.toggled())
        } else {
            Self::new(column, SortDirection::Asc)
        }
    }
}

// ===== Sorting =====

/// Per-record sort key. A single column always yields the same variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(String),
    Timestamp(i64),
}

fn sort_key(record: &Record, column: SortColumn) -> SortKey {
    let text = |s: &str| SortKey::Text(s.to_lowercase());
    match column {
        SortColumn::Email => text(&record.email),
        SortColumn::PhoneNumber => text(&record.phone_number),
        SortColumn::Postcode => text(&record.postcode),
        SortColumn::VendorType => text(record.vendor_type.label()),
        SortColumn::ServiceOffering => text(&record.service_offering),
        SortColumn::SignupDate => SortKey::Timestamp(sort_timestamp(&record.signup_date)),
        SortColumn::Status => text(record.status.label()),
    }
}

/// Sort a copy of `records` by `column` in `direction`.
pub fn sort_records<'a>(
    records: &[&'a Record],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<&'a Record> {
    let mut keyed: Vec<(SortKey, &'a Record)> =
        records.iter().map(|r| (sort_key(r, column), *r)).collect();
    // slice::sort_by is stable, and reversing the comparison keeps ties in input order
    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Asc => a.cmp(b),
        SortDirection::Desc => b.cmp(a),
    });
    keyed.into_iter().map(|(_, r)| r).collect()
}

/// Sort by a field key such as `"signupDate"`.
///
/// An unknown key is not an error: the input comes back unchanged.
pub fn sort_records_by_key<'a>(
    records: &[&'a Record],
    key: &str,
    direction: SortDirection,
) -> Vec<&'a Record> {
    match SortColumn::from_key(key) {
        Some(column) => sort_records(records, column, direction),
        None => records.to_vec(),
    }
}

/// Order two records by `column`, ascending.
///
/// Used by callers that sort indices rather than references.
pub fn compare_records(a: &Record, b: &Record, column: SortColumn) -> std::cmp::Ordering {
    sort_key(a, column).cmp(&sort_key(b, column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Status, VendorType};
    use crate::test_fixtures::{ids, record, scenario};

    fn refs(records: &[Record]) -> Vec<&Record> {
        records.iter().collect()
    }

    #[test]
    fn signup_date_descending_matches_scenario() {
        let records = scenario();
        let sorted = sort_records(&refs(&records), SortColumn::SignupDate, SortDirection::Desc);
        assert_eq!(ids(sorted), vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn signup_date_ascending_matches_scenario() {
        let records = scenario();
        let sorted = sort_records(&refs(&records), SortColumn::SignupDate, SortDirection::Asc);
        assert_eq!(ids(sorted), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn text_columns_ignore_case() {
        let mut records = scenario();
        records[0].email = "zed@example.com".into();
        records[1].email = "Alpha@example.com".into();
        records[2].email = "beta@example.com".into();
        records[3].email = "ALPHA@example.com".into();
        let sorted = sort_records(&refs(&records), SortColumn::Email, SortDirection::Asc);
        // B and D tie case-insensitively and keep input order
        assert_eq!(ids(sorted), vec!["B", "D", "C", "A"]);
    }

    #[test]
    fn ties_keep_input_order_when_descending() {
        let records = scenario();
        let sorted = sort_records(&refs(&records), SortColumn::Postcode, SortDirection::Desc);
        // SW1A (A, C) > N1 (D) > EC1A (B)
        assert_eq!(ids(sorted), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn status_sorts_empty_first_ascending() {
        let records = scenario();
        let sorted = sort_records(&refs(&records), SortColumn::Status, SortDirection::Asc);
        assert_eq!(ids(sorted), vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn vendor_type_sorts_by_label() {
        let mut records = scenario();
        records[2].vendor_type = VendorType::Company;
        let sorted = sort_records(&refs(&records), SortColumn::VendorType, SortDirection::Asc);
        assert_eq!(ids(sorted), vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn malformed_dates_sort_as_oldest() {
        let mut records = scenario();
        records.push(record("X", "N1", Status::Empty, "garbage"));
        let sorted = sort_records(&refs(&records), SortColumn::SignupDate, SortDirection::Asc);
        assert_eq!(ids(sorted)[0], "X");
    }

    #[test]
    fn mixed_date_shapes_sort_together() {
        let mut records = scenario();
        records[0].signup_date = "2024-03-01".into();
        let sorted = sort_records(&refs(&records), SortColumn::SignupDate, SortDirection::Asc);
        assert_eq!(ids(sorted), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn unknown_key_returns_input_unchanged() {
        let records = scenario();
        let input = refs(&records);
        let sorted = sort_records_by_key(&input, "favouriteColour", SortDirection::Desc);
        assert_eq!(ids(sorted), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn known_key_sorts() {
        let records = scenario();
        let sorted = sort_records_by_key(&refs(&records), "signupDate", SortDirection::Desc);
        assert_eq!(ids(sorted), vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn column_keys_round_trip() {
        for column in SortColumn::ALL {
            assert_eq!(SortColumn::from_key(column.key()), Some(column));
        }
        assert_eq!(SortColumn::from_key("SignupDate"), None);
    }

    #[test]
    fn default_sort_is_signup_date_descending() {
        let state = SortState::default();
        assert_eq!(state.column, SortColumn::SignupDate);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn clicking_active_column_flips_direction() {
        let state = SortState::default().clicked(SortColumn::SignupDate);
        assert_eq!(state.direction, SortDirection::Asc);
        let state = state.clicked(SortColumn::SignupDate);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn clicking_other_column_starts_ascending() {
        let state = SortState::new(SortColumn::Email, SortDirection::Desc).clicked(SortColumn::Postcode);
        assert_eq!(state, SortState::new(SortColumn::Postcode, SortDirection::Asc));
    }

    #[test]
    fn compare_records_orders_ascending() {
        let records = scenario();
        assert_eq!(
            compare_records(&records[1], &records[0], SortColumn::SignupDate),
            std::cmp::Ordering::Less
        );
    }
}
