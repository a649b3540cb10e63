//! Record builders shared by unit tests.

use crate::model::{Record, RecordId, Status, VendorType};

/// Build a record with the fields tests usually care about.
pub(crate) fn record(id: &str, postcode: &str, status: Status, signup_date: &str) -> Record {
    Record {
        id: RecordId::new(id).expect("fixture ids are non-empty"),
        email: format!("{}@example.com", id.to_lowercase()),
        phone_number: "07700 900000".to_string(),
        postcode: postcode.to_string(),
        vendor_type: VendorType::Independent,
        service_offering: "Housekeeping".to_string(),
        signup_date: signup_date.to_string(),
        status,
        name: None,
        contact_email: None,
        location: None,
        services: Vec::new(),
        internal_notes: None,
    }
}

/// The four-record scenario: A, B, C, D.
///
/// | id | postcode | status    | signup     |
/// |----|----------|-----------|------------|
/// | A  | SW1A     | Onboarded | 01/03/2024 |
/// | B  | EC1A     | Rejected  | 15/01/2024 |
/// | C  | SW1A     | (empty)   | 20/02/2024 |
/// | D  | N1       | Onboarded | 10/04/2024 |
pub(crate) fn scenario() -> Vec<Record> {
    vec![
        record("A", "SW1A", Status::Onboarded, "01/03/2024"),
        record("B", "EC1A", Status::Rejected, "15/01/2024"),
        record("C", "SW1A", Status::Empty, "20/02/2024"),
        record("D", "N1", Status::Onboarded, "10/04/2024"),
    ]
}

/// `count` records with ids `r01..`, one day apart starting 01/01/2024.
pub(crate) fn numbered(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|n| {
            let day = (n - 1) % 28 + 1;
            let month = (n - 1) / 28 + 1;
            record(
                &format!("r{n:02}"),
                "LS1",
                Status::Empty,
                &format!("{day:02}/{month:02}/2024"),
            )
        })
        .collect()
}

/// Ids of a record sequence, for compact assertions.
pub(crate) fn ids<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.id.as_str()).collect()
}
