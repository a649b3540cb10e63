//! Property-based tests for the query pipeline.
//!
//! Properties Under Test:
//! - Criteria compose as an AND: filtering by merged criteria equals the
//!   intersection of filtering by each part
//! - Search is an OR across the searchable fields
//! - Sorting is stable in both directions and idempotent
//! - Concatenating every page reproduces the sequence exactly

use proptest::prelude::*;
use std::collections::HashSet;
use waitlist_admin::model::{
    FilterCriteria, Record, RecordId, ServiceOffering, Status, VendorType,
};
use waitlist_admin::query::{
    compare_records, filter_records, paginate, sort_records, total_pages, SortColumn,
    SortDirection,
};

// ===== Arbitrary Strategies =====

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![Just(Status::Onboarded), Just(Status::Rejected), Just(Status::Empty)]
}

fn arb_vendor() -> impl Strategy<Value = VendorType> {
    prop::sample::select(VendorType::ALL.to_vec())
}

fn arb_offering() -> impl Strategy<Value = ServiceOffering> {
    prop::sample::select(ServiceOffering::ALL.to_vec())
}

/// Mostly valid dates in both stored shapes, plus some garbage.
fn arb_signup_date() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (1u32..=28, 1u32..=12, 2023i32..=2024).prop_map(|(d, m, y)| format!("{d:02}/{m:02}/{y}")),
        2 => (1u32..=28, 1u32..=12, 2023i32..=2024).prop_map(|(d, m, y)| format!("{y}-{m:02}-{d:02}")),
        1 => Just("not a date".to_string()),
    ]
}

/// Fields of one record, without the id.
fn arb_fields() -> impl Strategy<Value = (String, String, String, VendorType, ServiceOffering, String, Status)> {
    (
        "[a-c]{1,3}@(mail|post)\\.com",
        "0[0-9]{3} [A-C0-9]{3}",
        prop::sample::select(vec!["SW1A 1AA", "EC1A 2BB", "N1 9GU", "LS1 4AP", "sw1a 3cc"]),
        arb_vendor(),
        arb_offering(),
        arb_signup_date(),
        arb_status(),
    )
        .prop_map(|(email, phone, postcode, vendor, offering, date, status)| {
            (email, phone, postcode.to_string(), vendor, offering, date, status)
        })
}

/// Records with unique ids `p0..pN` in source order.
fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_fields(), 0..40).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, (email, phone, postcode, vendor, offering, date, status))| Record {
                id: RecordId::new(format!("p{i}")).expect("generated ids are non-empty"),
                email,
                phone_number: phone,
                postcode,
                vendor_type: vendor,
                service_offering: offering.label().to_string(),
                signup_date: date,
                status,
                name: None,
                contact_email: None,
                location: None,
                services: Vec::new(),
                internal_notes: None,
            })
            .collect()
    })
}

/// Criteria constraining postcode, status, and dates.
fn arb_left_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::sample::select(vec!["", "sw1a", "1", "EC"]),
        prop::option::of(arb_status()),
        prop::sample::select(vec!["", "01/06/2023", "2024-01-01", "bogus"]),
    )
        .prop_map(|(postcode, status, start)| FilterCriteria {
            postcode: postcode.to_string(),
            registration_status: status,
            date_start: start.to_string(),
            ..FilterCriteria::default()
        })
}

/// Criteria constraining end date, vendor type, and offering.
fn arb_right_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::sample::select(vec!["", "31/12/2023", "2024-06-30"]),
        prop::option::of(arb_vendor()),
        prop::option::of(arb_offering()),
    )
        .prop_map(|(end, vendor, offering)| FilterCriteria {
            date_end: end.to_string(),
            vendor_type: vendor,
            service_offering: offering,
            ..FilterCriteria::default()
        })
}

fn id_set(records: &[&Record]) -> HashSet<String> {
    records.iter().map(|r| r.id.as_str().to_string()).collect()
}

fn arb_column() -> impl Strategy<Value = SortColumn> {
    prop::sample::select(SortColumn::ALL.to_vec())
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}

// ===== Properties =====

proptest! {
    #[test]
    fn criteria_compose_as_intersection(
        records in arb_records(),
        left in arb_left_criteria(),
        right in arb_right_criteria(),
    ) {
        let merged = FilterCriteria {
            postcode: left.postcode.clone(),
            registration_status: left.registration_status,
            date_start: left.date_start.clone(),
            date_end: right.date_end.clone(),
            vendor_type: right.vendor_type,
            service_offering: right.service_offering,
        };

        let both = id_set(&filter_records(&records, &merged, ""));
        let l = id_set(&filter_records(&records, &left, ""));
        let r = id_set(&filter_records(&records, &right, ""));
        let expected: HashSet<String> = l.intersection(&r).cloned().collect();
        prop_assert_eq!(both, expected);
    }

    #[test]
    fn search_matches_any_searchable_field(
        records in arb_records(),
        query in "[a-cA-C0-9@ ]{1,3}",
    ) {
        let kept = id_set(&filter_records(&records, &FilterCriteria::default(), &query));
        let q = query.to_lowercase();
        for record in &records {
            let expected = record.email.to_lowercase().contains(&q)
                || record.phone_number.contains(&q)
                || record.postcode.to_lowercase().contains(&q)
                || record.vendor_type.label().to_lowercase().contains(&q)
                || record.service_offering.to_lowercase().contains(&q);
            prop_assert_eq!(
                kept.contains(record.id.as_str()),
                expected,
                "record {} with query {:?}", record.id, query
            );
        }
    }

    #[test]
    fn filter_keeps_input_order(records in arb_records(), left in arb_left_criteria()) {
        let kept = filter_records(&records, &left, "");
        let positions: Vec<usize> = kept
            .iter()
            .map(|r| records.iter().position(|x| x.id == r.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sort_is_stable(
        records in arb_records(),
        column in arb_column(),
        direction in arb_direction(),
    ) {
        let input: Vec<&Record> = records.iter().collect();
        let sorted = sort_records(&input, column, direction);
        let position = |r: &Record| records.iter().position(|x| x.id == r.id).unwrap();

        for pair in sorted.windows(2) {
            let ordering = compare_records(pair[0], pair[1], column);
            match direction {
                SortDirection::Asc => {
                    prop_assert_ne!(ordering, std::cmp::Ordering::Greater);
                }
                SortDirection::Desc => {
                    prop_assert_ne!(ordering, std::cmp::Ordering::Less);
                }
            }
            if ordering == std::cmp::Ordering::Equal {
                prop_assert!(position(pair[0]) < position(pair[1]), "tie reordered");
            }
        }
    }

    #[test]
    fn sort_is_idempotent(
        records in arb_records(),
        column in arb_column(),
        direction in arb_direction(),
    ) {
        let input: Vec<&Record> = records.iter().collect();
        let once = sort_records(&input, column, direction);
        let twice = sort_records(&once, column, direction);
        let ids = |v: &[&Record]| v.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn pages_concatenate_to_sequence(items in prop::collection::vec(any::<u16>(), 0..100), page_size in 1usize..15) {
        let total = total_pages(items.len(), page_size);
        let joined: Vec<u16> = (1..=total)
            .flat_map(|page| paginate(&items, page_size, page).to_vec())
            .collect();
        prop_assert_eq!(joined, items.clone());
        prop_assert!(paginate(&items, page_size, total + 1).is_empty());
        prop_assert!(total >= 1);
    }
}
