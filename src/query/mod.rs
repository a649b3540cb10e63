//! Query pipeline (pure): filter → sort → paginate.
//!
//! Every function here is total and side-effect free. Malformed data
//! degrades to a safe default instead of producing an error.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::{filter_records, RecordFilter};
pub use paginate::{
    clamp_page, direct_jump_pages, next_page, paginate, previous_page, total_pages,
    DIRECT_JUMP_WINDOW, PAGE_SIZE,
};
pub use sort::{
    compare_records, sort_records, sort_records_by_key, SortColumn, SortDirection, SortState,
};

use crate::model::{FilterCriteria, Record};

/// Filter then sort: every record that should appear in the table, in
/// display order, before pagination.
pub fn matching_records<'a>(
    records: &'a [Record],
    criteria: &FilterCriteria,
    query: &str,
    sort: SortState,
) -> Vec<&'a Record> {
    let filtered = filter_records(records, criteria, query);
    sort_records(&filtered, sort.column, sort.direction)
}
