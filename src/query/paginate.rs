//! Page windowing and page navigation arithmetic.
//!
//! Pages are 1-based. [`paginate`] never clamps the requested page; the
//! navigation helpers do, so the controller can never hold a page outside
//! `1..=total_pages`.

use std::ops::RangeInclusive;

/// Records per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages offered as direct-jump buttons.
pub const DIRECT_JUMP_WINDOW: usize = 3;

/// `ceil(len / page_size)`, but never less than one page.
///
/// An empty result still renders as page 1 of 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// The window of `items` shown on `page`.
///
/// Covers offsets `(page-1)*page_size .. page*page_size`, clamped to the
/// slice. Page 0, a zero page size, or a page past the end yield an empty
/// window.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// "Previous" arrow: one page back, never below 1.
pub fn previous_page(current: usize) -> usize {
    current.saturating_sub(1).max(1)
}

/// "Next" arrow: one page forward, never past the last page.
pub fn next_page(current: usize, total: usize) -> usize {
    current.saturating_add(1).min(total.max(1))
}

/// Clamp a requested page into `1..=total`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Pages offered as direct-jump buttons: a fixed window starting at 1.
///
/// The window does not slide with the current page, so with more than
/// [`DIRECT_JUMP_WINDOW`] pages the later ones are only reachable with the
/// arrows.
pub fn direct_jump_pages(total: usize) -> RangeInclusive<usize> {
    1..=total.clamp(1, DIRECT_JUMP_WINDOW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{sort_records, SortColumn, SortDirection};
    use crate::test_fixtures::{ids, scenario};

    #[test]
    fn second_page_of_two() {
        let items = ["A", "B", "C", "D"];
        assert_eq!(paginate(&items, 2, 2), &["C", "D"]);
    }

    #[test]
    fn windows_after_ascending_date_sort() {
        let records = scenario();
        let refs: Vec<_> = records.iter().collect();
        let sorted = sort_records(&refs, SortColumn::SignupDate, SortDirection::Asc);
        assert_eq!(ids(paginate(&sorted, 2, 1).iter().copied()), vec!["B", "C"]);
        assert_eq!(ids(paginate(&sorted, 2, 2).iter().copied()), vec!["A", "D"]);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(paginate(&items, 10, 3), &[21, 22, 23]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 10, 0).is_empty());
        assert!(paginate(&items, 10, 2).is_empty());
        assert!(paginate(&items, 0, 1).is_empty());
        assert!(paginate(&items, 10, usize::MAX).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items: Vec<u32> = (1..=20).collect();
        assert_eq!(total_pages(items.len(), 10), 2);
        assert_eq!(paginate(&items, 10, 2).len(), 10);
        assert!(paginate(&items, 10, 3).is_empty());
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn previous_stops_at_first_page() {
        assert_eq!(previous_page(3), 2);
        assert_eq!(previous_page(1), 1);
        assert_eq!(previous_page(0), 1);
    }

    #[test]
    fn next_stops_at_last_page() {
        assert_eq!(next_page(1, 3), 2);
        assert_eq!(next_page(3, 3), 3);
        assert_eq!(next_page(1, 0), 1);
    }

    #[test]
    fn clamp_page_bounds_requests() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(2, 4), 2);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn direct_jump_window_is_fixed_at_three() {
        assert_eq!(direct_jump_pages(1), 1..=1);
        assert_eq!(direct_jump_pages(2), 1..=2);
        assert_eq!(direct_jump_pages(7), 1..=3);
        assert_eq!(direct_jump_pages(0), 1..=1);
    }
}
