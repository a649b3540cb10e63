//! Application state and transitions.
//!
//! AppState is the single authority over the view state: draft and applied
//! filters, the search query, sort, selection, and the current page. Every
//! intent is a method that runs to completion and recomputes the matching
//! set before returning. Time is passed in as an `Instant` so the banner
//! stays testable.

use crate::model::{FilterCriteria, FilterEdit, Record, RecordId};
use crate::query::{
    clamp_page, direct_jump_pages, matching_records, next_page, paginate, previous_page,
    total_pages, RecordFilter, SortColumn, SortState, PAGE_SIZE,
};
use crate::source::RecordStore;
use crate::state::{
    Banner, DetailModalState, FilterForm, HeaderCheckbox, RecordAction, Selection, SidebarState,
};
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

// ===== AppState =====

/// Application state. Pure data plus synchronous transitions.
///
/// # State Machine
///
/// - **Query slices**: draft/applied filters, search query, sort, page.
///   Changing any slice the pipeline reads recomputes `matching`.
/// - **Selection**: a set of record ids, never pruned by filter, search,
///   sort, or page changes.
/// - **Focus**: Table ⇄ Search ⇄ Filters. Keyboard input is routed by focus.
/// - **Overlays**: detail modal and help, at most one of each.
/// - **Banner**: shown by apply, clear, and record actions; expires on tick.
///
/// # Invariants
///
/// - `1 <= current_page <= total_pages()` at all times.
/// - `cursor < visible_records().len()` whenever the page is non-empty.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only dataset.
    store: RecordStore,

    /// Draft and applied filter criteria.
    filters: FilterForm,

    /// Live search text; applies without an explicit commit.
    search_query: String,

    sort: SortState,

    /// Selected ids, independent of what is visible.
    selection: Selection,

    /// 1-based.
    current_page: usize,

    /// Store positions of every matching record, in display order.
    matching: Vec<usize>,

    /// Highlighted row within the visible page (0-based).
    cursor: usize,

    /// Which pane receives keyboard input.
    pub focus: FocusPane,

    /// Field cursor for the filter sidebar.
    pub sidebar: SidebarState,

    /// Record shown in the detail modal, if open.
    pub detail_modal: DetailModalState,

    /// Success acknowledgment shown after apply, clear, and record actions.
    pub banner: Banner,

    /// Whether the filter sidebar is drawn.
    pub filters_visible: bool,

    /// Whether the help overlay is drawn. While shown it blocks table keys.
    pub help_visible: bool,
}

impl AppState {
    /// Create state over a loaded store with default view settings:
    /// no filters, empty search, newest signups first, page 1.
    pub fn new(store: RecordStore) -> Self {
        let mut state = Self {
            store,
            filters: FilterForm::new(),
            search_query: String::new(),
            sort: SortState::default(),
            selection: Selection::new(),
            current_page: 1,
            matching: Vec::new(),
            cursor: 0,
            focus: FocusPane::Table,
            sidebar: SidebarState::new(),
            detail_modal: DetailModalState::new(),
            banner: Banner::default(),
            filters_visible: true,
            help_visible: false,
        };
        state.refresh();
        state
    }

    /// Start with a different sort.
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self.refresh();
        self
    }

    /// Use a different banner dismiss delay.
    pub fn with_banner_duration(mut self, duration: Duration) -> Self {
        self.banner = Banner::new(duration);
        self
    }

    /// Start with the filter sidebar shown or hidden.
    pub fn with_filters_visible(mut self, visible: bool) -> Self {
        self.filters_visible = visible;
        self
    }

    /// Start with a search query already entered.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.on_search_change(query);
        self
    }

    // ----- Derived data -----

    /// The loaded dataset.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Filter values as edited in the sidebar, applied or not.
    pub fn draft_filters(&self) -> &FilterCriteria {
        self.filters.draft()
    }

    /// Filter values the table is currently filtered by.
    pub fn applied_filters(&self) -> &FilterCriteria {
        self.filters.applied()
    }

    /// True when the draft differs from the applied filters.
    pub fn has_pending_filter_changes(&self) -> bool {
        self.filters.has_pending_changes()
    }

    /// Current search text.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Active sort column and direction.
    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Every selected id, including ones not on the visible page.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current page, 1-based. Always within `1..=total_pages()`.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Row cursor within the visible page, 0-based.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of records passing the applied filters and search.
    pub fn matching_count(&self) -> usize {
        self.matching.len()
    }

    /// Page count for the matching records; 1 when nothing matches.
    pub fn total_pages(&self) -> usize {
        total_pages(self.matching.len(), PAGE_SIZE)
    }

    /// Records on the current page, in display order.
    pub fn visible_records(&self) -> Vec<&Record> {
        let records = self.store.records();
        paginate(&self.matching, PAGE_SIZE, self.current_page)
            .iter()
            .map(|&i| &records[i])
            .collect()
    }

    /// Ids on the current page, in display order.
    pub fn visible_ids(&self) -> Vec<&RecordId> {
        self.visible_records().into_iter().map(|r| &r.id).collect()
    }

    /// State of the "select all" checkbox for the current page.
    pub fn header_checkbox(&self) -> HeaderCheckbox {
        self.selection.header_state(self.visible_ids())
    }

    /// True when `id` is selected, whether visible or not.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.contains(id)
    }

    /// False on page 1, where the "previous" arrow is disabled.
    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    /// False on the last page, where the "next" arrow is disabled.
    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Pages offered as direct-jump buttons.
    pub fn direct_jump_pages(&self) -> RangeInclusive<usize> {
        direct_jump_pages(self.total_pages())
    }

    /// Record under the row cursor.
    pub fn cursor_record(&self) -> Option<&Record> {
        self.visible_records().get(self.cursor).copied()
    }

    /// Record shown in the detail modal.
    pub fn detail_record(&self) -> Option<&Record> {
        self.detail_modal
            .record_id()
            .and_then(|id| self.store.get(id))
    }

    /// True while the success banner is within its dismiss delay.
    pub fn banner_visible(&self, now: Instant) -> bool {
        self.banner.is_visible(now)
    }

    // ----- Filter form -----

    /// Edit one draft field. Applied filters and the matching set are
    /// unchanged; the page resets to 1.
    pub fn on_filter_field_change(&mut self, edit: FilterEdit) {
        self.filters.edit(edit);
        self.set_page(1);
    }

    /// Commit the draft filters and acknowledge.
    ///
    /// The matching set is recomputed, the page returns to 1, and the
    /// success banner is shown. A date bound that does not parse is
    /// logged at `warn`; the filter then matches nothing until it is fixed.
    pub fn on_apply_filters(&mut self, now: Instant) {
        self.filters.apply();
        let applied = self.filters.applied();
        if RecordFilter::new(applied, "").has_invalid_date_bound() {
            warn!(
                date_start = %applied.date_start,
                date_end = %applied.date_end,
                "Unparseable date bound; date-bounded filter matches nothing"
            );
        }
        self.current_page = 1;
        self.refresh();
        self.banner.show(now);
        info!(matching = self.matching.len(), "Applied filters");
    }

    /// Reset draft and applied filters and acknowledge.
    ///
    /// The search query and selection are kept. The page returns to 1.
    pub fn on_clear_filters(&mut self, now: Instant) {
        self.filters.clear();
        self.current_page = 1;
        self.refresh();
        self.banner.show(now);
        info!(matching = self.matching.len(), "Cleared filters");
    }

    // ----- Search -----

    /// Replace the search query. Takes effect immediately and returns to page 1.
    pub fn on_search_change(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
        self.refresh();
    }

    // ----- Selection -----

    /// Select or deselect one record. Works for ids on any page.
    pub fn on_row_select(&mut self, id: &RecordId, selected: bool) {
        self.selection.set(id.clone(), selected);
    }

    /// Select or deselect every id on the visible page. Ids on other pages
    /// keep their state.
    pub fn on_select_all_visible(&mut self, selected: bool) {
        let visible: Vec<RecordId> = self.visible_ids().into_iter().cloned().collect();
        self.selection.set_all(&visible, selected);
    }

    /// Header checkbox click: a checked header clears the page, anything
    /// else selects it.
    pub fn toggle_select_all_visible(&mut self) {
        let selected = self.header_checkbox() != HeaderCheckbox::Checked;
        self.on_select_all_visible(selected);
    }

    /// Toggle the row under the cursor.
    pub fn toggle_cursor_row(&mut self) {
        if let Some(id) = self.cursor_record().map(|r| r.id.clone()) {
            self.selection.toggle(id);
        }
    }

    // ----- Sort -----

    /// Header click on a column.
    ///
    /// Clicking the active column flips its direction; any other column
    /// becomes active ascending. The current page is kept, clamped to the
    /// new page count.
    pub fn on_sort_column(&mut self, column: SortColumn) {
        self.sort = self.sort.clicked(column);
        self.refresh();
        debug!(column = %column, direction = self.sort.direction.key(), "Sort changed");
    }

    /// Header click by column key. Unknown keys are ignored.
    pub fn on_sort_key(&mut self, key: &str) {
        match SortColumn::from_key(key) {
            Some(column) => self.on_sort_column(column),
            None => debug!(key, "Ignoring unknown sort column"),
        }
    }

    // ----- Pagination -----

    /// Go to a page, clamped to `1..=total_pages()`.
    ///
    /// The row cursor returns to the top of the new page.
    pub fn on_page_change(&mut self, page: usize) {
        self.set_page(clamp_page(page, self.total_pages()));
    }

    /// "Previous" arrow; stays on page 1 at the start.
    pub fn previous_page(&mut self) {
        self.set_page(previous_page(self.current_page));
    }

    /// "Next" arrow; stays on the last page at the end.
    pub fn next_page(&mut self) {
        self.set_page(next_page(self.current_page, self.total_pages()));
    }

    // ----- Row cursor -----

    /// Move the row cursor up, stopping at the first row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the row cursor down, stopping at the last visible row.
    pub fn cursor_down(&mut self) {
        let last = self.visible_records().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    // ----- Detail modal and record actions -----

    /// Open the detail modal. Unknown ids leave it closed.
    pub fn on_open_record_detail(&mut self, id: &RecordId) {
        if self.store.get(id).is_none() {
            warn!(id = %id, "Cannot open detail for unknown record");
            return;
        }
        self.detail_modal.open(id.clone());
    }

    /// Open the detail modal for the row under the cursor. Does nothing
    /// on an empty page.
    pub fn open_cursor_detail(&mut self) {
        if let Some(id) = self.cursor_record().map(|r| r.id.clone()) {
            self.detail_modal.open(id);
        }
    }

    /// Onboard a record. See [`AppState::perform_action`].
    pub fn on_onboard(&mut self, id: &RecordId, now: Instant) {
        self.perform_action(RecordAction::Onboard, id, now);
    }

    /// Reject a record. See [`AppState::perform_action`].
    pub fn on_reject(&mut self, id: &RecordId, now: Instant) {
        self.perform_action(RecordAction::Reject, id, now);
    }

    /// Edit a record's notes. See [`AppState::perform_action`].
    pub fn on_edit_notes(&mut self, id: &RecordId, now: Instant) {
        self.perform_action(RecordAction::EditNotes, id, now);
    }

    /// Acknowledge an action: log it, close the modal, show the banner.
    /// The record itself is not modified.
    ///
    /// An id missing from the store is logged at `warn` but still
    /// acknowledged.
    pub fn perform_action(&mut self, action: RecordAction, id: &RecordId, now: Instant) {
        if self.store.get(id).is_some() {
            info!(action = %action, id = %id, "Record action");
        } else {
            warn!(action = %action, id = %id, "Record action on unknown id");
        }
        self.detail_modal.close();
        self.banner.show(now);
    }

    // ----- Focus and overlays -----

    /// Return keyboard input to the table.
    pub fn focus_table(&mut self) {
        self.focus = FocusPane::Table;
    }

    /// Send typed characters to the search box.
    pub fn focus_search(&mut self) {
        self.focus = FocusPane::Search;
    }

    /// Focus the sidebar, showing it if hidden.
    pub fn focus_filters(&mut self) {
        self.filters_visible = true;
        self.focus = FocusPane::Filters;
    }

    /// Show or hide the sidebar. Hiding it returns focus to the table.
    pub fn toggle_filters(&mut self) {
        self.filters_visible = !self.filters_visible;
        if !self.filters_visible && self.focus == FocusPane::Filters {
            self.focus = FocusPane::Table;
        }
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Advance timers. Returns true if anything changed on screen.
    ///
    /// Called by the event loop between key events; only the banner
    /// depends on time.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.banner.expire(now)
    }

    // ----- Internals -----

    fn set_page(&mut self, page: usize) {
        self.current_page = page;
        self.cursor = 0;
    }

    /// Recompute the matching set from the applied filters, search, and sort.
    fn refresh(&mut self) {
        let matching = matching_records(
            self.store.records(),
            self.filters.applied(),
            &self.search_query,
            self.sort,
        );
        self.matching = matching
            .into_iter()
            .filter_map(|r| self.store.position(&r.id))
            .collect();
        self.current_page = clamp_page(self.current_page, self.total_pages());
        self.cursor = 0;
    }
}

// ===== FocusPane =====

/// Pane that receives keyboard input.
///
/// # State Transitions
///
/// - Table → Search (`/`), Search → Table (Enter/Esc)
/// - Table → Filters (`f`), Filters → Table (Esc, or hiding the sidebar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Record table (row cursor, selection, sort, paging).
    #[default]
    Table,
    /// Search box; typed characters edit the query live.
    Search,
    /// Filter sidebar; typed characters edit the focused draft field.
    Filters,
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
