//! Row selection keyed by record id.
//!
//! Selection survives filter, search, sort, and page changes. Ids that are
//! no longer visible stay selected until toggled off.

use crate::model::RecordId;
use std::collections::HashSet;

/// State of the header "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckbox {
    /// Nothing selected anywhere.
    Unchecked,
    /// Something is selected, but not every visible row.
    Indeterminate,
    /// The visible page is non-empty and fully selected.
    Checked,
}

/// Selected record ids.
///
/// Not tied to the visible page: ids hidden by a filter or on another page
/// stay selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<RecordId>,
}

impl Selection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `id` is selected.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids, visible or not.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Every selected id.
    pub fn ids(&self) -> &HashSet<RecordId> {
        &self.ids
    }

    /// Add or remove one id.
    pub fn set(&mut self, id: RecordId, selected: bool) {
        if selected {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Flip one id.
    pub fn toggle(&mut self, id: RecordId) {
        let selected = !self.contains(&id);
        self.set(id, selected);
    }

    /// Add or remove every id in `visible`. Ids outside it are untouched.
    pub fn set_all<'a>(
        &mut self,
        visible: impl IntoIterator<Item = &'a RecordId>,
        selected: bool,
    ) {
        for id in visible {
            self.set(id.clone(), selected);
        }
    }

    /// Header checkbox state for the given visible ids.
    pub fn header_state<'a>(
        &self,
        visible: impl IntoIterator<Item = &'a RecordId>,
    ) -> HeaderCheckbox {
        let mut any_visible = false;
        let mut all_selected = true;
        for id in visible {
            any_visible = true;
            if !self.contains(id) {
                all_selected = false;
                break;
            }
        }
        if any_visible && all_selected {
            HeaderCheckbox::Checked
        } else if !self.is_empty() {
            HeaderCheckbox::Indeterminate
        } else {
            HeaderCheckbox::Unchecked
        }
    }
}
