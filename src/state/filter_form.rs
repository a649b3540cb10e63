//! Draft and applied filter criteria.
//!
//! The form edits a draft; the pipeline reads the applied copy. The only
//! ways the two meet are [`FilterForm::apply`] and [`FilterForm::clear`].

use crate::model::{FilterCriteria, FilterEdit};

/// The filter form's two copies of [`FilterCriteria`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    draft: FilterCriteria,
    applied: FilterCriteria,
}

impl FilterForm {
    /// Both copies empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria as currently edited.
    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    /// Criteria the table is filtered by.
    pub fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    /// Edit one draft field. The applied criteria are untouched.
    pub fn edit(&mut self, edit: FilterEdit) {
        self.draft.apply_edit(edit);
    }

    /// Commit the draft.
    pub fn apply(&mut self) {
        self.applied = self.draft.clone();
    }

    /// Reset draft and applied criteria to empty.
    pub fn clear(&mut self) {
        self.draft = FilterCriteria::default();
        self.applied = FilterCriteria::default();
    }

    /// True when the draft differs from what is applied.
    pub fn has_pending_changes(&self) -> bool {
        self.draft != self.applied
    }
}
