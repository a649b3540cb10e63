//! State for the record detail modal.

use crate::model::RecordId;

/// Which record, if any, the detail modal is showing.
///
/// # Cardinality
/// - When closed: 1 state
/// - When open: one state per record id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailModalState {
    record: Option<RecordId>,
}

impl DetailModalState {
    /// Closed modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a record is on display.
    pub fn is_visible(&self) -> bool {
        self.record.is_some()
    }

    /// Id of the record on display.
    pub fn record_id(&self) -> Option<&RecordId> {
        self.record.as_ref()
    }

    /// Show `id`, replacing any record already open.
    pub fn open(&mut self, id: RecordId) {
        self.record = Some(id);
    }

    /// Hide the modal.
    pub fn close(&mut self) {
        self.record = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_close() {
        let mut modal = DetailModalState::new();
        assert!(!modal.is_visible());

        modal.open(RecordId::new("7").unwrap());
        assert!(modal.is_visible());
        assert_eq!(modal.record_id().map(RecordId::as_str), Some("7"));

        modal.close();
        assert!(!modal.is_visible());
        assert!(modal.record_id().is_none());
    }

    #[test]
    fn opening_another_record_replaces_the_first() {
        let mut modal = DetailModalState::new();
        modal.open(RecordId::new("1").unwrap());
        modal.open(RecordId::new("2").unwrap());
        assert_eq!(modal.record_id().map(RecordId::as_str), Some("2"));
    }
}
