//! In-memory record dataset.

use crate::model::error::SourceError;
use crate::model::{Record, RecordId};
use std::collections::HashMap;

/// Records in source order with an id index.
///
/// Construction rejects duplicate ids, so every id maps to exactly one
/// record. The store is read-only after loading.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    index: HashMap<RecordId, usize>,
}

impl RecordStore {
    /// Build a store, failing on the first repeated id.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::DuplicateId` naming the repeated id.
    pub fn new(records: Vec<Record>) -> Result<Self, SourceError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), position).is_some() {
                return Err(SourceError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }
        Ok(Self { records, index })
    }

    /// Every record, in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Position of a record in source order.
    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Number of records loaded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
