//! Record identifier newtype with a smart constructor.
//!
//! Selection tracking is keyed by id, so an id must never be empty.
//! The raw constructor is never exported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, opaque identity of a waitlist record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidRecordId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

// ===== Error Types =====

/// Reasons a raw id is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRecordId {
    /// The id text was empty.
    #[error("Record ID cannot be empty")]
    Empty,
}

// ===== Tests =====
