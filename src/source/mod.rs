//! Record sources.
//!
//! The dataset is loaded once at startup, either from the sample bundled
//! into the binary or from a JSON file on disk:
//! - `Sample` for the built-in demo data
//! - `File` for a JSON array of records

use crate::model::error::SourceError;
use crate::model::Record;
use std::path::{Path, PathBuf};

pub mod store;

pub use store::RecordStore;

/// Bundled sample dataset.
const SAMPLE_DATA: &str = include_str!("../../data/sample_providers.json");

/// Origin label used in errors for the bundled sample.
pub const SAMPLE_ORIGIN: &str = "bundled sample";

/// Where the record dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// The sample compiled into the binary.
    Sample,
    /// A JSON array of records on disk.
    File(PathBuf),
}

impl RecordSource {
    /// Pick a source: a path when one is given, otherwise the sample.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => RecordSource::File(path),
            None => RecordSource::Sample,
        }
    }

    /// Human-readable origin, used in logs and errors.
    pub fn origin(&self) -> String {
        match self {
            RecordSource::Sample => SAMPLE_ORIGIN.to_string(),
            RecordSource::File(path) => path.display().to_string(),
        }
    }

    /// Load and validate every record.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::FileNotFound` if the file does not exist,
    /// `SourceError::Read` for other I/O failures, `SourceError::InvalidJson`
    /// if the content is not an array of records, and
    /// `SourceError::DuplicateId` if two records share an id.
    pub fn load(&self) -> Result<RecordStore, SourceError> {
        let records = match self {
            RecordSource::Sample => parse_records(SAMPLE_DATA, SAMPLE_ORIGIN)?,
            RecordSource::File(path) => load_file(path)?,
        };
        let store = RecordStore::new(records)?;
        tracing::info!(origin = %self.origin(), count = store.len(), "Loaded records");
        Ok(store)
    }
}

fn load_file(path: &Path) -> Result<Vec<Record>, SourceError> {
    if !path.exists() {
        return Err(SourceError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content, &path.display().to_string())
}

/// Parse a JSON array of records.
///
/// # Errors
///
/// Returns `SourceError::InvalidJson` with the serde message on failure.
pub fn parse_records(json: &str, origin: &str) -> Result<Vec<Record>, SourceError> {
    serde_json::from_str(json).map_err(|e| SourceError::InvalidJson {
        origin: origin.to_string(),
        message: e.to_string(),
    })
}
