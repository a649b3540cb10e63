//! Error types for the waitlist admin application.
//!
//! The query core has no failure modes of its own: malformed dates fail
//! closed, unknown sort columns are no-ops, and out-of-range pages are
//! clamped. Errors only exist at the impure edges.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error returned from `main`
//!   - [`SourceError`] - Record dataset loading failures (missing file, bad JSON, duplicate ids)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failures
//!   - [`TuiError`](crate::view::TuiError) - Terminal I/O failures
//!
//! All of these are fatal and surface before or after the event loop, never inside it.

use std::path::PathBuf;
use thiserror::Error;

use super::identifiers::RecordId;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```
/// use waitlist_admin::model::error::{AppError, SourceError};
/// use std::path::PathBuf;
///
/// let err: AppError = SourceError::FileNotFound { path: PathBuf::from("/tmp/none.json") }.into();
/// assert!(err.to_string().contains("/tmp/none.json"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The record dataset could not be loaded.
    #[error("Failed to load records: {0}")]
    Source(#[from] SourceError),

    /// The configuration file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, rendering, or teardown failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors encountered while loading the record dataset.
///
/// The dataset is read once at startup. Every variant is fatal: the
/// dashboard never runs against a partially loaded store.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The data file given with `--data` (or the config) does not exist.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use waitlist_admin::model::error::SourceError;
    ///
    /// let err = SourceError::FileNotFound { path: PathBuf::from("/tmp/missing.json") };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("Data file not found: {path}")]
    FileNotFound {
        /// Path as resolved from CLI, env, or config.
        path: PathBuf,
    },

    /// The data file exists but could not be read.
    #[error("Failed to read data file {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The data is not a JSON array of records.
    ///
    /// `origin` names where the data came from (a path or `bundled sample`).
    #[error("Invalid record data in {origin}: {message}")]
    InvalidJson {
        /// A path or `bundled sample`.
        origin: String,
        /// Decoder message, with line and column.
        message: String,
    },

    /// Two records share an id. Selection is keyed by id, so ids must be unique.
    ///
    /// ```
    /// use waitlist_admin::model::RecordId;
    /// use waitlist_admin::model::error::SourceError;
    ///
    /// let err = SourceError::DuplicateId { id: RecordId::new("7").unwrap() };
    /// assert_eq!(err.to_string(), "Duplicate record id: 7");
    /// ```
    #[error("Duplicate record id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: RecordId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_converts_into_app_error() {
        let err: AppError = SourceError::InvalidJson {
            origin: "bundled sample".into(),
            message: "expected `[`".into(),
        }
        .into();
        assert!(matches!(err, AppError::Source(_)));
        assert!(err.to_string().contains("bundled sample"));
    }

    #[test]
    fn read_error_exposes_io_source() {
        use std::error::Error as _;

        let err = SourceError::Read {
            path: PathBuf::from("/data/providers.json"),
            source: std::io::Error::other("permission denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("permission denied"));
    }
}
