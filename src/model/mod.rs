//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod filter;
pub mod identifiers;
pub mod key_action;
pub mod record;
pub mod signup_date;

// Re-export for convenience
pub use error::{AppError, SourceError};
pub use filter::{cycle_choice, FilterCriteria, FilterEdit, FilterField, STATUS_CHOICES};
pub use identifiers::{InvalidRecordId, RecordId};
pub use key_action::KeyAction;
pub use record::{Record, ServiceOffering, Status, VendorType};
pub use signup_date::{parse_date, sort_timestamp, SignupDate};
