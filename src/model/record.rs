//! Service provider record and its enumerated fields.

use super::identifiers::RecordId;
use super::signup_date::{parse_date, SignupDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ===== VendorType =====

/// Whether the provider trades alone or as a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorType {
    /// Sole trader.
    Independent,
    /// Registered business.
    Company,
}

impl VendorType {
    /// Every vendor type, in filter display order.
    pub const ALL: [VendorType; 2] = [VendorType::Independent, VendorType::Company];

    /// Label as stored in record data and shown in the filter sidebar.
    pub fn label(self) -> &'static str {
        match self {
            VendorType::Independent => "Independent",
            VendorType::Company => "Company",
        }
    }
}

impl fmt::Display for VendorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== ServiceOffering =====

/// Offering a provider can be filtered by.
///
/// Records store the offering as display text, which may be a comma-joined
/// list. Filtering compares that whole text against [`ServiceOffering::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceOffering {
    /// Domestic cleaning.
    Housekeeping,
    /// Window cleaning, stored as `Window Cleaning`.
    #[serde(rename = "Window Cleaning")]
    WindowCleaning,
    /// Car valeting, stored as `Car Valet`.
    #[serde(rename = "Car Valet")]
    CarValet,
}

impl ServiceOffering {
    /// Every offering, in filter display order.
    pub const ALL: [ServiceOffering; 3] = [
        ServiceOffering::Housekeeping,
        ServiceOffering::WindowCleaning,
        ServiceOffering::CarValet,
    ];

    /// Display text, which is also the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            ServiceOffering::Housekeeping => "Housekeeping",
            ServiceOffering::WindowCleaning => "Window Cleaning",
            ServiceOffering::CarValet => "Car Valet",
        }
    }
}

impl fmt::Display for ServiceOffering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== Status =====

/// Registration status. `Empty` is a record nobody has reviewed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Accepted onto the platform.
    Onboarded,
    /// Turned down after review.
    Rejected,
    /// Not yet reviewed; serialized as `""`.
    #[default]
    #[serde(rename = "")]
    Empty,
}

impl Status {
    /// Raw label as stored; `Empty` is the empty string.
    pub fn label(self) -> &'static str {
        match self {
            Status::Onboarded => "Onboarded",
            Status::Rejected => "Rejected",
            Status::Empty => "",
        }
    }

    /// Label for table cells, where an empty status shows as `-`.
    pub fn display_label(self) -> &'static str {
        match self {
            Status::Empty => "-",
            other => other.label(),
        }
    }
}

// ===== Record =====

/// One service provider waitlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identity; selection is keyed by it.
    pub id: RecordId,
    /// Signup email.
    pub email: String,
    /// Phone number as entered. Searched case-sensitively.
    pub phone_number: String,
    /// UK postcode as entered.
    pub postcode: String,
    /// Independent or company.
    pub vendor_type: VendorType,
    /// Offering text, possibly a comma-joined list.
    pub service_offering: String,
    /// Signup date text, `dd/mm/yyyy` or ISO. May be malformed.
    pub signup_date: String,
    /// Review status; absent means not yet reviewed.
    #[serde(default)]
    pub status: Status,
    /// Business or person name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact address when it differs from the signup email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Town or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Explicit service list for the detail view.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    /// Free-text notes from reviewers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
}

impl Record {
    /// Parsed signup date, or `None` when the stored text is malformed.
    pub fn parsed_signup_date(&self) -> Option<SignupDate> {
        parse_date(&self.signup_date)
    }

    /// Service names for the detail view.
    ///
    /// Uses the explicit `services` list when present, otherwise splits the
    /// offering text on commas. Names are trimmed and lowercased.
    pub fn service_names(&self) -> Vec<String> {
        if !self.services.is_empty() {
            return self
                .services
                .iter()
                .map(|s| s.trim().to_lowercase())
                .collect();
        }
        self.service_offering
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
