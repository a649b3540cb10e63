//! Filter criteria and typed edits to them.

use super::record::{ServiceOffering, Status, VendorType};

/// Multi-field filter constraints.
///
/// Every field is independent. An empty string or `None` places no
/// constraint on that field. Date bounds are kept as the literal text the
/// user entered and parsed when the filter runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the record postcode.
    pub postcode: String,
    /// Exact status match.
    pub registration_status: Option<Status>,
    /// Inclusive lower bound, `dd/mm/yyyy` or `yyyy-mm-dd`.
    pub date_start: String,
    /// Inclusive upper bound, `dd/mm/yyyy` or `yyyy-mm-dd`.
    pub date_end: String,
    /// Exact vendor type match.
    pub vendor_type: Option<VendorType>,
    /// Exact match against the whole offering text.
    pub service_offering: Option<ServiceOffering>,
}

impl FilterCriteria {
    /// True when no field constrains anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when either date bound is set.
    pub fn has_date_bound(&self) -> bool {
        !self.date_start.is_empty() || !self.date_end.is_empty()
    }

    /// Apply a single-field edit.
    pub fn apply_edit(&mut self, edit: FilterEdit) {
        match edit {
            FilterEdit::Postcode(value) => self.postcode = value,
            FilterEdit::RegistrationStatus(value) => self.registration_status = value,
            FilterEdit::DateStart(value) => self.date_start = value,
            FilterEdit::DateEnd(value) => self.date_end = value,
            FilterEdit::VendorType(value) => self.vendor_type = value,
            FilterEdit::ServiceOffering(value) => self.service_offering = value,
        }
    }
}

/// A change to exactly one filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEdit {
    /// New postcode substring.
    Postcode(String),
    /// New status choice, `None` for any.
    RegistrationStatus(Option<Status>),
    /// New lower date bound text.
    DateStart(String),
    /// New upper date bound text.
    DateEnd(String),
    /// New vendor type choice, `None` for any.
    VendorType(Option<VendorType>),
    /// New offering choice, `None` for any.
    ServiceOffering(Option<ServiceOffering>),
}

/// Identifies a filter field in the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Postcode text input.
    Postcode,
    /// Onboarded / Rejected choice.
    RegistrationStatus,
    /// Lower date bound input.
    DateStart,
    /// Upper date bound input.
    DateEnd,
    /// Independent / Company choice.
    VendorType,
    /// Offering choice.
    ServiceOffering,
}

impl FilterField {
    /// Every field, top to bottom.
    pub const ALL: [FilterField; 6] = [
        FilterField::Postcode,
        FilterField::RegistrationStatus,
        FilterField::DateStart,
        FilterField::DateEnd,
        FilterField::VendorType,
        FilterField::ServiceOffering,
    ];

    /// Sidebar caption.
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Postcode => "Postcode",
            FilterField::RegistrationStatus => "Registration Status",
            FilterField::DateStart => "Date Start",
            FilterField::DateEnd => "Date End",
            FilterField::VendorType => "Vendor Type",
            FilterField::ServiceOffering => "Service Offering",
        }
    }

    /// Whether the field takes typed text rather than a choice.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            FilterField::Postcode | FilterField::DateStart | FilterField::DateEnd
        )
    }
}

/// Step an optional choice through `None → options[0] → … → None`.
///
/// Mirrors the form's single-select checkboxes: ticking one clears the
/// others, unticking the ticked one leaves the field unconstrained.
pub fn cycle_choice<T: Copy + PartialEq>(
    current: Option<T>,
    options: &[T],
    forward: bool,
) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let position = current.and_then(|c| options.iter().position(|o| *o == c));
    if forward {
        match position {
            None => Some(options[0]),
            Some(i) if i + 1 < options.len() => Some(options[i + 1]),
            Some(_) => None,
        }
    } else {
        match position {
            None => Some(options[options.len() - 1]),
            Some(0) => None,
            Some(i) => Some(options[i - 1]),
        }
    }
}

/// Statuses offered by the registration-status filter.
pub const STATUS_CHOICES: [Status; 2] = [Status::Onboarded, Status::Rejected];
