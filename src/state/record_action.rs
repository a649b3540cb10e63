//! Review actions an admin can take on a single record.

use std::fmt;

/// An action from the detail modal.
///
/// Actions are acknowledged but do not change the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordAction {
    /// Accept the provider.
    Onboard,
    /// Turn the provider down.
    Reject,
    /// Open the notes for editing.
    EditNotes,
}

impl RecordAction {
    /// Actions in button order.
    pub const ALL: [RecordAction; 3] = [
        RecordAction::Onboard,
        RecordAction::Reject,
        RecordAction::EditNotes,
    ];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            RecordAction::Onboard => "Onboard",
            RecordAction::Reject => "Reject",
            RecordAction::EditNotes => "Edit Notes",
        }
    }

    /// Key that triggers the action inside the modal.
    pub fn key_hint(self) -> char {
        match self {
            RecordAction::Onboard => 'o',
            RecordAction::Reject => 'r',
            RecordAction::EditNotes => 'e',
        }
    }
}

impl fmt::Display for RecordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordAction::Onboard => "onboard",
            RecordAction::Reject => "reject",
            RecordAction::EditNotes => "edit_notes",
        };
        f.write_str(name)
    }
}
