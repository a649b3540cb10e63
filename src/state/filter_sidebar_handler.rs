//! Filter sidebar keyboard handling.
//!
//! Edits go to the draft filters. Nothing reaches the table until Apply.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::model::{
    cycle_choice, FilterEdit, FilterField, ServiceOffering, VendorType, STATUS_CHOICES,
};
use crate::state::{AppState, FocusPane, SidebarItem};

/// Handle a key while the filter sidebar has focus.
///
/// Returns `true` if the key was consumed, `false` otherwise.
///
/// # Key Bindings
/// - Up/Down, Shift+Tab/Tab: move between fields and buttons (wraps)
/// - Text fields: characters append, Backspace deletes
/// - Choice fields: Space/Right cycle forward, Left cycles back
/// - Enter: apply on a field or the Apply button, clear on the Clear button
/// - Esc: return focus to the table (the draft is kept)
pub fn handle_filter_sidebar_key(state: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    if state.focus != FocusPane::Filters {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    let item = state.sidebar.focused();
    match key.code {
        KeyCode::Up | KeyCode::BackTab => state.sidebar.prev(),
        KeyCode::Down | KeyCode::Tab => state.sidebar.next(),
        KeyCode::Esc => state.focus_table(),
        KeyCode::Enter => match item {
            SidebarItem::Clear => state.on_clear_filters(now),
            SidebarItem::Apply | SidebarItem::Field(_) => state.on_apply_filters(now),
        },
        code => {
            if let SidebarItem::Field(field) = item {
                if field.is_text() {
                    edit_text_field(state, field, code);
                } else {
                    cycle_choice_field(state, field, code);
                }
            }
        }
    }
    true
}

fn edit_text_field(state: &mut AppState, field: FilterField, code: KeyCode) {
    let draft = state.draft_filters();
    let mut value = match field {
        FilterField::Postcode => draft.postcode.clone(),
        FilterField::DateStart => draft.date_start.clone(),
        FilterField::DateEnd => draft.date_end.clone(),
        _ => return,
    };
    match code {
        KeyCode::Char(ch) => value.push(ch),
        KeyCode::Backspace => {
            if value.pop().is_none() {
                return;
            }
        }
        _ => return,
    }
    let edit = match field {
        FilterField::Postcode => FilterEdit::Postcode(value),
        FilterField::DateStart => FilterEdit::DateStart(value),
        _ => FilterEdit::DateEnd(value),
    };
    state.on_filter_field_change(edit);
}

fn cycle_choice_field(state: &mut AppState, field: FilterField, code: KeyCode) {
    let forward = match code {
        KeyCode::Char(' ') | KeyCode::Right => true,
        KeyCode::Left => false,
        _ => return,
    };
    let draft = state.draft_filters();
    let edit = match field {
        FilterField::RegistrationStatus => FilterEdit::RegistrationStatus(cycle_choice(
            draft.registration_status,
            &STATUS_CHOICES,
            forward,
        )),
        FilterField::VendorType => FilterEdit::VendorType(cycle_choice(
            draft.vendor_type,
            &VendorType::ALL,
            forward,
        )),
        FilterField::ServiceOffering => FilterEdit::ServiceOffering(cycle_choice(
            draft.service_offering,
            &ServiceOffering::ALL,
            forward,
        )),
        _ => return,
    };
    state.on_filter_field_change(edit);
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_sidebar_handler_tests.rs"]
mod tests;
