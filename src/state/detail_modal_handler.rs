//! Keyboard handler for the record detail modal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::state::{AppState, RecordAction};

/// Handle keyboard input when the detail modal is visible.
///
/// Returns `true` if the key was consumed by the modal, `false` otherwise.
///
/// # Key Bindings
/// - o: Onboard the record
/// - r: Reject the record
/// - e: Edit notes
/// - Esc/q/Enter: Close without acting
///
/// Every other key is swallowed so the table underneath does not move.
/// Ctrl combinations fall through, so Ctrl+c still quits.
pub fn handle_detail_modal_key(state: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    let Some(id) = state.detail_modal.record_id().cloned() else {
        return false;
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    let action = match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            state.detail_modal.close();
            return true;
        }
        KeyCode::Char(ch) => RecordAction::ALL
            .into_iter()
            .find(|action| action.key_hint() == ch),
        _ => None,
    };
    if let Some(action) = action {
        state.perform_action(action, &id, now);
    }
    true
}
