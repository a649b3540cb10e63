//! Search box keyboard handling.
//!
//! The query is applied on every keystroke; there is no submit step.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, FocusPane};

/// Handle a key while the search box has focus.
///
/// Returns `true` if the key was consumed, `false` otherwise.
///
/// # Key Bindings
/// - Printable characters: append to the query
/// - Backspace: delete the last character
/// - Ctrl+u: clear the query
/// - Enter/Esc: return focus to the table, keeping the query
pub fn handle_search_key(state: &mut AppState, key: KeyEvent) -> bool {
    if state.focus != FocusPane::Search {
        return false;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => {
            state.on_search_change(String::new());
            true
        }
        KeyCode::Char(ch) if !ctrl => {
            let mut query = state.search_query().to_string();
            query.push(ch);
            state.on_search_change(query);
            true
        }
        KeyCode::Backspace => {
            let mut query = state.search_query().to_string();
            if query.pop().is_some() {
                state.on_search_change(query);
            }
            true
        }
        KeyCode::Enter | KeyCode::Esc => {
            state.focus_table();
            true
        }
        // Let Ctrl+c and friends fall through to global bindings
        _ => false,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
