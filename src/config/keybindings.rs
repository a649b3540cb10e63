//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::query::SortColumn;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// These bindings apply while the table has focus. The search box, the
/// filter sidebar, and the detail modal read raw keys first.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Terminals differ on whether shifted symbols such as `?` carry the
    /// SHIFT modifier, so a miss retries without it for non-letters.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        if let Some(action) = self.bindings.get(&key) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(c) if !c.is_alphabetic() && key.modifiers.contains(KeyModifiers::SHIFT) => {
                let unshifted = KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT);
                self.bindings.get(&unshifted).copied()
            }
            _ => None,
        }
    }

    /// Shift+letter that sorts by each column, in column order.
    pub fn sort_keys() -> [(char, SortColumn); 7] {
        [
            ('E', SortColumn::Email),
            ('P', SortColumn::PhoneNumber),
            ('C', SortColumn::Postcode),
            ('V', SortColumn::VendorType),
            ('O', SortColumn::ServiceOffering),
            ('D', SortColumn::SignupDate),
            ('S', SortColumn::Status),
        ]
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Row cursor, vim-style and arrows
        keys.bind(KeyCode::Char('k'), none, KeyAction::CursorUp);
        keys.bind(KeyCode::Up, none, KeyAction::CursorUp);
        keys.bind(KeyCode::Char('j'), none, KeyAction::CursorDown);
        keys.bind(KeyCode::Down, none, KeyAction::CursorDown);

        // Pagination
        for code in [KeyCode::Char('h'), KeyCode::Left, KeyCode::Char('['), KeyCode::PageUp] {
            keys.bind(code, none, KeyAction::PreviousPage);
        }
        for code in [KeyCode::Char('l'), KeyCode::Right, KeyCode::Char(']'), KeyCode::PageDown] {
            keys.bind(code, none, KeyAction::NextPage);
        }
        for (digit, page) in [('1', 1), ('2', 2), ('3', 3)] {
            keys.bind(KeyCode::Char(digit), none, KeyAction::JumpToPage(page));
        }

        // Selection
        keys.bind(KeyCode::Char(' '), none, KeyAction::ToggleRowSelection);
        keys.bind(KeyCode::Char('a'), none, KeyAction::ToggleSelectAllVisible);

        // Sorting
        for (letter, column) in Self::sort_keys() {
            keys.bind(KeyCode::Char(letter), KeyModifiers::SHIFT, KeyAction::SortBy(column));
        }

        // Detail and overlays
        keys.bind(KeyCode::Enter, none, KeyAction::OpenDetail);
        keys.bind(KeyCode::Esc, none, KeyAction::Close);

        // Search and filters
        keys.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('f'), none, KeyAction::FocusFilters);
        keys.bind(KeyCode::Char('F'), KeyModifiers::SHIFT, KeyAction::ToggleFilters);
        keys.bind(KeyCode::Char('a'), KeyModifiers::CONTROL, KeyAction::ApplyFilters);
        keys.bind(KeyCode::Char('x'), KeyModifiers::CONTROL, KeyAction::ClearFilters);

        // Application controls
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
