//! Domain-level keyboard actions independent of key bindings.

use crate::query::SortColumn;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor up within the visible page. Default: k/↑
    CursorUp,
    /// Move the row cursor down within the visible page. Default: j/↓
    CursorDown,

    // Pagination
    /// Go to the previous page. Default: h/←/[
    PreviousPage,
    /// Go to the next page. Default: l/→/]
    NextPage,
    /// Jump directly to one of the first three pages. Default: 1/2/3
    JumpToPage(usize),

    // Selection
    /// Toggle selection of the record under the cursor. Default: Space
    ToggleRowSelection,
    /// Select or deselect every record on the visible page. Default: a
    ToggleSelectAllVisible,

    // Sorting
    /// Sort by a column; repeating flips the direction. Default: Shift+letter
    SortBy(SortColumn),

    // Detail modal
    /// Open the detail view for the record under the cursor. Default: Enter
    ///
    /// While the view is open it takes its own keys (o/r/e/Esc).
    OpenDetail,
    /// Close the help overlay. Default: Esc
    Close,

    // Search and filters
    /// Focus the search bar. Default: //Ctrl+f
    StartSearch,
    /// Focus the filter sidebar. Default: f
    FocusFilters,
    /// Show or hide the filter sidebar. Default: F
    ToggleFilters,
    /// Apply the draft filters. Default: Ctrl+a
    ApplyFilters,
    /// Clear draft and applied filters. Default: Ctrl+x
    ClearFilters,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_discriminates_on_column() {
        assert_ne!(
            KeyAction::SortBy(SortColumn::Email),
            KeyAction::SortBy(SortColumn::Status)
        );
        assert_eq!(
            KeyAction::SortBy(SortColumn::SignupDate),
            KeyAction::SortBy(SortColumn::SignupDate)
        );
    }

    #[test]
    fn jump_to_page_carries_page_number() {
        match KeyAction::JumpToPage(2) {
            KeyAction::JumpToPage(page) => assert_eq!(page, 2),
            other => panic!("unexpected action {other:?}"),
        }
    }
}
