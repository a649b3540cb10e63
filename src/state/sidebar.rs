//! Keyboard cursor over the filter sidebar.

use crate::model::FilterField;

/// A focusable item in the sidebar: the six fields, then the two buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    /// A filter input.
    Field(FilterField),
    /// The Apply button.
    Apply,
    /// The Clear button.
    Clear,
}

impl SidebarItem {
    /// Items top to bottom.
    pub const ALL: [SidebarItem; 8] = [
        SidebarItem::Field(FilterField::Postcode),
        SidebarItem::Field(FilterField::RegistrationStatus),
        SidebarItem::Field(FilterField::DateStart),
        SidebarItem::Field(FilterField::DateEnd),
        SidebarItem::Field(FilterField::VendorType),
        SidebarItem::Field(FilterField::ServiceOffering),
        SidebarItem::Apply,
        SidebarItem::Clear,
    ];
}

/// Which sidebar item has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    cursor: usize,
}

impl SidebarState {
    /// Cursor on the postcode field.
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused item.
    pub fn focused(&self) -> SidebarItem {
        SidebarItem::ALL[self.cursor.min(SidebarItem::ALL.len() - 1)]
    }

    /// Index into [`SidebarItem::ALL`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move down, wrapping from Clear back to the first field.
    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % SidebarItem::ALL.len();
    }

    /// Move up, wrapping from the first field to Clear.
    pub fn prev(&mut self) {
        self.cursor = self
            .cursor
            .checked_sub(1)
            .unwrap_or(SidebarItem::ALL.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_postcode() {
        let sidebar = SidebarState::new();
        assert_eq!(sidebar.focused(), SidebarItem::Field(FilterField::Postcode));
    }

    #[test]
    fn next_reaches_buttons_then_wraps() {
        let mut sidebar = SidebarState::new();
        for _ in 0..6 {
            sidebar.next();
        }
        assert_eq!(sidebar.focused(), SidebarItem::Apply);
        sidebar.next();
        assert_eq!(sidebar.focused(), SidebarItem::Clear);
        sidebar.next();
        assert_eq!(sidebar.cursor(), 0);
    }

    #[test]
    fn prev_wraps_to_clear() {
        let mut sidebar = SidebarState::new();
        sidebar.prev();
        assert_eq!(sidebar.focused(), SidebarItem::Clear);
    }
}
