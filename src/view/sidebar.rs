//! Filter sidebar widget.
//!
//! Shows the draft criteria, one field per pair of lines, followed by the
//! Apply and Clear buttons. Edits here do not touch the table until Apply.

use super::styles::Styles;
use crate::model::{FilterCriteria, FilterField};
use crate::state::{AppState, FocusPane, SidebarItem};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Value text for a field with no constraint.
pub const ANY_VALUE: &str = "Any";

/// Display value of one draft field.
pub fn field_value(criteria: &FilterCriteria, field: FilterField) -> String {
    let text = |s: &str| {
        if s.is_empty() {
            ANY_VALUE.to_string()
        } else {
            s.to_string()
        }
    };
    match field {
        FilterField::Postcode => text(&criteria.postcode),
        FilterField::DateStart => text(&criteria.date_start),
        FilterField::DateEnd => text(&criteria.date_end),
        FilterField::RegistrationStatus => criteria
            .registration_status
            .map_or(ANY_VALUE, |s| s.label())
            .to_string(),
        FilterField::VendorType => criteria
            .vendor_type
            .map_or(ANY_VALUE, |v| v.label())
            .to_string(),
        FilterField::ServiceOffering => criteria
            .service_offering
            .map_or(ANY_VALUE, |o| o.label())
            .to_string(),
    }
}

/// Input hint under the focused field.
fn field_hint(field: FilterField) -> &'static str {
    match field {
        FilterField::DateStart | FilterField::DateEnd => "dd/mm/yyyy or yyyy-mm-dd",
        f if f.is_text() => "type to edit",
        _ => "space/←/→ to change",
    }
}

/// Filter form: draft values, field hints, Apply and Clear buttons.
pub struct FilterSidebar<'a> {
    state: &'a AppState,
    styles: &'a Styles,
}

impl<'a> FilterSidebar<'a> {
    /// Sidebar over the state's draft filters.
    pub fn new(state: &'a AppState, styles: &'a Styles) -> Self {
        Self { state, styles }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let focused = self.state.focus == FocusPane::Filters;
        let current = self.state.sidebar.focused();
        let criteria = self.state.draft_filters();
        let mut lines = Vec::new();

        for item in SidebarItem::ALL {
            let is_current = focused && item == current;
            match item {
                SidebarItem::Field(field) => {
                    let marker = if is_current { "> " } else { "  " };
                    lines.push(Line::from(Span::styled(
                        format!("{marker}{}", field.label()),
                        self.styles.table_header,
                    )));
                    let value_style = if is_current {
                        self.styles.focused_button
                    } else {
                        self.styles.button
                    };
                    let mut value = vec![
                        Span::raw("  "),
                        Span::styled(format!(" {} ", field_value(criteria, field)), value_style),
                    ];
                    if is_current {
                        value.push(Span::styled(format!(" {}", field_hint(field)), self.styles.muted));
                    }
                    lines.push(Line::from(value));
                }
                SidebarItem::Apply | SidebarItem::Clear => {
                    if item == SidebarItem::Apply {
                        lines.push(Line::from(""));
                    }
                    let label = if item == SidebarItem::Apply { "Apply" } else { "Clear" };
                    let style = if is_current {
                        self.styles.focused_button
                    } else {
                        self.styles.button
                    };
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(format!("[ {label} ]"), style),
                    ]));
                }
            }
        }
        lines
    }
}

impl Widget for FilterSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == FocusPane::Filters;
        let title = if self.state.has_pending_filter_changes() {
            " Filters * "
        } else {
            " Filters "
        };
        Paragraph::new(self.lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(self.styles.border_for(focused)),
            )
            .render(area, buf);
    }
}
