//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::empty_line;
use super::styles::Styles;
use crate::config::KeyBindings;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
///
/// The overlay displays all keyboard shortcuts grouped by category:
/// - Table
/// - Pages
/// - Sorting
/// - Search & Filters
/// - Detail View
/// - Application
pub fn render_help_overlay(frame: &mut Frame, styles: &Styles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        styles.muted,
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn sort_keys_text() -> String {
    KeyBindings::sort_keys()
        .iter()
        .map(|(key, column)| format!("{key} {}", column.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the help content lines grouped by category.
fn build_help_content(styles: &Styles) -> Vec<Line<'static>> {
    let category = |title: &'static str| Line::from(Span::styled(title, styles.title));
    let entry = |keys: &'static str, desc: String| {
        Line::from(vec![
            Span::styled(format!("  {keys:<14}"), styles.key_hint),
            Span::raw(desc),
        ])
    };

    vec![
        category("Table"),
        entry("j/↓  k/↑", "Move row cursor".into()),
        entry("Space", "Select or deselect row".into()),
        entry("a", "Select or deselect all visible rows".into()),
        entry("Enter", "Open provider details".into()),
        empty_line(),
        category("Pages"),
        entry("h/←/[/PgUp", "Previous page".into()),
        entry("l/→/]/PgDn", "Next page".into()),
        entry("1 2 3", "Jump to page".into()),
        empty_line(),
        category("Sorting (Shift+key, repeat to flip)"),
        entry("E P C V O D S", sort_keys_text()),
        empty_line(),
        category("Search & Filters"),
        entry("/  Ctrl+f", "Search email, phone, postcode".into()),
        entry("f", "Focus filter sidebar".into()),
        entry("F", "Show or hide filter sidebar".into()),
        entry("Ctrl+a", "Apply filters".into()),
        entry("Ctrl+x", "Clear filters".into()),
        entry("Enter/Esc", "Leave search or sidebar".into()),
        empty_line(),
        category("Detail View"),
        entry("o", "Onboard".into()),
        entry("r", "Reject".into()),
        entry("e", "Edit notes".into()),
        entry("Esc/q", "Close".into()),
        empty_line(),
        category("Application"),
        entry("?", "Toggle this help".into()),
        entry("q  Ctrl+c", "Quit".into()),
    ]
}
