//! Dashboard layout rendering.
//!
//! Title bar on top, status bar at the bottom, and between them the
//! optional filter sidebar beside the search box, table, and page controls.
//! Overlays (detail modal, help, banner) are drawn last.

use super::banner::render_banner;
use super::constants::{
    HEADER_HEIGHT, PAGE_CONTROLS_HEIGHT, SEARCH_INPUT_HEIGHT, SIDEBAR_WIDTH, STATUS_BAR_HEIGHT,
};
use super::detail_modal::render_detail_modal;
use super::help::render_help_overlay;
use super::pagination::PageControls;
use super::search_input::SearchInput;
use super::sidebar::FilterSidebar;
use super::styles::Styles;
use super::table::RecordTable;
use crate::state::{AppState, FocusPane};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Render the whole dashboard for `state` at time `now`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &Styles, now: Instant) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, vertical_chunks[0], state, styles);

    let (sidebar_area, main_area) = split_sidebar(vertical_chunks[1], state.filters_visible);
    if let Some(area) = sidebar_area {
        frame.render_widget(FilterSidebar::new(state, styles), area);
    }
    render_main(frame, main_area, state, styles);

    render_status_bar(frame, vertical_chunks[2], state, styles);

    if let Some(record) = state.detail_record() {
        render_detail_modal(frame, record, styles);
    }
    if state.help_visible {
        render_help_overlay(frame, styles);
    }
    if state.banner_visible(now) {
        render_banner(frame, styles);
    }
}

/// Split the body into (sidebar, main). The sidebar is dropped when hidden
/// or when the body is too narrow to hold it beside a usable table.
fn split_sidebar(area: Rect, filters_visible: bool) -> (Option<Rect>, Rect) {
    if !filters_visible || area.width < SIDEBAR_WIDTH * 2 {
        return (None, area);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);
    (Some(chunks[0]), chunks[1])
}

fn render_main(frame: &mut Frame, area: Rect, state: &AppState, styles: &Styles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGE_CONTROLS_HEIGHT),
        ])
        .split(area);

    frame.render_widget(
        SearchInput::new(state.search_query(), state.focus == FocusPane::Search, styles),
        chunks[0],
    );
    frame.render_widget(RecordTable::new(state, styles), chunks[1]);
    frame.render_widget(PageControls::new(state, styles), chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &Styles) {
    let line = Line::from(vec![
        Span::styled(" Waitlist Admin ", styles.title),
        Span::styled(
            format!("  {} providers loaded", state.store().len()),
            styles.muted,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &Styles) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", focus_label(state)), styles.focused_button),
        Span::styled(format!(" {}", status_hint(state)), styles.muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Name of whatever currently takes keyboard input.
pub fn focus_label(state: &AppState) -> &'static str {
    if state.detail_modal.is_visible() {
        return "DETAIL";
    }
    if state.help_visible {
        return "HELP";
    }
    match state.focus {
        FocusPane::Table => "TABLE",
        FocusPane::Search => "SEARCH",
        FocusPane::Filters => "FILTERS",
    }
}

/// Key hints for the status bar.
pub fn status_hint(state: &AppState) -> &'static str {
    if state.detail_modal.is_visible() {
        return "o onboard  r reject  e edit notes  Esc close";
    }
    if state.help_visible {
        return "Esc or ? close help";
    }
    match state.focus {
        FocusPane::Table => {
            "j/k move  Space select  Enter details  / search  f filters  ? help  q quit"
        }
        FocusPane::Search => "type to search  Ctrl+u clear  Enter/Esc done",
        FocusPane::Filters => "↑/↓ field  type or Space to edit  Enter apply  Esc done",
    }
}
