//! Render tests for the full dashboard.
//!
//! Uses ratatui TestBackend to draw the complete layout for a given state
//! and checks what an admin would see on screen.

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use waitlist_admin::model::{FilterEdit, RecordId, ServiceOffering};
use waitlist_admin::source::{RecordSource, RecordStore};
use waitlist_admin::state::{AppState, SUCCESS_MESSAGE};
use waitlist_admin::view::{render_layout, ColorConfig, Styles, EMPTY_TABLE_MESSAGE};

// ===== Test Helpers =====

/// Convert a ratatui buffer to a string representation.
///
/// Empty trailing lines are removed to keep assertions readable.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

fn render(state: &AppState, now: Instant) -> String {
    let styles = Styles::with_color_config(ColorConfig::from_env_and_args(true));
    let mut terminal = Terminal::new(TestBackend::new(150, 36)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, &styles, now))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn sample_state() -> AppState {
    AppState::new(RecordSource::Sample.load().unwrap())
}

fn scenario_state() -> AppState {
    let store = RecordSource::File("tests/fixtures/scenario_providers.json".into())
        .load()
        .unwrap();
    AppState::new(store)
}

// ===== Tests =====

#[test]
fn first_page_shows_ten_rows_and_page_controls() {
    let state = sample_state();
    let out = render(&state, Instant::now());

    let rows = out.lines().filter(|l| l.contains("[ ]") && l.contains('@')).count();
    assert_eq!(rows, 10, "one page of rows:\n{out}");
    assert!(out.contains("< [1] 2 3 >"), "jump window:\n{out}");
    assert!(out.contains("Page 1 of 3"));
    assert!(out.contains("25 providers loaded"));
}

#[test]
fn hidden_sidebar_is_not_drawn() {
    let state = scenario_state().with_filters_visible(false);
    let out = render(&state, Instant::now());
    assert!(!out.contains("Registration Status"));
    assert!(out.contains("d@example.com"));
}

#[test]
fn no_matches_shows_empty_message_and_single_page() {
    let mut state = scenario_state();
    state.on_filter_field_change(FilterEdit::ServiceOffering(Some(ServiceOffering::CarValet)));
    state.on_filter_field_change(FilterEdit::Postcode("N1".into()));
    state.on_apply_filters(Instant::now());

    let out = render(&state, Instant::now());
    assert!(out.contains(EMPTY_TABLE_MESSAGE));
    assert!(out.contains("Page 1 of 1"));
}

#[test]
fn banner_shows_then_disappears() {
    let mut state = scenario_state();
    let now = Instant::now();
    state.on_apply_filters(now);

    assert!(render(&state, now).contains(SUCCESS_MESSAGE));
    assert!(!render(&state, now + Duration::from_secs(3)).contains(SUCCESS_MESSAGE));
}

#[test]
fn detail_modal_overlays_table() {
    let mut state = scenario_state();
    state.on_open_record_detail(&RecordId::new("B").unwrap());
    let out = render(&state, Instant::now());
    assert!(out.contains("Provider Details"));
    assert!(out.contains("Contact Information"));
    assert!(out.contains("window cleaning"));
    assert!(out.contains("DETAIL"));
}

#[test]
fn help_overlay_lists_shortcuts() {
    let mut state = scenario_state();
    state.toggle_help();
    let out = render(&state, Instant::now());
    assert!(out.contains("Keyboard Shortcuts"));
    assert!(out.contains("Clear filters"));
}

#[test]
fn search_query_is_echoed() {
    let state = scenario_state().with_search("EC1");
    let out = render(&state, Instant::now());
    assert!(out.contains("EC1"));
    assert!(out.contains("1 matching"));
    assert!(!out.contains("d@example.com"));
}

#[test]
fn empty_store_renders() {
    let state = AppState::new(RecordStore::new(Vec::new()).unwrap());
    let out = render(&state, Instant::now());
    assert!(out.contains("0 providers loaded"));
    assert!(out.contains(EMPTY_TABLE_MESSAGE));
}
