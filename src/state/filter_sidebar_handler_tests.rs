//! Tests for the filter sidebar handler.

use super::*;
use crate::model::Status;
use crate::source::RecordStore;
use crate::test_fixtures::{ids, scenario};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn in_sidebar() -> AppState {
    let mut state = AppState::new(RecordStore::new(scenario()).unwrap());
    state.focus_filters();
    state
}

fn press(state: &mut AppState, code: KeyCode) -> bool {
    handle_filter_sidebar_key(state, key(code), Instant::now())
}

fn move_to(state: &mut AppState, target: SidebarItem) {
    while state.sidebar.focused() != target {
        press(state, KeyCode::Down);
    }
}

#[test]
fn ignored_without_focus() {
    let mut state = AppState::new(RecordStore::new(scenario()).unwrap());
    assert!(!press(&mut state, KeyCode::Char('x')));
}

#[test]
fn typing_edits_draft_postcode_only() {
    let mut state = in_sidebar();
    for ch in "sw1".chars() {
        press(&mut state, KeyCode::Char(ch));
    }
    assert_eq!(state.draft_filters().postcode, "sw1");
    assert!(state.applied_filters().is_empty());
    assert_eq!(state.matching_count(), 4);
}

#[test]
fn backspace_edits_text_field() {
    let mut state = in_sidebar();
    press(&mut state, KeyCode::Char('E'));
    press(&mut state, KeyCode::Char('C'));
    press(&mut state, KeyCode::Backspace);
    assert_eq!(state.draft_filters().postcode, "E");
}

#[test]
fn enter_on_field_applies_draft() {
    let mut state = in_sidebar();
    for ch in "sw1a".chars() {
        press(&mut state, KeyCode::Char(ch));
    }
    press(&mut state, KeyCode::Enter);
    assert_eq!(ids(state.visible_records()), vec!["A", "C"]);
}

#[test]
fn space_cycles_status_choice() {
    let mut state = in_sidebar();
    move_to(&mut state, SidebarItem::Field(FilterField::RegistrationStatus));

    press(&mut state, KeyCode::Char(' '));
    assert_eq!(state.draft_filters().registration_status, Some(Status::Onboarded));
    press(&mut state, KeyCode::Char(' '));
    assert_eq!(state.draft_filters().registration_status, Some(Status::Rejected));
    press(&mut state, KeyCode::Char(' '));
    assert_eq!(state.draft_filters().registration_status, None);
}

#[test]
fn left_cycles_backwards() {
    let mut state = in_sidebar();
    move_to(&mut state, SidebarItem::Field(FilterField::VendorType));
    press(&mut state, KeyCode::Left);
    assert_eq!(state.draft_filters().vendor_type, Some(VendorType::Company));
}

#[test]
fn letters_do_nothing_on_choice_fields() {
    let mut state = in_sidebar();
    move_to(&mut state, SidebarItem::Field(FilterField::ServiceOffering));
    assert!(press(&mut state, KeyCode::Char('x')));
    assert_eq!(state.draft_filters().service_offering, None);
}

#[test]
fn date_fields_take_typed_text() {
    let mut state = in_sidebar();
    move_to(&mut state, SidebarItem::Field(FilterField::DateEnd));
    for ch in "2024-02-01".chars() {
        press(&mut state, KeyCode::Char(ch));
    }
    press(&mut state, KeyCode::Enter);
    assert_eq!(ids(state.visible_records()), vec!["B"]);
}

#[test]
fn apply_button_commits_and_shows_banner() {
    let now = Instant::now();
    let mut state = in_sidebar();
    move_to(&mut state, SidebarItem::Field(FilterField::RegistrationStatus));
    press(&mut state, KeyCode::Right);
    move_to(&mut state, SidebarItem::Apply);
    handle_filter_sidebar_key(&mut state, key(KeyCode::Enter), now);

    assert_eq!(ids(state.visible_records()), vec!["D", "A"]);
    assert!(state.banner_visible(now));
}

#[test]
fn clear_button_resets_everything() {
    let mut state = in_sidebar();
    press(&mut state, KeyCode::Char('N'));
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.matching_count(), 1);

    move_to(&mut state, SidebarItem::Clear);
    press(&mut state, KeyCode::Enter);
    assert!(state.draft_filters().is_empty());
    assert_eq!(state.matching_count(), 4);
}

#[test]
fn esc_returns_to_table_keeping_draft() {
    let mut state = in_sidebar();
    press(&mut state, KeyCode::Char('N'));
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.focus, FocusPane::Table);
    assert_eq!(state.draft_filters().postcode, "N");
}

#[test]
fn control_keys_fall_through() {
    let mut state = in_sidebar();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(!handle_filter_sidebar_key(&mut state, ctrl_c, Instant::now()));
}
