use super::*;
use crate::data::types::Role;

// =============================================================
// screen_changed
// =============================================================

#[test]
fn initial_render_does_not_reset() {
    assert!(!screen_changed(None, Screen::Landing));
}

#[test]
fn same_screen_does_not_reset() {
    assert!(!screen_changed(Some(Screen::Login), Screen::Login));
    assert!(!screen_changed(Some(Screen::Dashboard(Some(Role::Parent))), Screen::Dashboard(Some(Role::Parent))));
}

#[test]
fn page_transition_resets() {
    assert!(screen_changed(Some(Screen::Landing), Screen::Login));
    assert!(screen_changed(Some(Screen::Login), Screen::Dashboard(Some(Role::Student))));
    assert!(screen_changed(Some(Screen::Dashboard(Some(Role::Teacher))), Screen::Landing));
}

#[test]
fn reset_off_browser_is_noop() {
    reset_to_top();
}
