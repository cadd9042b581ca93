use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(state.sidebar_expanded);
    assert!(!state.notifications_open);
}

#[test]
fn toggles_flip_their_flag_only() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(!state.sidebar_expanded);
    assert!(!state.notifications_open);

    state.toggle_notifications();
    state.toggle_sidebar();
    assert!(state.sidebar_expanded);
    assert!(state.notifications_open);
}
