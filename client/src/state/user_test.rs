use super::*;

#[test]
fn anonymous_user_has_blank_name() {
    let state = UserState::default();
    assert_eq!(state.display_name(), "");
    assert!(!state.loading);
}

#[test]
fn loaded_user_exposes_name_and_initials() {
    let state = UserState {
        user: Some(CurrentUser { name: "Priya Sharma".to_owned(), email: None }),
        loading: false,
    };
    assert_eq!(state.display_name(), "Priya Sharma");
    assert_eq!(state.avatar_initials(), "PS");
}
