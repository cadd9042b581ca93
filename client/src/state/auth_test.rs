use super::*;
use schema::Role;

#[test]
fn default_is_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.session.is_authenticated());
}

#[test]
fn resolved_clears_loading() {
    let state = AuthState::resolved(Session::with_role(Role::Manager));
    assert!(!state.loading);
    assert!(state.session.is_manager());
}
