use super::*;
use schema::Session;
use schema::session::{MANAGER_DASHBOARD_PATH, WORKER_DASHBOARD_PATH, WORKER_LOGIN_PATH};

fn resolved(role: Option<Role>) -> AuthState {
    AuthState::resolved(role.map(Session::with_role).unwrap_or_default())
}

#[test]
fn no_redirect_while_loading() {
    let state = AuthState::default();
    assert_eq!(redirect_target(&state, Some(Role::Manager)), None);
    assert_eq!(redirect_target(&state, None), None);
}

#[test]
fn anonymous_visitors_go_to_manager_login() {
    assert_eq!(redirect_target(&resolved(None), None), Some(MANAGER_LOGIN_PATH));
}

#[test]
fn any_role_passes_shared_screens() {
    assert_eq!(redirect_target(&resolved(Some(Role::Worker)), None), None);
    assert_eq!(redirect_target(&resolved(Some(Role::Manager)), None), None);
}

#[test]
fn wrong_role_goes_back_to_own_dashboard() {
    assert_eq!(redirect_target(&resolved(Some(Role::Worker)), Some(Role::Manager)), Some(WORKER_DASHBOARD_PATH));
    assert_eq!(redirect_target(&resolved(Some(Role::Manager)), Some(Role::Worker)), Some(MANAGER_DASHBOARD_PATH));
}

#[test]
fn anonymous_visitor_goes_to_required_login() {
    assert_eq!(redirect_target(&resolved(None), Some(Role::Worker)), Some(WORKER_LOGIN_PATH));
    assert_eq!(redirect_target(&resolved(None), Some(Role::Manager)), Some(MANAGER_LOGIN_PATH));
}

#[test]
fn matching_role_is_admitted() {
    assert_eq!(redirect_target(&resolved(Some(Role::Manager)), Some(Role::Manager)), None);
}
