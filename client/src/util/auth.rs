//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen inside the application shell applies the same redirect rule:
//! once cookies are read, an anonymous visitor is sent to the required
//! role's login screen, and a signed-in user of the other role is sent back
//! to their own dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use schema::Role;
use schema::session::MANAGER_LOGIN_PATH;

use crate::state::auth::AuthState;

/// Where to send the visitor, or `None` if the screen may render.
///
/// `required = None` admits any signed-in role.
#[must_use]
pub fn redirect_target(state: &AuthState, required: Option<Role>) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    match (required, state.session.role()) {
        (None, Some(_)) => None,
        (None, None) => Some(MANAGER_LOGIN_PATH),
        (Some(needed), Some(role)) if role == needed => None,
        (Some(_), Some(role)) => Some(role.dashboard_path()),
        (Some(needed), None) => Some(needed.login_path()),
    }
}

/// Redirect whenever auth has loaded and the session lacks `required`.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, required: Option<Role>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some(path) = redirect_target(&state, required) {
            navigate(path, NavigateOptions::default());
        }
    });
}
