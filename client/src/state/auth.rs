//! Authentication state derived from the role cookies.
//!
//! SYSTEM CONTEXT
//! ==============
//! `loading` stays true until `app::App` has read the cookies in the browser,
//! so route guards never redirect during SSR or hydration.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use schema::Session;

/// Resolved session plus a flag for whether cookies have been read yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: Session::default(), loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn resolved(session: Session) -> Self {
        Self { session, loading: false }
    }
}
