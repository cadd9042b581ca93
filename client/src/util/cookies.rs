//! Role-cookie access.
//!
//! SYSTEM CONTEXT
//! ==============
//! `document.cookie` is read exactly once per page load by `app::App`, which
//! turns it into a [`Session`] and provides it through context. Nothing else
//! in the client inspects cookie names.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use schema::Session;
use schema::session::expired_cookie;

/// Parse the browser's cookies into a session. Anonymous on the server.
pub fn read_session() -> Session {
    #[cfg(feature = "hydrate")]
    {
        document_cookie().map(|raw| Session::from_cookie_header(&raw)).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Session::default()
    }
}

/// `Set-Cookie`-style strings that expire every cookie the session owns.
#[must_use]
pub fn logout_assignments(session: &Session) -> Vec<String> {
    session.logout_cookie_names().iter().map(|name| expired_cookie(name)).collect()
}

/// Expire the session's cookies in the browser.
pub fn clear_session(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = html_document() else {
            return;
        };
        for assignment in logout_assignments(session) {
            if let Err(e) = doc.set_cookie(&assignment) {
                log::warn!("failed to expire cookie: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

#[cfg(feature = "hydrate")]
fn document_cookie() -> Option<String> {
    html_document()?.cookie().ok()
}
