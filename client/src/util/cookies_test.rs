use super::*;
use schema::Role;

#[test]
fn server_side_session_is_anonymous() {
    #[cfg(not(feature = "hydrate"))]
    assert!(!read_session().is_authenticated());
}

#[test]
fn logout_expires_token_and_worker_cookies() {
    let session = Session::from_cookie_header("token=abc; 001worker=1; theme=dark");
    assert_eq!(session.role(), Some(Role::Worker));
    let assignments = logout_assignments(&session);
    assert!(assignments.iter().any(|a| a.starts_with("token=;")));
    assert!(assignments.iter().any(|a| a.starts_with("001worker=;")));
    assert!(assignments.iter().all(|a| a.contains("expires=Thu, 01 Jan 1970 00:00:00 GMT")));
    assert!(!assignments.iter().any(|a| a.starts_with("theme=")));
}
