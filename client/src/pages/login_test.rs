use super::*;

#[test]
fn network_failures_get_generic_message() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(login_error_message(&err), "Something went wrong. Try again.");
}

#[test]
fn server_messages_are_surfaced() {
    let err = ApiError::Rejected("Wrong password".to_owned());
    assert_eq!(login_error_message(&err), "Login failed: Wrong password");
}

#[test]
fn blank_server_message_falls_back() {
    let err = ApiError::Status { status: 401, message: String::new() };
    assert_eq!(login_error_message(&err), "Login failed: Invalid credentials");
}
