use super::*;

#[test]
fn toast_message_prefers_server_message() {
    let err = ApiError::Status { status: 404, message: "Lead not found".to_owned() };
    assert_eq!(err.toast_message("Failed to delete lead."), "Lead not found");

    let err = ApiError::Rejected("Category in use".to_owned());
    assert_eq!(err.toast_message("Failed."), "Category in use");
}

#[test]
fn toast_message_falls_back_for_blank_or_transport_errors() {
    let err = ApiError::Status { status: 500, message: "  ".to_owned() };
    assert_eq!(err.toast_message("Failed to delete lead."), "Failed to delete lead.");

    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.toast_message("Failed to add follow-up."), "Failed to add follow-up.");
}

#[test]
fn network_errors_are_classified() {
    assert!(ApiError::Network("offline".to_owned()).is_network());
    assert!(!ApiError::Malformed("missing data".to_owned()).is_network());
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 401, message: "Unauthorized".to_owned() };
    assert_eq!(err.to_string(), "request failed with status 401: Unauthorized");
}
