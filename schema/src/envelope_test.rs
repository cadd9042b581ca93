use super::*;

#[test]
fn into_data_returns_payload_on_success() {
    let env: ApiEnvelope<Vec<u32>> = decode(r#"{"success":true,"data":[1,2,3]}"#).expect("decode");
    assert_eq!(env.into_data(), Ok(vec![1, 2, 3]));
}

#[test]
fn into_data_rejects_unsuccessful_envelope_with_message() {
    let env: ApiEnvelope<Vec<u32>> =
        decode(r#"{"success":false,"message":"Not allowed"}"#).expect("decode");
    assert_eq!(env.into_data(), Err(ApiError::Rejected("Not allowed".to_owned())));
}

#[test]
fn into_data_uses_legacy_msg_field() {
    let env: ApiEnvelope<serde_json::Value> =
        decode(r#"{"success":false,"msg":"Invalid credentials"}"#).expect("decode");
    assert_eq!(env.server_message(), Some("Invalid credentials"));
}

#[test]
fn into_data_flags_missing_payload() {
    let env: ApiEnvelope<Vec<u32>> = decode(r#"{"success":true}"#).expect("decode");
    assert!(matches!(env.into_data(), Err(ApiError::Malformed(_))));
}

#[test]
fn into_ack_ignores_payload() {
    let env: ApiEnvelope<serde_json::Value> = decode(r#"{"success":true}"#).expect("decode");
    assert_eq!(env.into_ack(), Ok(()));
}

#[test]
fn decode_rejects_non_json() {
    let err = decode::<serde_json::Value>("<html>").expect_err("should fail");
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn status_error_extracts_server_message() {
    let err = status_error(400, r#"{"success":false,"message":"Email already exists"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 400, message: "Email already exists".to_owned() }
    );
}

#[test]
fn status_error_tolerates_non_json_body() {
    let err = status_error(502, "Bad Gateway");
    assert_eq!(err, ApiError::Status { status: 502, message: String::new() });
}

// =============================================================
// Completed exchanges
// =============================================================

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Row {
    #[serde(rename = "_id")]
    id: String,
}

#[test]
fn unwrap_data_returns_payload_of_2xx_envelope() {
    let rows: Vec<Row> = unwrap_data(200, r#"{"success":true,"data":[{"_id":"w1"}]}"#).expect("decodes");
    assert_eq!(rows, vec![Row { id: "w1".to_owned() }]);
}

#[test]
fn unwrap_data_reports_rejection_inside_2xx() {
    let err = unwrap_data::<Vec<Row>>(200, r#"{"success":false,"message":"Not allowed"}"#).expect_err("rejected");
    assert_eq!(err, ApiError::Rejected("Not allowed".to_owned()));
}

#[test]
fn unwrap_data_flags_non_json_body() {
    let err = unwrap_data::<Vec<Row>>(200, "<html>").expect_err("malformed");
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn unwrap_data_checks_status_before_body() {
    let err = unwrap_data::<Vec<Row>>(500, r#"{"success":true,"data":[]}"#).expect_err("status");
    assert_eq!(err, ApiError::Status { status: 500, message: String::new() });
}

#[test]
fn unwrap_ack_carries_server_message_on_bad_status() {
    let err = unwrap_ack(401, r#"{"success":false,"msg":"Unauthorized"}"#).expect_err("status");
    assert_eq!(err, ApiError::Status { status: 401, message: "Unauthorized".to_owned() });
}

#[test]
fn unwrap_ack_accepts_empty_2xx_body() {
    assert_eq!(unwrap_ack(204, ""), Ok(()));
    assert_eq!(unwrap_ack(200, "  \n"), Ok(()));
    assert_eq!(unwrap_ack(200, r#"{"success":true}"#), Ok(()));
}

#[test]
fn unwrap_ack_rejects_false_envelope() {
    let err = unwrap_ack(200, r#"{"success":false,"message":"Lead not found"}"#).expect_err("rejected");
    assert_eq!(err, ApiError::Rejected("Lead not found".to_owned()));
}
