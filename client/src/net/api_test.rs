use super::*;

// =============================================================
// URLs
// =============================================================

#[test]
fn api_url_joins_base_and_path() {
    let url = api_url("/lead/getalllead?page=2");
    assert!(url.starts_with(base_url()));
    assert!(url.ends_with("/lead/getalllead?page=2"));
    assert!(!url.contains("v1//"));
}

#[test]
fn verbs_render_http_names() {
    assert_eq!(Verb::Get.as_str(), "GET");
    assert_eq!(Verb::Delete.as_str(), "DELETE");
}

// =============================================================
// Response decoding
// =============================================================

fn raw(status: u16, body: &str) -> RawResponse {
    RawResponse { status, body: body.to_owned() }
}

#[test]
fn data_unwraps_successful_envelope() {
    let workers: Vec<Worker> = raw(200, r#"{"success":true,"data":[{"_id":"w1","name":"Priya"}]}"#)
        .data()
        .expect("workers decode");
    assert_eq!(workers, vec![Worker { id: "w1".to_owned(), name: "Priya".to_owned() }]);
}

#[test]
fn ack_accepts_empty_success_body() {
    assert!(raw(204, "").ack().is_ok());
    assert!(raw(200, r#"{"success":true}"#).ack().is_ok());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_stubs_report_network_error() {
    let err = futures::executor::block_on(fetch_categories()).unwrap_err();
    assert!(err.is_network());
}
