use super::*;

#[test]
fn cookie_header_keeps_name_value_pairs() {
    let header = cookie_header([
        "002manager=abc; Path=/; HttpOnly",
        "token=xyz; Path=/; Secure",
    ]);
    assert_eq!(header.as_deref(), Some("002manager=abc; token=xyz"));
}

#[test]
fn cookie_header_skips_garbage() {
    assert_eq!(cookie_header(["; Path=/", "=nameless"]), None);
    assert_eq!(cookie_header(std::iter::empty()), None);
}

#[test]
fn url_joins_base_and_path() {
    let client = ApiClient::new("https://api.example.com/api/v1/", None).expect("client");
    assert_eq!(client.url(endpoints::CATEGORIES), "https://api.example.com/api/v1/category/");
    assert_eq!(client.url(&endpoints::lead_page(0)), "https://api.example.com/api/v1/lead/getalllead?page=1");
}

#[test]
fn invalid_cookie_is_rejected() {
    assert!(matches!(ApiClient::new("http://localhost", Some("bad\ncookie")), Err(CliError::InvalidHeader(_))));
}

#[tokio::test]
async fn upload_reads_file_and_guesses_mime() {
    let path = std::env::temp_dir().join(format!("leadflow-upload-{}.xlsx", std::process::id()));
    tokio::fs::write(&path, b"Full Name,Email\n").await.expect("write temp file");
    let upload = Upload::read(path.to_str().expect("utf-8 path")).await.expect("read");
    assert_eq!(upload.meta.size, 16);
    assert_eq!(upload.meta.mime, schema::bulk::XLSX_MIME);
    assert!(upload.meta.file_name.ends_with(".xlsx"));
    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn missing_upload_is_io_error() {
    let err = Upload::read("/definitely/not/here.xlsx").await.expect_err("missing");
    assert!(matches!(err, CliError::Io { .. }));
}
