use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn pkg_dir_uses_leptos_site_root() {
    assert_eq!(pkg_dir(Path::new("target/site"), None), PathBuf::from("target/site/pkg"));
}

#[test]
fn pkg_dir_prefers_override() {
    let dir = pkg_dir(Path::new("target/site"), Some(Path::new("/srv/leadflow")));
    assert_eq!(dir, PathBuf::from("/srv/leadflow/pkg"));
}
