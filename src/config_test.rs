use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.site_root, None);
}

#[test]
fn reads_overrides() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("LEADFLOW_HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("LEADFLOW_SITE_ROOT", "/srv/leadflow"),
    ]))
    .unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/leadflow")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", ""), ("LEADFLOW_SITE_ROOT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn invalid_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT `eighty`");
}

#[test]
fn invalid_host_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("LEADFLOW_HOST", "not-an-ip")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "LEADFLOW_HOST", .. }));
}
