use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("VAKYA_BIND", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Port("eighty".to_owned()));
}

#[test]
fn rejects_bad_bind() {
    let err = HostConfig::from_lookup(lookup(&[("VAKYA_BIND", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::Bind("localhost".to_owned()));
}
