use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_site_root() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", " 8081 "), ("SPENDWISE_SITE_ROOT", "/srv/site")])).unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.site_root, PathBuf::from("/srv/site"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", ""), ("SPENDWISE_SITE_ROOT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
}

#[test]
fn invalid_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort(ref raw) if raw == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT value: \"eighty\"");

    assert!(HostConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}
