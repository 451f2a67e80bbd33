use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST, port: DEFAULT_PORT, site_root: None });
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("HOST", "127.0.0.1"),
        ("SITE_ROOT", "target/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("target/site")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn rejects_bad_port() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort { var: "PORT", value: "70000".to_owned() })
    );
}

#[test]
fn rejects_bad_host() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost:3000")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid HOST: \"localhost:3000\" is not an IP address");
}

#[test]
fn from_env_reads_process_environment() {
    // Only this test touches the process environment.
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::remove_var("HOST");
        std::env::remove_var("SITE_ROOT");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);
    assert_eq!(cfg.host, DEFAULT_HOST);

    unsafe { std::env::remove_var("PORT") };
}
