use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg =
        ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("SITE_ROOT", "dist")]))
            .unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("dist")));
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", " "), ("PORT", ""), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn from_lookup_rejects_invalid_host() {
    let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost:80")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { .. }));
}

// =============================================================================
// from_env
// =============================================================================

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_ROOT");
    }
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "4100");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.host, DEFAULT_HOST);

    unsafe { clear_server_env() };
}
