use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_database_url_is_set() {
    let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/attendance")])).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/attendance");
    assert_eq!(config.port, 3000);
    assert_eq!(config.db_max_connections, 5);
    assert_eq!(config.admin_registration_key, None);
    assert_eq!(config.idle_threshold_secs, 120);
    assert!(!config.cookie_secure);
    assert_eq!(config.throttle, ThrottleConfig::default());
}

#[test]
fn missing_database_url_is_an_error() {
    let err = Config::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingDatabaseUrl);
}

#[test]
fn blank_database_url_is_an_error() {
    let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingDatabaseUrl);
}

#[test]
fn unparsable_port_is_an_error() {
    let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".into()));
}

#[test]
fn overrides_are_read() {
    let config = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://x"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("ADMIN_REGISTRATION_KEY", "69420"),
        ("IDLE_THRESHOLD_SECS", "30"),
        ("COOKIE_SECURE", "yes"),
        ("LOGIN_THROTTLE_LIMIT", "3"),
        ("LOGIN_THROTTLE_WINDOW_SECS", "60"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.db_max_connections, 12);
    assert_eq!(config.admin_registration_key.as_deref(), Some("69420"));
    assert_eq!(config.idle_threshold_secs, 30);
    assert!(config.cookie_secure);
    assert_eq!(config.throttle.per_user_limit, 3);
    assert_eq!(config.throttle.per_user_window, Duration::from_secs(60));
    assert_eq!(config.throttle.global_limit, 100);
}

#[test]
fn empty_registration_key_disables_registration() {
    let config =
        Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("ADMIN_REGISTRATION_KEY", "")])).unwrap();
    assert_eq!(config.admin_registration_key, None);
}

#[test]
fn garbage_numeric_values_fall_back_to_defaults() {
    let config = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://x"),
        ("IDLE_THRESHOLD_SECS", "soon"),
        ("COOKIE_SECURE", "maybe"),
    ]))
    .unwrap();
    assert_eq!(config.idle_threshold_secs, 120);
    assert!(!config.cookie_secure);
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_truthy_values() {
    for raw in ["1", "true", "TRUE", " yes ", "on"] {
        assert_eq!(parse_bool(raw), Some(true), "{raw}");
    }
}

#[test]
fn parse_bool_falsy_values() {
    for raw in ["0", "false", "No", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "{raw}");
    }
}

#[test]
fn parse_bool_rejects_other_values() {
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("enabled"), None);
}
