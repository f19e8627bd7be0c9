//! Unit tests for configuration loading.
//!
//! Run with: cargo test --test config_unit_test

use std::collections::HashMap;

use climate_api::config::{Config, ConfigError, Deployment, LogFormat};

fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn database_url_is_required() {
    assert!(matches!(
        config_from(&[]),
        Err(ConfigError::Missing("DATABASE_URL"))
    ));
    assert!(matches!(
        config_from(&[("DATABASE_URL", "  ")]),
        Err(ConfigError::Missing("DATABASE_URL"))
    ));
}

#[test]
fn defaults_apply_when_optional_values_absent() {
    let config = config_from(&[("DATABASE_URL", "sqlite://hawaii.sqlite?mode=ro")]).unwrap();

    assert_eq!(config.database_url, "sqlite://hawaii.sqlite?mode=ro");
    assert_eq!(config.bind_address(), "0.0.0.0:3000");
    assert_eq!(config.db_max_connections, 5);
    assert_eq!(config.db_connect_timeout_seconds, 10);
    assert_eq!(config.request_timeout_seconds, 30);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.deployment, Deployment::Local);
}

#[test]
fn malformed_numbers_fall_back_to_defaults() {
    let config = config_from(&[
        ("DATABASE_URL", "sqlite::memory:"),
        ("API_PORT", "eighty"),
        ("DB_MAX_CONNECTIONS", "-1"),
        ("REQUEST_TIMEOUT_SECONDS", "5"),
    ])
    .unwrap();

    assert_eq!(config.api_port, 3000);
    assert_eq!(config.db_max_connections, 5);
    assert_eq!(config.request_timeout_seconds, 5);

    // An empty pool can never serve a query
    let config = config_from(&[
        ("DATABASE_URL", "sqlite::memory:"),
        ("DB_MAX_CONNECTIONS", "0"),
    ])
    .unwrap();
    assert_eq!(config.db_max_connections, 5);
}

#[test]
fn deployment_and_log_format_parse_case_insensitively() {
    let config = config_from(&[
        ("DATABASE_URL", "sqlite::memory:"),
        ("DEPLOYMENT", "Production"),
        ("LOG_FORMAT", "JSON"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
    ])
    .unwrap();

    assert_eq!(config.deployment, Deployment::Prod);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.bind_address(), "127.0.0.1:8080");
}
