//! Unit tests for configuration loading.
//!
//! Loading reads the process environment, so every test here is marked
//! `#[serial]` and scrubs `MICROBLOG__*` variables before and after.

use std::env;

use microblog::config::{self, AppConfig, Validate};
use serial_test::serial;

/// Remove every override this suite might have set.
fn clean_env_vars() {
    let keys: Vec<String> = env::vars()
        .filter(|(k, _)| k.starts_with("MICROBLOG"))
        .map(|(k, _)| k)
        .collect();

    for key in keys {
        env::remove_var(&key);
    }

    env::remove_var("APP_ENV");
}

#[test]
#[serial]
fn test_load_defaults() {
    clean_env_vars();

    let config = config::load().expect("Default configuration should load");

    assert_eq!(config.app.name, "microblog");
    assert_eq!(config.app.environment, "development");
    assert_eq!(config.app.version, env!("CARGO_PKG_VERSION"));

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert!(config.server.workers.is_none());

    assert!(config.database.url.starts_with("sqlite://"));
    assert!(config.database.max_connections >= config.database.min_connections);

    assert_eq!(config.auth.argon2.memory_cost, 65536);
    assert_eq!(config.auth.argon2.time_cost, 3);
    assert_eq!(config.auth.argon2.parallelism, 4);

    assert_eq!(config.session.cookie_name, "session");
    assert_eq!(config.session.ttl_seconds, 7200);
}

#[test]
#[serial]
fn test_environment_variables_override_files() {
    clean_env_vars();

    env::set_var("MICROBLOG__SERVER__PORT", "8080");
    env::set_var("MICROBLOG__APP__ENVIRONMENT", "staging");
    env::set_var("MICROBLOG__DATABASE__MAX_CONNECTIONS", "25");

    let config = config::load().expect("Configuration with overrides should load");

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.app.environment, "staging");
    assert_eq!(config.database.max_connections, 25);

    clean_env_vars();
}

#[test]
#[serial]
fn test_invalid_port_fails_validation() {
    clean_env_vars();

    env::set_var("MICROBLOG__SERVER__PORT", "0");

    let result = config::load();
    assert!(result.is_err(), "Port 0 should be rejected");

    clean_env_vars();
}

#[test]
#[serial]
fn test_short_session_secret_fails_validation() {
    clean_env_vars();

    env::set_var("MICROBLOG__SESSION__SECRET", "too-short");

    let result = config::load();
    assert!(result.is_err(), "A secret under 32 characters should be rejected");

    clean_env_vars();
}

#[test]
#[serial]
fn test_long_session_secret_passes_validation() {
    clean_env_vars();

    env::set_var(
        "MICROBLOG__SESSION__SECRET",
        "0123456789abcdef0123456789abcdef",
    );

    let config = config::load().expect("A 32 character secret should be accepted");
    assert_eq!(config.session.secret.len(), 32);

    clean_env_vars();
}

#[test]
#[serial]
fn test_pool_bounds_are_checked() {
    clean_env_vars();

    env::set_var("MICROBLOG__DATABASE__MAX_CONNECTIONS", "1");
    env::set_var("MICROBLOG__DATABASE__MIN_CONNECTIONS", "5");

    let result = config::load();
    assert!(result.is_err(), "min_connections above max_connections should be rejected");

    clean_env_vars();
}

#[test]
fn test_default_struct_validates() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
}
