//! Configuration Loader Tests

use crate::test_utils::TEST_SECRET;
use std::fs;
use tempfile::TempDir;
use tollgate_domain::error::Error;
use tollgate_infrastructure::config::{
    AppConfig, ConfigLoader, KvProviderKind, PasswordAlgorithm,
};
use tollgate_infrastructure::config::loader::validate_app_config;
use tollgate_infrastructure::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_SERVER_PORT, JWT_DEFAULT_ALGORITHM, JWT_DEFAULT_EXPIRATION_SECS,
    SESSION_DEFAULT_TTL_SECS,
};

/// Prefix no developer shell defines, so ambient variables never leak in
const ISOLATED_PREFIX: &str = "TOLLGATE_UNIT_TEST";

fn load_toml(contents: &str) -> tollgate_domain::Result<AppConfig> {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("tollgate.toml");
    fs::write(&config_path, contents).unwrap();

    ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix(ISOLATED_PREFIX)
        .load()
}

fn minimal_toml() -> String {
    format!("[auth.jwt]\nsecret = \"{TEST_SECRET}\"\n")
}

fn valid_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt.secret = TEST_SECRET.to_string();
    config
}

#[test]
fn test_defaults_fill_missing_sections() {
    let config = load_toml(&minimal_toml()).unwrap();

    assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
    assert_eq!(config.auth.jwt.secret, TEST_SECRET);
    assert_eq!(config.auth.jwt.algorithm, JWT_DEFAULT_ALGORITHM);
    assert_eq!(config.auth.jwt.expiration_secs, JWT_DEFAULT_EXPIRATION_SECS);
    assert_eq!(config.auth.session.ttl_secs, SESSION_DEFAULT_TTL_SECS);
    assert_eq!(config.auth.password.algorithm, PasswordAlgorithm::Bcrypt);
    assert_eq!(config.kv.provider, KvProviderKind::Moka);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_toml_overrides_defaults() {
    let contents = format!(
        r#"
[server]
host = "0.0.0.0"
port = 9090

[auth.jwt]
secret = "{TEST_SECRET}"
algorithm = "HS512"
expiration_secs = 60

[auth.session]
ttl_secs = 3600

[auth.password]
algorithm = "Argon2"
work_factor = 3

[kv]
provider = "redis"

[kv.redis]
host = "cache.internal"
db = 2

[logging]
level = "debug"
json_format = true
"#
    );

    let config = load_toml(&contents).unwrap();

    assert_eq!(config.server.bind_address(), "0.0.0.0:9090");
    assert_eq!(config.auth.jwt.algorithm, "HS512");
    assert_eq!(config.auth.jwt.expiration().as_secs(), 60);
    assert_eq!(config.auth.session.ttl().as_secs(), 3600);
    assert_eq!(config.auth.password.algorithm, PasswordAlgorithm::Argon2);
    assert_eq!(config.auth.password.work_factor, 3);
    assert_eq!(config.kv.provider, KvProviderKind::Redis);
    assert_eq!(config.kv.redis.host, "cache.internal");
    assert_eq!(config.kv.redis.port, 6379);
    assert_eq!(config.kv.redis.db, 2);
    assert!(config.logging.json_format);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .with_env_prefix(ISOLATED_PREFIX);

    // Defaults carry no secret
    let err = loader.load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("JWT secret"));
}

#[test]
fn test_short_secret_rejected() {
    let err = load_toml("[auth.jwt]\nsecret = \"tooshort\"\n").unwrap_err();
    assert!(err.to_string().contains("at least 32"));
}

#[test]
fn test_unsupported_algorithm_rejected() {
    let contents = format!("[auth.jwt]\nsecret = \"{TEST_SECRET}\"\nalgorithm = \"HS128\"\n");
    let err = load_toml(&contents).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("HS128"));
}

#[test]
fn test_unknown_provider_rejected() {
    let contents = format!("{}\n[kv]\nprovider = \"memcached\"\n", minimal_toml());
    let err = load_toml(&contents).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = valid_config();
    config.server.port = 0;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validate_rejects_bad_log_level() {
    let mut config = valid_config();
    config.logging.level = "loud".to_string();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validate_rejects_zero_session_values() {
    let mut config = valid_config();
    config.auth.session.ttl_secs = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = valid_config();
    config.auth.session.operation_timeout_ms = 0;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validate_password_work_factor() {
    let mut config = valid_config();
    config.auth.password.work_factor = 3;
    assert!(validate_app_config(&config).is_err());

    config.auth.password.algorithm = PasswordAlgorithm::Argon2;
    assert!(validate_app_config(&config).is_ok());

    config.auth.password.work_factor = 0;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validate_accepts_defaults_with_secret() {
    assert!(validate_app_config(&valid_config()).is_ok());
}

#[test]
fn test_min_password_length_cannot_be_lowered() {
    let contents = format!("{}\n[auth.password]\nmin_length = 4\n", minimal_toml());
    let err = load_toml(&contents).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("at least 8"));

    let mut config = valid_config();
    config.auth.password.min_length = 7;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_min_password_length_can_be_raised() {
    let contents = format!("{}\n[auth.password]\nmin_length = 12\n", minimal_toml());
    let config = load_toml(&contents).unwrap();
    assert_eq!(config.auth.password.min_length, 12);
}

#[test]
fn test_config_source_reports_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let absent = temp_dir.path().join("absent.toml");
    let loader = ConfigLoader::new().with_config_path(&absent);
    assert_eq!(loader.config_source(), Some(absent.clone()));

    let present = temp_dir.path().join("tollgate.toml");
    fs::write(&present, minimal_toml()).unwrap();
    let loader = ConfigLoader::new()
        .with_config_path(&present)
        .with_env_prefix(ISOLATED_PREFIX);
    assert_eq!(loader.config_source(), Some(present));
    assert_eq!(loader.load().unwrap().auth.jwt.secret, TEST_SECRET);
}
