//! Environment override tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p tollgate-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Rust 2024 requires `unsafe` for `env::set_var`/`env::remove_var`.
//! Tests MUST run with `--test-threads=1` to prevent data races.

use crate::test_utils::TEST_SECRET;
use std::env;
use tempfile::TempDir;
use tollgate_infrastructure::config::{ConfigLoader, KvProviderKind};

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

/// Loader pointed at a file that does not exist, so only defaults and env apply
fn env_only_loader(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::new().with_config_path(dir.path().join("absent.toml"))
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_secret_from_env() {
    let dir = TempDir::new().unwrap();
    set_env("TOLLGATE__AUTH__JWT__SECRET", TEST_SECRET);

    let config = env_only_loader(&dir).load();
    remove_env("TOLLGATE__AUTH__JWT__SECRET");

    assert_eq!(config.unwrap().auth.jwt.secret, TEST_SECRET);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_nested_overrides_from_env() {
    let dir = TempDir::new().unwrap();
    set_env("TOLLGATE__AUTH__JWT__SECRET", TEST_SECRET);
    set_env("TOLLGATE__SERVER__PORT", "9443");
    set_env("TOLLGATE__KV__PROVIDER", "null");
    set_env("TOLLGATE__AUTH__SESSION__TTL_SECS", "120");

    let config = env_only_loader(&dir).load();

    remove_env("TOLLGATE__AUTH__JWT__SECRET");
    remove_env("TOLLGATE__SERVER__PORT");
    remove_env("TOLLGATE__KV__PROVIDER");
    remove_env("TOLLGATE__AUTH__SESSION__TTL_SECS");

    let config = config.unwrap();
    assert_eq!(config.server.port, 9443);
    assert_eq!(config.kv.provider, KvProviderKind::Null);
    assert_eq!(config.auth.session.ttl_secs, 120);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tollgate.toml");
    std::fs::write(
        &path,
        format!("[server]\nport = 7000\n\n[auth.jwt]\nsecret = \"{TEST_SECRET}\"\n"),
    )
    .unwrap();
    set_env("TOLLGATE__SERVER__PORT", "7001");

    let config = ConfigLoader::new().with_config_path(&path).load();
    remove_env("TOLLGATE__SERVER__PORT");

    assert_eq!(config.unwrap().server.port, 7001);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_ignored() {
    let dir = TempDir::new().unwrap();
    set_env("TOLLGATE__AUTH__JWT__SECRET", TEST_SECRET);
    set_env("TOLLGATE_SERVER_PORT", "1234");

    let config = env_only_loader(&dir).load();

    remove_env("TOLLGATE__AUTH__JWT__SECRET");
    remove_env("TOLLGATE_SERVER_PORT");

    assert_ne!(config.unwrap().server.port, 1234);
}
