//! Redis key-value provider
//!
//! Session storage shared by every Tollgate instance pointing at the same
//! Redis database.
//!
//! ## Features
//!
//! - Auto-reconnecting connection via `ConnectionManager`
//! - Millisecond TTLs (`PSETEX`)
//! - Atomic replace that keeps the TTL (Lua script with `SET ... KEEPTTL`)
//!
//! ## Example
//!
//! ```ignore
//! use tollgate_providers::kv::RedisKvProvider;
//!
//! let provider = RedisKvProvider::connect("redis://localhost:6379").await?;
//! // Or with host/port
//! let url = RedisKvProvider::build_url("localhost", 6379, None, 0);
//! ```

use crate::constants::REDIS_GET_AND_REPLACE_SCRIPT;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError, Script};
use std::sync::Arc;
use std::time::Duration;
use tollgate_domain::error::{Error, Result};
use tollgate_domain::ports::KeyValueStore;
use tracing::info;

/// Redis key-value provider
///
/// Cloning is cheap; clones share the underlying connection.
#[derive(Clone)]
pub struct RedisKvProvider {
    conn: ConnectionManager,
    replace_script: Arc<Script>,
    address: String,
}

impl RedisKvProvider {
    /// Connect to Redis and check the server answers `PING`
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://:secret@localhost:6379/0")
    pub async fn connect(url: &str) -> Result<Self> {
        let address = redact_url(url);
        let client =
            Client::open(url).map_err(|e| redis_error("Failed to create Redis client", e))?;

        let mut conn = ConnectionManager::new(client)
            .await
            .map_err(|e| redis_error(&format!("Failed to connect to Redis at {address}"), e))?;

        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| redis_error(&format!("Redis at {address} did not answer PING"), e))?;

        info!(provider = "redis", address = %address, "Connected to key-value store");

        Ok(Self {
            conn,
            replace_script: Arc::new(Script::new(REDIS_GET_AND_REPLACE_SCRIPT)),
            address,
        })
    }

    /// Build a connection URL from its parts
    ///
    /// The password is percent-encoded so reserved characters survive parsing.
    pub fn build_url(host: &str, port: u16, password: Option<&str>, db: u32) -> String {
        match password {
            Some(password) if !password.is_empty() => {
                let password = urlencoding::encode(password);
                format!("redis://:{password}@{host}:{port}/{db}")
            }
            _ => format!("redis://{host}:{port}/{db}"),
        }
    }

    /// Server address with credentials removed
    pub fn server_address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl KeyValueStore for RedisKvProvider {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| redis_error("Redis GET failed", e))?;
        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);

        let _: () = conn
            .pset_ex(key, value, millis)
            .await
            .map_err(|e| redis_error("Redis PSETEX failed", e))?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn
            .del(key)
            .await
            .map_err(|e| redis_error("Redis DEL failed", e))?;
        Ok(removed > 0)
    }

    async fn get_and_replace(&self, key: &str, value: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let previous: Option<String> = self
            .replace_script
            .key(key)
            .arg(value)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| redis_error("Redis replace script failed", e))?;
        Ok(previous)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisKvProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisKvProvider")
            .field("server", &self.address)
            .finish_non_exhaustive()
    }
}

fn redis_error(message: &str, e: RedisError) -> Error {
    Error::infrastructure_with_source(format!("{message}: {e}"), e)
}

/// Drop the userinfo part of a URL so it can be logged
fn redact_url(url: &str) -> String {
    match (url.split_once("://"), url.rsplit_once('@')) {
        (Some((scheme, _)), Some((_, host))) => format!("{scheme}://{host}"),
        _ => url.to_string(),
    }
}
