//! Key-Value Store Port
//!
//! Port for the expiring string store that holds sessions. Backends include
//! Redis (shared between instances), Moka (in-process) and a null store.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Expiring key-value store
///
/// Values are opaque strings. Every write that creates a key sets its TTL;
/// the store drops the key once the TTL elapses.
///
/// # Implementations
///
/// - **Redis**: Distributed store for multi-instance deployments
/// - **Moka**: In-memory store with per-entry expiry
/// - **Null**: Stores nothing, every read misses
///
/// # Example
///
/// ```ignore
/// use tollgate_domain::ports::KeyValueStore;
/// use std::time::Duration;
///
/// store.set_ex("token", "{\"User\":{...}}", Duration::from_secs(3600)).await?;
/// if let Some(raw) = store.get("token").await? {
///     println!("found {raw}");
/// }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value and TTL
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Remove `key`, returning whether it existed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Atomically replace the value under an existing key
    ///
    /// Returns the previous value. When the key is absent nothing is
    /// written and `None` is returned. The remaining TTL is preserved.
    async fn get_and_replace(&self, key: &str, value: &str) -> Result<Option<String>>;

    /// Short backend name for logs
    fn provider_name(&self) -> &str;
}
