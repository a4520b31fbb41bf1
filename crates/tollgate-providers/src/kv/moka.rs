//! Moka in-memory key-value provider
//!
//! Concurrent in-process store built on Moka with a TTL per entry.
//!
//! ## Features
//!
//! - Each key expires on its own TTL, set by `set_ex`
//! - `get_and_replace` keeps the remaining TTL of the entry it replaces
//! - Bounded capacity with automatic eviction
//!
//! ## Example
//!
//! ```ignore
//! use tollgate_providers::kv::MokaKvProvider;
//!
//! let provider = MokaKvProvider::with_capacity(10_000);
//! ```

use crate::constants::MOKA_DEFAULT_MAX_CAPACITY;
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use moka::ops::compute::Op;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tollgate_domain::error::Result;
use tollgate_domain::ports::KeyValueStore;

/// Stored value with the TTL requested by the write that produced it
///
/// `ttl` is `None` for in-place replacements, which inherit the current expiry.
#[derive(Clone)]
struct StoredValue {
    value: Arc<str>,
    ttl: Option<Duration>,
}

struct PerEntryExpiry;

impl Expiry<String, StoredValue> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredValue,
        _updated_at: Instant,
        duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl.or(duration_until_expiry)
    }
}

/// Moka-based in-memory key-value provider
///
/// Sessions stored here are local to the process and lost on restart.
#[derive(Clone)]
pub struct MokaKvProvider {
    cache: Cache<String, StoredValue>,
    max_capacity: u64,
}

impl Default for MokaKvProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaKvProvider {
    /// Create a new provider with default capacity
    pub fn new() -> Self {
        Self::with_capacity(MOKA_DEFAULT_MAX_CAPACITY)
    }

    /// Create a new provider holding at most `max_capacity` entries
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryExpiry)
            .build();

        Self {
            cache,
            max_capacity,
        }
    }

    /// Maximum number of entries
    pub fn max_capacity(&self) -> u64 {
        self.max_capacity
    }

    /// Approximate number of live entries
    pub async fn entry_count(&self) -> u64 {
        // Flush pending maintenance so the count is accurate
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[async_trait]
impl KeyValueStore for MokaKvProvider {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .cache
            .get(key)
            .await
            .map(|stored| stored.value.to_string()))
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let stored = StoredValue {
            value: Arc::from(value),
            ttl: Some(ttl),
        };
        self.cache.insert(key.to_string(), stored).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn get_and_replace(&self, key: &str, value: &str) -> Result<Option<String>> {
        let replacement: Arc<str> = Arc::from(value);
        let mut previous = None;

        self.cache
            .entry_by_ref(key)
            .and_compute_with(|existing| {
                let op = match existing {
                    Some(entry) => {
                        previous = Some(entry.into_value().value.to_string());
                        Op::Put(StoredValue {
                            value: replacement,
                            ttl: None,
                        })
                    }
                    None => Op::Nop,
                };
                std::future::ready(op)
            })
            .await;

        Ok(previous)
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaKvProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaKvProvider")
            .field("max_capacity", &self.max_capacity)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
