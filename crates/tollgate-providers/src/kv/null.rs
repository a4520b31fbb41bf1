//! Null key-value provider for testing
//!
//! A store that accepts writes and keeps nothing.

use async_trait::async_trait;
use std::time::Duration;
use tollgate_domain::error::Result;
use tollgate_domain::ports::KeyValueStore;

/// Null key-value provider that doesn't store anything
///
/// Every read misses, so every session lookup ends in "not found".
///
/// # Example
///
/// ```rust
/// use tollgate_providers::kv::NullKvProvider;
///
/// let provider = NullKvProvider::new();
/// // All operations succeed but nothing is stored
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullKvProvider;

impl NullKvProvider {
    /// Create a new null provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KeyValueStore for NullKvProvider {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_ex(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn get_and_replace(&self, _key: &str, _value: &str) -> Result<Option<String>> {
        // Nothing exists, so nothing is replaced
        Ok(None)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
