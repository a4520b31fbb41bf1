//! Shared test doubles

use async_trait::async_trait;
use std::time::Duration;
use tollgate_domain::error::{Error, Result};
use tollgate_domain::ports::KeyValueStore;

/// Secret long enough to pass configuration validation
pub const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// Store whose every call fails
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::infrastructure("connection refused"))
    }

    async fn set_ex(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<()> {
        Err(Error::infrastructure("connection refused"))
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Err(Error::infrastructure("connection refused"))
    }

    async fn get_and_replace(&self, _key: &str, _value: &str) -> Result<Option<String>> {
        Err(Error::infrastructure("connection refused"))
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

/// Store that never answers within any reasonable deadline
pub struct StalledStore;

#[async_trait]
impl KeyValueStore for StalledStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }

    async fn set_ex(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<()> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(false)
    }

    async fn get_and_replace(&self, _key: &str, _value: &str) -> Result<Option<String>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }

    fn provider_name(&self) -> &str {
        "stalled"
    }
}
