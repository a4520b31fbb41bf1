//! Key-value store factory
//!
//! Builds the session backend selected in configuration.

use crate::config::{KvConfig, KvProviderKind};
use std::sync::Arc;
use tollgate_domain::error::Result;
use tollgate_domain::ports::KeyValueStore;
use tollgate_providers::kv::{MokaKvProvider, NullKvProvider, RedisKvProvider};
use tracing::info;

/// Create the configured key-value store
///
/// For Redis this connects and checks the server before returning.
pub async fn create_kv_store(config: &KvConfig) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.provider {
        KvProviderKind::Redis => {
            let redis = &config.redis;
            let url = RedisKvProvider::build_url(
                &redis.host,
                redis.port,
                redis.password.as_deref(),
                redis.db,
            );
            Arc::new(RedisKvProvider::connect(&url).await?)
        }
        KvProviderKind::Moka => Arc::new(MokaKvProvider::with_capacity(config.moka.max_capacity)),
        KvProviderKind::Null => Arc::new(NullKvProvider::new()),
    };

    info!(provider = store.provider_name(), "Session store ready");
    Ok(store)
}
