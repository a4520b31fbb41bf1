//! Key-value factory tests

use std::time::Duration;
use tollgate_infrastructure::config::{KvConfig, KvProviderKind};
use tollgate_infrastructure::kv::create_kv_store;

#[tokio::test]
async fn test_default_store_is_moka() {
    let store = create_kv_store(&KvConfig::default()).await.unwrap();
    assert_eq!(store.provider_name(), "moka");

    store
        .set_ex("k", "v", Duration::from_secs(60))
        .await
        .unwrap();
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn test_null_store() {
    let config = KvConfig {
        provider: KvProviderKind::Null,
        ..KvConfig::default()
    };
    let store = create_kv_store(&config).await.unwrap();

    assert_eq!(store.provider_name(), "null");
    store
        .set_ex("k", "v", Duration::from_secs(60))
        .await
        .unwrap();
    assert!(store.get("k").await.unwrap().is_none());
}
