//! Key-value store configuration types

use crate::constants::{MOKA_DEFAULT_MAX_CAPACITY, REDIS_DEFAULT_HOST, REDIS_DEFAULT_PORT};
use serde::{Deserialize, Serialize};

/// Session backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KvProviderKind {
    /// Shared Redis server
    Redis,
    /// In-process store
    Moka,
    /// Stores nothing
    Null,
}

/// Redis connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    /// Configure via `TOLLGATE__KV__REDIS__PASSWORD`
    pub password: Option<String>,
    pub db: u32,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: REDIS_DEFAULT_HOST.to_string(),
            port: REDIS_DEFAULT_PORT,
            password: None,
            db: 0,
        }
    }
}

/// In-memory store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MokaConfig {
    /// Maximum number of live sessions
    pub max_capacity: u64,
}

impl Default for MokaConfig {
    fn default() -> Self {
        Self {
            max_capacity: MOKA_DEFAULT_MAX_CAPACITY,
        }
    }
}

/// Key-value store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KvConfig {
    /// Which backend to use
    pub provider: KvProviderKind,

    #[serde(default)]
    pub redis: RedisConfig,

    #[serde(default)]
    pub moka: MokaConfig,
}

/// Returns default store configuration with:
/// - In-memory backend, so a fresh checkout runs without Redis
impl Default for KvConfig {
    fn default() -> Self {
        Self {
            provider: KvProviderKind::Moka,
            redis: RedisConfig::default(),
            moka: MokaConfig::default(),
        }
    }
}
