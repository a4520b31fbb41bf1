//! Main application configuration

use super::{AuthConfig, KvConfig, LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Tokens, sessions and password policy
    #[serde(default)]
    pub auth: AuthConfig,

    /// Session backend
    #[serde(default)]
    pub kv: KvConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}
