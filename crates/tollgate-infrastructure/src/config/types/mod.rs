//! Configuration types module

pub mod app;
pub mod auth;
pub mod kv;
pub mod logging;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use auth::{AuthConfig, JwtConfig, PasswordAlgorithm, PasswordConfig, SessionConfig};
pub use kv::{KvConfig, KvProviderKind, MokaConfig, RedisConfig};
pub use logging::LoggingConfig;
pub use server::ServerConfig;
