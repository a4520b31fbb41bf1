//! Key-Value Store Implementations
//!
//! Backends for session storage.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullKvProvider`] | Testing | Stores nothing |
//! | [`MokaKvProvider`] | Local | In-memory, per-entry TTL |
//! | [`RedisKvProvider`] | Distributed | Redis-backed for multi-instance |
//!
//! ## Provider Selection Guide
//!
//! - **Testing**: `NullKvProvider` when every lookup should miss
//! - **Single Instance**: `MokaKvProvider`; sessions are lost on restart
//! - **Multi Instance**: `RedisKvProvider`

#[cfg(feature = "kv-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "kv-redis")]
pub mod redis;

// Re-export for convenience
#[cfg(feature = "kv-moka")]
pub use moka::MokaKvProvider;
pub use null::NullKvProvider;
#[cfg(feature = "kv-redis")]
pub use redis::RedisKvProvider;
