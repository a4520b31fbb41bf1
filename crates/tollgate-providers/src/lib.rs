//! # Tollgate - Provider Implementations
//!
//! Backends for the [`KeyValueStore`] port defined in `tollgate-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Key-Value | `KeyValueStore` | Redis, Moka, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! tollgate-providers = { version = "0.1", default-features = false, features = ["kv-moka"] }
//! ```

// Re-export tollgate-domain types commonly used with providers
pub use tollgate_domain::error::{Error, Result};
pub use tollgate_domain::ports::KeyValueStore;

/// Provider-specific constants
pub mod constants;

/// Key-value store implementations
///
/// Implements `KeyValueStore` for session backends.
pub mod kv;
