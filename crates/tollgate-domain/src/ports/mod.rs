//! Domain Port Interfaces
//!
//! Contracts that infrastructure adapters implement. The domain defines the
//! interface; providers supply Redis, in-memory and no-op backends.

/// External service provider ports
pub mod providers;

pub use providers::KeyValueStore;
