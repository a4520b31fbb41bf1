//! Provider ports

/// Expiring key-value storage
pub mod key_value;

pub use key_value::KeyValueStore;
