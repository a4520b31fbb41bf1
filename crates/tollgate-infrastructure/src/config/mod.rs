//! Configuration
//!
//! Layered configuration: built-in defaults, then an optional TOML file,
//! then `TOLLGATE__*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
