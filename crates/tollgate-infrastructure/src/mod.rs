//! # Infrastructure Layer
//!
//! Technical services behind Tollgate's authorization gate.
//!
//! ## Module Categories
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | JWT issue/verify, session store, login lifecycle |
//! | [`crypto`] | Password hashing and strength policy |
//!
//! ### Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`kv`] | Builds the configured key-value backend |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via Figment |
//! | [`constants`] | Centralized defaults |
//! | [`logging`] | Structured logging with tracing |

pub mod auth;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod kv;
pub mod logging;

// Re-export commonly used types
pub use auth::{AuthService, SessionStore, TokenService};
pub use crypto::PasswordGuard;
pub use error_ext::ErrorContext;
