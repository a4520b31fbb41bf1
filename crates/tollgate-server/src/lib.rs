//! # Tollgate Server
//!
//! HTTP authorization gate built on axum. Requests to protected routes must
//! carry `Authorization: Bearer <token>`; the token is verified and its
//! session resolved before the handler runs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tollgate_server::run;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Defaults, then ./tollgate.toml, then TOLLGATE__* variables
//!     run(None).await
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`require_auth`] | Middleware for `axum::middleware::from_fn_with_state` |
//! | [`AuthContext`] | Extractor for the authenticated identity |
//! | [`AuthRejection`] | 401 response with a JSON `message` |

pub mod context;
pub mod init;
pub mod middleware;
pub mod rejection;
pub mod routes;

pub use context::AuthContext;
pub use init::run;
pub use middleware::require_auth;
pub use rejection::AuthRejection;
pub use routes::router;
