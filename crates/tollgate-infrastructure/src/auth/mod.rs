//! Authentication services
//!
//! | Type | Role |
//! |------|------|
//! | [`TokenService`] | Signs and verifies time-bounded JWTs |
//! | [`SessionStore`] | Maps a token to the identity it was issued for |
//! | [`AuthService`] | Login, logout, session refresh and password changes |
//!
//! A token alone never authenticates a request: the session store is the
//! authority on whether a session is still active.

pub mod service;
pub mod session;
pub mod token;

pub use service::AuthService;
pub use session::SessionStore;
pub use token::TokenService;
