//! Cryptographic services module
//!
//! Password hashing and strength policy. Token signing lives in
//! [`crate::auth::token`].

mod password;

pub use password::PasswordGuard;
