//! Authentication configuration types

use crate::constants::{
    BCRYPT_DEFAULT_COST, JWT_DEFAULT_ALGORITHM, JWT_DEFAULT_EXPIRATION_SECS,
    SESSION_DEFAULT_OPERATION_TIMEOUT_MS, SESSION_DEFAULT_TTL_SECS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tollgate_domain::constants::PASSWORD_MIN_LENGTH;

/// Password hashing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordAlgorithm {
    Argon2, // Argon2id, work factor = iterations
    Bcrypt, // bcrypt, work factor = cost
}

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// JWT secret key
    ///
    /// **REQUIRED**. Configure via `TOLLGATE__AUTH__JWT__SECRET`
    /// or `auth.jwt.secret` in the config file.
    /// Must be at least 32 characters.
    pub secret: String,

    /// Signing algorithm: HS256, HS384 or HS512
    pub algorithm: String,

    /// Token lifetime in seconds
    pub expiration_secs: u64,
}

/// Returns default JWT configuration with:
/// - Empty secret (MUST be configured)
/// - HS256 and the default lifetime from infrastructure constants
impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            // Validation in loader.rs enforces minimum length
            secret: String::new(),
            algorithm: JWT_DEFAULT_ALGORITHM.to_string(),
            expiration_secs: JWT_DEFAULT_EXPIRATION_SECS,
        }
    }
}

impl JwtConfig {
    pub fn expiration(&self) -> Duration {
        Duration::from_secs(self.expiration_secs)
    }
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in seconds, independent of token lifetime
    pub ttl_secs: u64,

    /// Deadline for a single session store call in milliseconds
    pub operation_timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: SESSION_DEFAULT_TTL_SECS,
            operation_timeout_ms: SESSION_DEFAULT_OPERATION_TIMEOUT_MS,
        }
    }
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }
}

/// Password policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Hashing algorithm for new hashes
    pub algorithm: PasswordAlgorithm,

    /// bcrypt cost or Argon2 iteration count
    pub work_factor: u32,

    /// Minimum password length in characters
    pub min_length: usize,
}

/// Returns default password configuration with:
/// - bcrypt at the default cost
/// - Minimum length from domain constants
impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            algorithm: PasswordAlgorithm::Bcrypt,
            work_factor: BCRYPT_DEFAULT_COST,
            min_length: PASSWORD_MIN_LENGTH,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Password policy
    #[serde(default)]
    pub password: PasswordConfig,
}
