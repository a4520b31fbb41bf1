//! Password hashing and strength policy

use crate::config::{PasswordAlgorithm, PasswordConfig};
use crate::constants::{BCRYPT_MAX_COST, BCRYPT_MIN_COST};
use argon2::{
    Algorithm, Argon2, Params, PasswordHasher, Version,
    password_hash::{PasswordHash, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tollgate_domain::constants::PASSWORD_MIN_LENGTH;
use tollgate_domain::error::{Error, Result};

#[derive(Clone)]
enum Hasher {
    Bcrypt { cost: u32 },
    Argon2(Argon2<'static>),
}

/// Hashes, verifies and rates passwords
///
/// New hashes use the configured algorithm. Verification detects the
/// algorithm from the stored hash, so hashes written under an older policy
/// keep working after the configuration changes.
#[derive(Clone)]
pub struct PasswordGuard {
    hasher: Hasher,
    min_length: usize,
}

impl PasswordGuard {
    /// Create a guard
    ///
    /// `work_factor` is the bcrypt cost (4 to 31) or the Argon2id iteration count.
    /// `min_length` may raise the minimum password length but never lower it below 8.
    pub fn new(algorithm: PasswordAlgorithm, work_factor: u32, min_length: usize) -> Result<Self> {
        if min_length < PASSWORD_MIN_LENGTH {
            return Err(Error::configuration(format!(
                "Minimum password length must be at least {PASSWORD_MIN_LENGTH}, got {min_length}"
            )));
        }

        let hasher = match algorithm {
            PasswordAlgorithm::Bcrypt => {
                if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&work_factor) {
                    return Err(Error::configuration(format!(
                        "bcrypt cost must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}, got {work_factor}"
                    )));
                }
                Hasher::Bcrypt { cost: work_factor }
            }
            PasswordAlgorithm::Argon2 => {
                let params = Params::new(
                    Params::DEFAULT_M_COST,
                    work_factor,
                    Params::DEFAULT_P_COST,
                    None,
                )
                .map_err(|e| {
                    Error::configuration(format!("Invalid Argon2 parameters: {e}"))
                })?;
                Hasher::Argon2(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
            }
        };

        Ok(Self { hasher, min_length })
    }

    /// Create a guard from configuration
    pub fn from_config(config: &PasswordConfig) -> Result<Self> {
        Self::new(config.algorithm, config.work_factor, config.min_length)
    }

    /// Hash a password with a fresh salt
    pub fn hash(&self, password: &str) -> Result<String> {
        match &self.hasher {
            Hasher::Bcrypt { cost } => bcrypt::hash(password, *cost)
                .map_err(|e| Error::password_hash(format!("bcrypt hashing failed: {e}"))),
            Hasher::Argon2(argon2) => {
                let salt = SaltString::generate(&mut OsRng);
                argon2
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| Error::password_hash(format!("Argon2 hashing failed: {e}")))
            }
        }
    }

    /// Hash on the blocking thread pool
    ///
    /// Hashing is deliberately slow; use this from async request handlers.
    pub async fn hash_blocking_off_thread(&self, password: String) -> Result<String> {
        let guard = self.clone();
        tokio::task::spawn_blocking(move || guard.hash(&password))
            .await
            .map_err(|e| Error::internal(format!("Password hashing task failed: {e}")))?
    }

    /// Check a password against a stored hash
    ///
    /// Returns `false` for a mismatch and for a hash that cannot be parsed.
    pub fn matches_hash(&self, hash: &str, password: &str) -> bool {
        if hash.starts_with("$argon2") {
            PasswordHash::new(hash).is_ok_and(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
        } else if hash.starts_with("$2") {
            bcrypt::verify(password, hash).unwrap_or(false)
        } else {
            false
        }
    }

    /// Rate a password against the policy
    ///
    /// Rejects passwords shorter than the minimum length and passwords that
    /// contain any of `inputs` (names, email parts), ignoring case.
    pub fn is_secure(&self, password: &str, inputs: &[&str]) -> bool {
        if password.chars().count() < self.min_length {
            return false;
        }

        let lowered = password.to_lowercase();
        !inputs
            .iter()
            .filter(|input| !input.is_empty())
            .any(|input| lowered.contains(&input.to_lowercase()))
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl std::fmt::Debug for PasswordGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let algorithm = match self.hasher {
            Hasher::Bcrypt { .. } => "bcrypt",
            Hasher::Argon2(_) => "argon2id",
        };
        f.debug_struct("PasswordGuard")
            .field("algorithm", &algorithm)
            .field("min_length", &self.min_length)
            .finish()
    }
}
