//! Stored session envelope

use super::AuthUser;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Value stored under a token in the session backend
///
/// Serializes as `{"User": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Identity the session belongs to
    #[serde(rename = "User")]
    pub user: AuthUser,
}

impl SessionRecord {
    /// Wrap an identity for storage
    pub fn new(user: AuthUser) -> Self {
        Self { user }
    }

    /// Encode for storage
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a stored value
    ///
    /// Any decode failure is reported as [`Error::SessionCorrupt`].
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| Error::session_corrupt("Stored session record is not valid", e))
    }

    /// Unwrap the identity
    pub fn into_user(self) -> AuthUser {
        self.user
    }
}
