//! Access roles

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access role of a principal
///
/// Serialized as its numeric code so stored sessions stay compact and
/// readable by other services sharing the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AccessRole {
    /// Unrestricted access
    SuperAdmin = 1,
    /// Administrative access
    Admin = 2,
    /// Standard user
    User = 3,
}

impl AccessRole {
    /// Numeric code of the role
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AccessRole {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::SuperAdmin),
            2 => Ok(Self::Admin),
            3 => Ok(Self::User),
            other => Err(Error::invalid_argument(format!(
                "Unknown access role code: {other}"
            ))),
        }
    }
}

impl From<AccessRole> for u8 {
    fn from(role: AccessRole) -> Self {
        role.code()
    }
}

impl fmt::Display for AccessRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::User => "user",
        };
        f.write_str(name)
    }
}
