//! Authenticated identity snapshot

use super::AccessRole;
use serde::{Deserialize, Serialize};

/// Identity of an authenticated principal
///
/// A read-only projection of a [`User`](crate::User). It never carries the
/// password hash or the session token, so it is safe to hand to request
/// handlers and to store in the session backend.
///
/// Field names on the wire are `ID`, `DisplayName`, `Email` and `Role`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthUser {
    /// Opaque unique identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Name shown to other users
    pub display_name: String,
    /// Contact email
    pub email: String,
    /// Access role
    pub role: AccessRole,
}

impl AuthUser {
    /// Create a new identity snapshot
    pub fn new<S: Into<String>>(id: S, display_name: S, email: S, role: AccessRole) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: email.into(),
            role,
        }
    }
}
