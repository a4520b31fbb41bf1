//! User record

use crate::utils::IdGenerator;
use crate::value_objects::{AccessRole, AuthUser};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full user account record
///
/// Persistence is owned by whatever service stores accounts; Tollgate only
/// reads it to issue sessions and writes the password hash and token.
/// The hash and token are never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub email: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    /// Password hash in PHC or modular crypt format
    #[serde(skip)]
    pub password: String,
    pub phone_number: Option<String>,
    /// Token of the current session, empty when logged out
    #[serde(skip)]
    pub token: String,
    pub is_active: bool,
    pub role: AccessRole,
    pub last_password_change: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new active user with a fresh identifier
    pub fn new(
        email: impl Into<String>,
        display_name: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: AccessRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: IdGenerator::new_id(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
            email: email.into(),
            display_name: display_name.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password: String::new(),
            phone_number: None,
            token: String::new(),
            is_active: true,
            role,
            last_password_change: None,
        }
    }

    /// Record a modification
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Store a new password hash and stamp the change time
    pub fn change_password(&mut self, hash: String) {
        let now = Utc::now();
        self.password = hash;
        self.last_password_change = Some(now);
        self.updated_at = now;
    }

    /// First and last name joined by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Project the identity snapshot stored in sessions
    pub fn auth_user(&self) -> AuthUser {
        AuthUser {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    /// Values a password must not contain
    ///
    /// Empty fields are skipped. Only the local part of the email is used.
    pub fn password_context(&self) -> Vec<&str> {
        let email_local = self.email.split('@').next().unwrap_or_default();
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.display_name.as_str(),
            email_local,
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
