//! Login lifecycle
//!
//! Ties token issue, session storage and password policy together.

use super::{SessionStore, TokenService};
use crate::config::AuthConfig;
use crate::crypto::PasswordGuard;
use std::sync::Arc;
use tollgate_domain::entities::User;
use tollgate_domain::error::{Error, Result};
use tollgate_domain::ports::KeyValueStore;
use tollgate_domain::value_objects::AuthUser;
use tracing::{debug, info};

/// Authentication service
#[derive(Debug, Clone)]
pub struct AuthService {
    tokens: TokenService,
    sessions: SessionStore,
    passwords: PasswordGuard,
}

impl AuthService {
    pub fn new(tokens: TokenService, sessions: SessionStore, passwords: PasswordGuard) -> Self {
        Self {
            tokens,
            sessions,
            passwords,
        }
    }

    /// Build every component from configuration over `store`
    pub fn from_config(config: &AuthConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let tokens = TokenService::new(
            &config.jwt.secret,
            config.jwt.expiration(),
            &config.jwt.algorithm,
        )?;
        let sessions = SessionStore::from_config(store, &config.session);
        let passwords = PasswordGuard::from_config(&config.password)?;
        Ok(Self::new(tokens, sessions, passwords))
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn passwords(&self) -> &PasswordGuard {
        &self.passwords
    }

    /// Start a session for `user` and return its token
    ///
    /// The token is also stored on the user record.
    pub async fn login(&self, user: &mut User) -> Result<String> {
        if !user.is_active || user.is_deleted() {
            return Err(Error::invalid_argument("User account is not active"));
        }

        let token = self.tokens.generate_token()?;
        self.sessions
            .put(
                &user.auth_user(),
                &token,
                self.sessions.session_ttl(),
                self.sessions.deadline(),
            )
            .await?;

        user.token.clone_from(&token);
        user.touch();
        info!(user_id = %user.id, "Session started");
        Ok(token)
    }

    /// End the session for `token`
    pub async fn logout(&self, token: &str) -> Result<()> {
        self.sessions.delete(token, self.sessions.deadline()).await
    }

    /// Push the current state of `user` into its live session
    pub async fn refresh_session(&self, user: &User) -> Result<()> {
        self.sessions
            .update(&user.auth_user(), &user.token, self.sessions.deadline())
            .await
    }

    /// Set a new password if it passes the strength policy
    ///
    /// Returns `Ok(false)` without changing the user when the password is
    /// too short or contains the user's names or email.
    pub async fn set_password(&self, user: &mut User, password: &str) -> Result<bool> {
        let secure = self
            .passwords
            .is_secure(password, &user.password_context());
        if !secure {
            debug!(user_id = %user.id, "Rejected insecure password");
            return Ok(false);
        }

        let hash = self
            .passwords
            .hash_blocking_off_thread(password.to_string())
            .await?;
        user.change_password(hash);
        Ok(true)
    }

    /// Check `password` against the user's stored hash
    pub fn verify_password(&self, user: &User, password: &str) -> bool {
        self.passwords.matches_hash(&user.password, password)
    }

    /// Verify `token` and resolve the identity of its session
    pub async fn authenticate(&self, token: &str) -> Result<AuthUser> {
        self.tokens.verify_token(token)?;
        self.sessions.get(token, self.sessions.deadline()).await
    }
}
