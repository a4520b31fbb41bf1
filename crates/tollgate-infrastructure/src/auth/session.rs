//! Session store
//!
//! Stores the identity snapshot for each issued token in the key-value
//! backend. Every call takes a deadline; a backend that fails or does not
//! answer in time surfaces as [`Error::SessionUnavailable`].

use crate::config::SessionConfig;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, timeout_at};
use tollgate_domain::error::{Error, Result};
use tollgate_domain::ports::KeyValueStore;
use tollgate_domain::value_objects::{AuthUser, SessionRecord};
use tracing::warn;

/// Token to identity mapping with expiry
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    ttl: Duration,
    operation_timeout: Duration,
}

impl SessionStore {
    /// Create a session store over `store`
    ///
    /// `ttl` is the lifetime given to sessions created by callers that use
    /// [`SessionStore::session_ttl`]; `operation_timeout` bounds each call
    /// made with [`SessionStore::deadline`].
    pub fn new(store: Arc<dyn KeyValueStore>, ttl: Duration, operation_timeout: Duration) -> Self {
        Self {
            store,
            ttl,
            operation_timeout,
        }
    }

    /// Create a session store from configuration
    pub fn from_config(store: Arc<dyn KeyValueStore>, config: &SessionConfig) -> Self {
        Self::new(store, config.ttl(), config.operation_timeout())
    }

    /// Configured session lifetime
    pub fn session_ttl(&self) -> Duration {
        self.ttl
    }

    /// Deadline for a call starting now
    pub fn deadline(&self) -> Instant {
        Instant::now() + self.operation_timeout
    }

    /// Resolve the identity stored under `token`
    pub async fn get(&self, token: &str, deadline: Instant) -> Result<AuthUser> {
        let raw = self.call("GET", deadline, self.store.get(token)).await?;
        match raw {
            Some(raw) => SessionRecord::from_json(&raw).map(SessionRecord::into_user),
            None => Err(Error::SessionNotFound),
        }
    }

    /// Store `identity` under `token`, replacing any previous record and TTL
    pub async fn put(
        &self,
        identity: &AuthUser,
        token: &str,
        ttl: Duration,
        deadline: Instant,
    ) -> Result<()> {
        if ttl.is_zero() {
            return Err(Error::invalid_argument("Session TTL must be positive"));
        }
        let raw = SessionRecord::new(identity.clone()).to_json()?;
        self.call("SET", deadline, self.store.set_ex(token, &raw, ttl))
            .await
    }

    /// Replace the identity of an existing session, keeping its TTL
    ///
    /// Fails with [`Error::MissingToken`] for an empty token without touching
    /// the backend, and with [`Error::SessionNotFound`] when no session exists.
    pub async fn update(&self, identity: &AuthUser, token: &str, deadline: Instant) -> Result<()> {
        if token.is_empty() {
            return Err(Error::MissingToken);
        }
        let raw = SessionRecord::new(identity.clone()).to_json()?;
        let previous = self
            .call("REPLACE", deadline, self.store.get_and_replace(token, &raw))
            .await?;
        match previous {
            Some(_) => Ok(()),
            None => Err(Error::SessionNotFound),
        }
    }

    /// Remove the session under `token`; removing a missing session succeeds
    pub async fn delete(&self, token: &str, deadline: Instant) -> Result<()> {
        self.call("DEL", deadline, self.store.delete(token))
            .await
            .map(|_| ())
    }

    pub fn provider_name(&self) -> &str {
        self.store.provider_name()
    }

    async fn call<T, F>(&self, operation: &'static str, deadline: Instant, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match timeout_at(deadline, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                warn!(
                    provider = self.store.provider_name(),
                    operation,
                    error = %e,
                    "Session store call failed"
                );
                Err(Error::session_unavailable_with_source(
                    format!("Session {operation} failed"),
                    e,
                ))
            }
            Err(_) => {
                warn!(
                    provider = self.store.provider_name(),
                    operation, "Session store call timed out"
                );
                Err(Error::session_unavailable(format!(
                    "Session {operation} timed out"
                )))
            }
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("provider", &self.store.provider_name())
            .field("ttl", &self.ttl)
            .field("operation_timeout", &self.operation_timeout)
            .finish()
    }
}
