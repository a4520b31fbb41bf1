//! Authenticated request context

use crate::rejection::AuthRejection;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tollgate_domain::value_objects::{AccessRole, AuthUser};

/// Identity attached to a request by [`require_auth`](crate::require_auth)
///
/// Read-only for handlers. Take it as an extractor argument:
///
/// ```ignore
/// async fn handler(ctx: AuthContext) -> String {
///     format!("hello {}", ctx.display_name)
/// }
/// ```
///
/// On a route without the middleware the extractor refuses the request
/// as if the header were missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub token: String,
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    pub role: AccessRole,
}

impl AuthContext {
    pub fn new(token: String, identity: AuthUser) -> Self {
        Self {
            token,
            user_id: identity.id,
            display_name: identity.display_name,
            email: identity.email,
            role: identity.role,
        }
    }
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or(AuthRejection::HeaderMissing)
    }
}
