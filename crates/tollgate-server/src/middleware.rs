//! Bearer token middleware
//!
//! Runs four checks in order and stops at the first failure:
//! non-empty header, `Bearer` scheme, token verifies, session resolves.

use crate::context::AuthContext;
use crate::rejection::AuthRejection;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use tollgate_domain::constants::BEARER_SCHEME;
use tollgate_domain::error::Error;
use tollgate_infrastructure::AuthService;
use tracing::{debug, trace};

/// Authorization middleware
///
/// Install with `axum::middleware::from_fn_with_state(auth, require_auth)`.
/// On success an [`AuthContext`] is inserted into the request extensions.
pub async fn require_auth(
    State(auth): State<Arc<AuthService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    // An empty value counts as no header at all
    let Some(value) = req
        .headers()
        .get(header::AUTHORIZATION)
        .filter(|value| !value.as_bytes().trim_ascii().is_empty())
    else {
        return Err(rejected(AuthRejection::HeaderMissing));
    };
    let Some(token) = bearer_token(value) else {
        return Err(rejected(AuthRejection::SchemeMissing));
    };
    let token = token.to_string();

    let identity = match auth.authenticate(&token).await {
        Ok(identity) => identity,
        Err(Error::TokenInvalid { reason }) => {
            debug!(
                reason = AuthRejection::TokenInvalid.reason(),
                detail = %reason,
                "Request rejected"
            );
            return Err(AuthRejection::TokenInvalid);
        }
        Err(e) => {
            debug!(
                reason = AuthRejection::SessionUnavailable.reason(),
                error = %e,
                "Request rejected"
            );
            return Err(AuthRejection::SessionUnavailable);
        }
    };

    trace!(user_id = %identity.id, "Request authenticated");
    req.extensions_mut()
        .insert(AuthContext::new(token, identity));
    Ok(next.run(req).await)
}

/// Token part of a `Bearer <token>` header value
///
/// Returns `None` when the scheme is not exactly `Bearer` or the value is
/// not visible ASCII. A bare `Bearer` yields an empty token.
pub fn bearer_token(value: &HeaderValue) -> Option<&str> {
    let value = value.to_str().ok()?;
    let mut parts = value.split_whitespace();
    if parts.next()? != BEARER_SCHEME {
        return None;
    }
    Some(parts.next().unwrap_or_default())
}

fn rejected(rejection: AuthRejection) -> AuthRejection {
    debug!(reason = rejection.reason(), "Request rejected");
    rejection
}
