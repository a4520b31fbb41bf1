//! HTTP routes
//!
//! `/health` is open; every other route sits behind [`require_auth`].

use crate::context::AuthContext;
use crate::middleware::require_auth;
use crate::rejection::AuthRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tollgate_domain::value_objects::AccessRole;
use tollgate_infrastructure::AuthService;
use tracing::info;

/// Identity of the caller, as returned by `/me`
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    pub role: AccessRole,
}

/// Build the application router
pub fn router(auth: Arc<AuthService>) -> Router {
    let protected = Router::new()
        .route("/me", get(me))
        .route("/logout", post(logout))
        .route_layer(middleware::from_fn_with_state(auth.clone(), require_auth));

    Router::new()
        .route("/health", get(health))
        .merge(protected)
        .with_state(auth)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn me(ctx: AuthContext) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: ctx.user_id,
        display_name: ctx.display_name,
        email: ctx.email,
        role: ctx.role,
    })
}

async fn logout(
    State(auth): State<Arc<AuthService>>,
    ctx: AuthContext,
) -> Result<StatusCode, AuthRejection> {
    auth.logout(&ctx.token)
        .await
        .map_err(|_| AuthRejection::SessionUnavailable)?;
    info!(user_id = %ctx.user_id, "Session ended");
    Ok(StatusCode::NO_CONTENT)
}
