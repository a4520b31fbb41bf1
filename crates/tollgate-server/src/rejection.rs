//! Authorization failures
//!
//! Every failure is a 401 with a fixed message and no internal detail.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Reason a request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No `Authorization` header
    HeaderMissing,
    /// Header present but not `Bearer <token>`
    SchemeMissing,
    /// Token failed verification
    TokenInvalid,
    /// No usable session behind the token
    SessionUnavailable,
}

impl AuthRejection {
    /// Message sent to the client
    ///
    /// These strings are part of the wire contract; clients match on them.
    pub fn message(self) -> &'static str {
        match self {
            Self::HeaderMissing => "Missing Authorization header",
            Self::SchemeMissing => "Missing Bearer keyword",
            Self::TokenInvalid => "error parsing JWT token",
            Self::SessionUnavailable => "Error retreiving session",
        }
    }

    /// Value of the `reason` log field
    pub fn reason(self) -> &'static str {
        match self {
            Self::HeaderMissing => "header_missing",
            Self::SchemeMissing => "scheme_missing",
            Self::TokenInvalid => "token_invalid",
            Self::SessionUnavailable => "session_unavailable",
        }
    }
}

#[derive(Serialize)]
struct RejectionBody {
    message: &'static str,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(RejectionBody {
                message: self.message(),
            }),
        )
            .into_response()
    }
}
