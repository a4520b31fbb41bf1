//! Domain layer constants
//!
//! Values that belong to the authentication rules themselves. Deployment
//! defaults (ports, TTLs, work factors) live in `tollgate_infrastructure::constants`.

// ============================================================================
// PASSWORD POLICY CONSTANTS
// ============================================================================

/// Minimum number of characters in an acceptable password
pub const PASSWORD_MIN_LENGTH: usize = 8;

// ============================================================================
// TOKEN CONSTANTS
// ============================================================================

/// HMAC algorithm names a token service may be configured with
pub const SUPPORTED_TOKEN_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

/// Scheme keyword expected in the `Authorization` header
pub const BEARER_SCHEME: &str = "Bearer";
