//! Error handling types

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Why a token failed verification
///
/// Kept for logs and tests only. Callers on the request path collapse every
/// reason into the same client-facing rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// Not a well-formed compact JWT, or claims missing/unparseable
    Malformed,
    /// Header names a different algorithm than the one configured
    AlgorithmMismatch,
    /// Signature does not verify under the configured secret
    BadSignature,
    /// `exp` is not strictly after the verification time
    Expired,
}

impl fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Malformed => "malformed",
            Self::AlgorithmMismatch => "algorithm mismatch",
            Self::BadSignature => "bad signature",
            Self::Expired => "expired",
        };
        f.write_str(reason)
    }
}

/// Main error type for Tollgate
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Token failed verification
    #[error("Invalid token: {reason}")]
    TokenInvalid {
        /// Internal reason, never sent to clients
        reason: TokenRejection,
    },

    /// No session is stored under the token
    #[error("Session not found")]
    SessionNotFound,

    /// A session exists but its stored value cannot be decoded
    #[error("Session corrupt: {message}")]
    SessionCorrupt {
        /// Description of the decode failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The session backend failed or did not answer before the deadline
    #[error("Session store unavailable: {message}")]
    SessionUnavailable {
        /// Description of the backend failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A session update was attempted without a token
    #[error("missing token")]
    MissingToken,

    /// Password hashing failed
    #[error("Password hashing error: {message}")]
    PasswordHash {
        /// Description of the hashing failure
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Token and password error creation methods
impl Error {
    /// Create a token rejection
    pub fn token_invalid(reason: TokenRejection) -> Self {
        Self::TokenInvalid { reason }
    }

    /// Create a password hashing error
    pub fn password_hash<S: Into<String>>(message: S) -> Self {
        Self::PasswordHash {
            message: message.into(),
        }
    }
}

// Session error creation methods
impl Error {
    /// Create a session corruption error with source
    pub fn session_corrupt<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::SessionCorrupt {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a session backend error
    pub fn session_unavailable<S: Into<String>>(message: S) -> Self {
        Self::SessionUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a session backend error wrapping the underlying failure
    pub fn session_unavailable_with_source<S: Into<String>>(message: S, source: Error) -> Self {
        Self::SessionUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
