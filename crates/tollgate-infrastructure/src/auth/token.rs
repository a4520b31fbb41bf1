//! JWT issue and verification

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tollgate_domain::constants::SUPPORTED_TOKEN_ALGORITHMS;
use tollgate_domain::error::{Error, Result, TokenRejection};

/// Token payload: issue and expiry times only
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    iat: i64,
    exp: i64,
}

/// Issues and verifies HMAC-signed tokens
///
/// Tokens carry no identity; they only prove that this service issued them
/// and that they have not expired. Identity comes from the session store.
#[derive(Clone)]
pub struct TokenService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime_secs: i64,
}

impl TokenService {
    /// Create a token service
    ///
    /// Fails with a configuration error when `algorithm` is not one of
    /// HS256, HS384 or HS512, or when `secret` is empty.
    pub fn new(secret: &str, lifetime: Duration, algorithm: &str) -> Result<Self> {
        let algorithm = parse_algorithm(algorithm)?;
        if secret.is_empty() {
            return Err(Error::configuration("Token signing secret cannot be empty"));
        }
        let lifetime_secs = i64::try_from(lifetime.as_secs())
            .map_err(|_| Error::configuration("Token lifetime is too large"))?;

        // Expiry is checked by hand with zero leeway
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        // `iat` is required by the claims type itself
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime_secs,
        })
    }

    /// Issue a token valid from now for the configured lifetime
    pub fn generate_token(&self) -> Result<String> {
        self.generate_token_at(Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now` (Unix seconds)
    pub fn generate_token_at(&self, now: i64) -> Result<String> {
        let claims = TokenClaims {
            iat: now,
            exp: now.saturating_add(self.lifetime_secs),
        };
        jsonwebtoken::encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| Error::internal(format!("Token signing failed: {e}")))
    }

    /// Verify a token against the current time
    pub fn verify_token(&self, token: &str) -> Result<()> {
        self.verify_token_at(token, Utc::now().timestamp())
    }

    /// Verify a token as if the current time were `now` (Unix seconds)
    ///
    /// A token is valid only while `now < exp`.
    pub fn verify_token_at(&self, token: &str, now: i64) -> Result<()> {
        let header = jsonwebtoken::decode_header(token)
            .map_err(|_| Error::token_invalid(TokenRejection::Malformed))?;
        if header.alg != self.algorithm {
            return Err(Error::token_invalid(TokenRejection::AlgorithmMismatch));
        }

        let data =
            jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
                .map_err(|e| Error::token_invalid(rejection_for(e.kind())))?;

        if now >= data.claims.exp {
            return Err(Error::token_invalid(TokenRejection::Expired));
        }
        Ok(())
    }

    /// Name of the configured algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.lifetime_secs.unsigned_abs())
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.algorithm)
            .field("lifetime_secs", &self.lifetime_secs)
            .finish_non_exhaustive()
    }
}

fn parse_algorithm(name: &str) -> Result<Algorithm> {
    if !SUPPORTED_TOKEN_ALGORITHMS.contains(&name) {
        return Err(Error::configuration(format!(
            "Unsupported signing algorithm: {name}"
        )));
    }
    Algorithm::from_str(name)
        .map_err(|e| Error::configuration_with_source(format!("Unknown algorithm: {name}"), e))
}

fn rejection_for(kind: &ErrorKind) -> TokenRejection {
    match kind {
        ErrorKind::InvalidSignature => TokenRejection::BadSignature,
        ErrorKind::InvalidAlgorithm => TokenRejection::AlgorithmMismatch,
        ErrorKind::ExpiredSignature => TokenRejection::Expired,
        _ => TokenRejection::Malformed,
    }
}
